//! Rendering the accumulation buffer to packed RGBA pixels.
//!
//! Output layout: `width * height * 4` bytes, R,G,B,A per pixel,
//! row-major, top-to-bottom, left-to-right. Rendering never mutates
//! the buffer.

use heatmap_core::{Heatmap, HeatmapError, HeatmapResult};
use tracing::debug;

use crate::scheme::{ColorScheme, Rgba};

/// Dynamic-normalization render: intensities are scaled against the
/// buffer's own running maximum, so the hottest cell always lands on
/// the top of the scheme. An all-zero buffer renders fully
/// transparent.
pub fn render_with_scheme(map: &Heatmap, scheme: &ColorScheme) -> Vec<u8> {
    let max = map.max();
    debug!(
        width = map.width(),
        height = map.height(),
        max,
        "rendering with dynamic normalization"
    );
    render_pixels(map, scheme, |v| if max == 0.0 { 0.0 } else { v / max })
}

/// Saturated render: intensities are capped at a caller-chosen
/// `saturation` instead of the buffer maximum, keeping renders
/// comparable across buffers with different totals.
pub fn render_saturated(
    map: &Heatmap,
    scheme: &ColorScheme,
    saturation: f64,
) -> HeatmapResult<Vec<u8>> {
    if saturation <= 0.0 {
        return Err(HeatmapError::InvalidArgument(format!(
            "saturation must be positive, got {saturation}"
        )));
    }
    debug!(
        width = map.width(),
        height = map.height(),
        saturation,
        "rendering with fixed saturation"
    );
    Ok(render_pixels(map, scheme, |v| {
        (v / saturation).clamp(0.0, 1.0)
    }))
}

/// Dynamic render with the reference black-to-white scheme.
pub fn render_default(map: &Heatmap) -> Vec<u8> {
    render_with_scheme(map, &ColorScheme::black_to_white())
}

fn render_pixels<F>(map: &Heatmap, scheme: &ColorScheme, normalize: F) -> Vec<u8>
where
    F: Fn(f64) -> f64,
{
    let mut pixels = vec![0u8; map.width() * map.height() * 4];
    for (idx, &raw) in map.cells().iter().enumerate() {
        // Untouched cells stay fully transparent under every scheme.
        if raw == 0.0 {
            continue;
        }
        let Rgba { r, g, b, a } = scheme.color_at(normalize(raw), raw);
        let offset = idx * 4;
        pixels[offset] = r;
        pixels[offset + 1] = g;
        pixels[offset + 2] = b;
        pixels[offset + 3] = a;
    }
    pixels
}
