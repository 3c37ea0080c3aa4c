//! Stamp kernels: the influence footprint splatted per point.

use crate::error::{HeatmapError, HeatmapResult};

/// Per-cell tolerance used by [`Stamp::almost_eq`].
pub const ALMOST_EQ_TOLERANCE: f64 = 1e-6;

/// An immutable kernel of influence weights.
///
/// Radius-based generation always produces a square stamp of side
/// `2 * radius + 1`; explicit-data construction accepts any positive
/// dimensions. Weights are row-major and unconstrained in sign or
/// magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Stamp {
    /// Build a stamp from explicit row-major weight data.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> HeatmapResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeatmapError::InvalidDimension(format!(
                "stamp dimensions must be positive, got {width}x{height}"
            )));
        }
        if data.len() != width * height {
            return Err(HeatmapError::InvalidArgument(format!(
                "stamp data length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Generate a square stamp with the default linear falloff.
    ///
    /// Radius 0 yields a 1x1 stamp holding the falloff value at
    /// distance zero.
    pub fn generate(radius: i32) -> HeatmapResult<Self> {
        if radius < 0 {
            return Err(HeatmapError::InvalidDimension(format!(
                "stamp radius must be non-negative, got {radius}"
            )));
        }
        Self::generate_with(radius, linear_falloff(radius))
    }

    /// Generate a square stamp from a caller-supplied distance→weight
    /// mapping.
    ///
    /// The function is applied as-is: weights below zero or above one
    /// are kept, not clamped.
    pub fn generate_with<F>(radius: i32, falloff: F) -> HeatmapResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if radius < 0 {
            return Err(HeatmapError::InvalidDimension(format!(
                "stamp radius must be non-negative, got {radius}"
            )));
        }
        let side = (2 * radius + 1) as usize;
        let mut data = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                let dx = x as f64 - radius as f64;
                let dy = y as f64 - radius as f64;
                data.push(falloff((dx * dx + dy * dy).sqrt()));
            }
        }
        Ok(Self {
            width: side,
            height: side,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major weights.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Per-cell comparison within [`ALMOST_EQ_TOLERANCE`].
    ///
    /// Generated stamps carry irrational weights; exact `==` is meant
    /// for explicit-data stamps.
    pub fn almost_eq(&self, other: &Stamp) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= ALMOST_EQ_TOLERANCE)
    }
}

/// The default distance→weight mapping: linear falloff reaching zero
/// just past the stamp edge, `max(0, 1 − d / (radius + 1))`.
pub fn linear_falloff(radius: i32) -> impl Fn(f64) -> f64 {
    let reach = (radius + 1) as f64;
    move |d| (1.0 - d / reach).max(0.0)
}
