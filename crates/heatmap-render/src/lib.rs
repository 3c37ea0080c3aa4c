//! Color mapping and image output for heat-density buffers.
//!
//! Takes an accumulation buffer from `heatmap-core` and produces a
//! packed RGBA pixel buffer under one of two normalization policies
//! (dynamic-max or fixed-saturation), plus a minimal PNG encoder for
//! the result.

pub mod palette;
pub mod png;
pub mod render;
pub mod scheme;

pub use palette::{PaletteRegistry, SchemeConfig};
pub use render::{render_default, render_saturated, render_with_scheme};
pub use scheme::{AlphaPolicy, ColorScheme, ControlPoint, Rgba, SchemeError};
