//! Density accumulation for large sets of 2D point observations.
//!
//! Points are splatted onto a float accumulation buffer through small
//! kernel "stamps"; the buffer tracks its running maximum so a renderer
//! can normalize intensities. Color mapping and image output live in
//! the `heatmap-render` crate.

pub mod buffer;
pub mod error;
pub mod stamp;

pub use buffer::Heatmap;
pub use error::{HeatmapError, HeatmapResult};
pub use stamp::{linear_falloff, Stamp};
