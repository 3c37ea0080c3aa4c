//! Color schemes: mapping normalized intensity to RGBA.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// How a scheme assigns the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaPolicy {
    /// Binary coverage mask: any cell with a nonzero raw value is
    /// fully opaque, untouched cells are fully transparent, no matter
    /// how the normalized intensity comes out.
    #[default]
    Coverage,
    /// Alpha follows the normalized intensity linearly.
    Ramp,
    /// Always fully opaque.
    Opaque,
}

/// A gradient control point: normalized position in [0, 1] and the
/// RGB color there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub t: f64,
    pub color: [u8; 3],
}

/// A function from normalized intensity to RGBA, defined by ordered
/// control points plus an alpha policy. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    stops: Vec<ControlPoint>,
    alpha: AlphaPolicy,
}

impl ColorScheme {
    /// Build a scheme from control points.
    ///
    /// Requires at least two stops, strictly ascending positions, all
    /// within [0, 1].
    pub fn new(stops: Vec<ControlPoint>, alpha: AlphaPolicy) -> Result<Self, SchemeError> {
        if stops.len() < 2 {
            return Err(SchemeError::Validation(
                "a color scheme needs at least 2 control points".to_string(),
            ));
        }
        for (i, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.t) {
                return Err(SchemeError::Validation(format!(
                    "control point position {} outside [0, 1]",
                    stop.t
                )));
            }
            if i > 0 && stop.t <= stops[i - 1].t {
                return Err(SchemeError::Validation(
                    "control points must be in strictly ascending order".to_string(),
                ));
            }
        }
        Ok(Self { stops, alpha })
    }

    /// The reference gray ramp: black at 0, white at 1, binary
    /// coverage alpha.
    pub fn black_to_white() -> Self {
        Self {
            stops: vec![
                ControlPoint {
                    t: 0.0,
                    color: [0, 0, 0],
                },
                ControlPoint {
                    t: 1.0,
                    color: [255, 255, 255],
                },
            ],
            alpha: AlphaPolicy::Coverage,
        }
    }

    pub fn alpha_policy(&self) -> AlphaPolicy {
        self.alpha
    }

    /// Same gradient under a different alpha policy.
    pub fn with_alpha_policy(mut self, alpha: AlphaPolicy) -> Self {
        self.alpha = alpha;
        self
    }

    /// Color for normalized intensity `t`. `raw` is the underlying
    /// accumulated cell value, consulted only by the coverage mask.
    pub fn color_at(&self, t: f64, raw: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let [r, g, b] = self.interpolate(t);
        let a = match self.alpha {
            AlphaPolicy::Coverage => {
                if raw != 0.0 {
                    255
                } else {
                    0
                }
            }
            AlphaPolicy::Ramp => (t * 255.0) as u8,
            AlphaPolicy::Opaque => 255,
        };
        Rgba::new(r, g, b, a)
    }

    fn interpolate(&self, t: f64) -> [u8; 3] {
        let first = &self.stops[0];
        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if t <= hi.t {
                let f = (t - lo.t) / (hi.t - lo.t);
                return [
                    lerp_channel(lo.color[0], hi.color[0], f),
                    lerp_channel(lo.color[1], hi.color[1], f),
                    lerp_channel(lo.color[2], hi.color[2], f),
                ];
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

// Truncating cast on purpose: t = 0.5 on the gray ramp must yield 127,
// not 128.
fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
    (a as f64 * (1.0 - f) + b as f64 * f) as u8
}

/// Scheme construction and palette-config errors.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
