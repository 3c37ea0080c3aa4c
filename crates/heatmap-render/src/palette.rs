//! Named palette registry.
//!
//! Palettes are data-driven control-point tables keyed by name: a gray
//! reference ramp plus a set of ColorBrewer-derived gradients, each
//! also registered with an `_opaque` alpha variant. Further schemes
//! load from JSON configuration documents.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scheme::{AlphaPolicy, ColorScheme, ControlPoint, SchemeError};

/// A registry of named color schemes.
pub struct PaletteRegistry {
    schemes: HashMap<String, ColorScheme>,
}

impl PaletteRegistry {
    /// Empty registry, with no schemes registered.
    ///
    /// Note that `Default` is [`PaletteRegistry::builtin`], not this:
    /// the default registry is the usable one, `new` is the starting
    /// point for configs that define every scheme themselves.
    pub fn new() -> Self {
        Self {
            schemes: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in palettes.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert_with_opaque("b2w", ColorScheme::black_to_white());
        registry.insert_with_opaque(
            "w2b",
            ramp(&["#ffffff", "#000000"], AlphaPolicy::Coverage),
        );
        for (name, hexes) in BREWER_RAMPS {
            registry.insert_with_opaque(name, ramp(hexes, AlphaPolicy::Ramp));
        }
        debug!(count = registry.schemes.len(), "built-in palettes registered");
        registry
    }

    /// Look up a scheme by name.
    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// Register or replace a scheme.
    pub fn insert(&mut self, name: impl Into<String>, scheme: ColorScheme) {
        self.schemes.insert(name.into(), scheme);
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merge every scheme from a JSON configuration document.
    pub fn load_json(&mut self, json: &str) -> Result<(), SchemeError> {
        let config = SchemeConfig::from_json(json)?;
        for (name, definition) in config.schemes {
            let scheme = definition.compile()?;
            debug!(name = %name, "palette loaded from config");
            self.schemes.insert(name, scheme);
        }
        Ok(())
    }

    /// Merge schemes from a JSON configuration file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), SchemeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SchemeError::Io(e.to_string()))?;
        self.load_json(&content)
    }

    fn insert_with_opaque(&mut self, name: &str, scheme: ColorScheme) {
        self.schemes.insert(
            format!("{name}_opaque"),
            scheme.clone().with_alpha_policy(AlphaPolicy::Opaque),
        );
        self.schemes.insert(name.to_string(), scheme);
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Root palette configuration: multiple named scheme definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    #[serde(default = "default_version")]
    pub version: String,

    pub schemes: HashMap<String, SchemeDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl SchemeConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemeError> {
        serde_json::from_str(json).map_err(|e| SchemeError::Parse(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SchemeError::Io(e.to_string()))?;
        Self::from_json(&content)
    }
}

/// One named scheme in a configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeDefinition {
    #[serde(default)]
    pub description: String,

    /// Gradient stops, ascending in `t`.
    pub stops: Vec<StopConfig>,

    #[serde(default)]
    pub alpha: AlphaPolicy,
}

impl SchemeDefinition {
    /// Validate and build the runtime scheme.
    pub fn compile(&self) -> Result<ColorScheme, SchemeError> {
        let mut stops = Vec::with_capacity(self.stops.len());
        for stop in &self.stops {
            let color = parse_hex(&stop.color).ok_or_else(|| {
                SchemeError::Validation(format!("invalid hex color: {}", stop.color))
            })?;
            stops.push(ControlPoint { t: stop.t, color });
        }
        ColorScheme::new(stops, self.alpha)
    }
}

/// A configured gradient stop: position and "#RRGGBB" color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopConfig {
    pub t: f64,
    pub color: String,
}

/// Parse a "#RRGGBB" hex string into RGB components.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    // Byte-offset slicing below requires single-byte characters.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

fn ramp(hexes: &[&str], alpha: AlphaPolicy) -> ColorScheme {
    let last = (hexes.len() - 1) as f64;
    let stops = hexes
        .iter()
        .enumerate()
        .map(|(i, hex)| ControlPoint {
            t: i as f64 / last,
            color: parse_hex(hex).expect("built-in palette colors are valid hex"),
        })
        .collect();
    ColorScheme::new(stops, alpha).expect("built-in palettes are valid")
}

// ColorBrewer gradients, light (low heat) to dark (high heat) for the
// sequential ramps.
const BREWER_RAMPS: &[(&str, &[&str])] = &[
    (
        "Blues",
        &[
            "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5",
            "#08519c", "#08306b",
        ],
    ),
    (
        "Greens",
        &[
            "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45",
            "#006d2c", "#00441b",
        ],
    ),
    (
        "Greys",
        &[
            "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252",
            "#252525", "#000000",
        ],
    ),
    (
        "OrRd",
        &[
            "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f",
            "#b30000", "#7f0000",
        ],
    ),
    (
        "YlOrRd",
        &[
            "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c",
            "#bd0026", "#800026",
        ],
    ),
    (
        "YlGnBu",
        &[
            "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8",
            "#253494", "#081d58",
        ],
    ),
    (
        "Spectral",
        &[
            "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598",
            "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
        ],
    ),
    (
        "RdYlBu",
        &[
            "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8",
            "#abd9e9", "#74add1", "#4575b4", "#313695",
        ],
    ),
];
