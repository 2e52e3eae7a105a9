//! Editor-facing settings.
//!
//! Every field has a serde default, so a partial JSON document (or `{}`)
//! yields a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Layout of the HDR intensity swatch strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchConfig {
    /// Intensity offsets, one swatch each, relative to the current intensity.
    #[serde(default = "SwatchConfig::default_offsets")]
    pub offsets: Vec<f64>,
    /// Offset of the glow color relative to each swatch.
    #[serde(default = "SwatchConfig::default_glow_offset")]
    pub glow_offset: f64,
    /// Upper bound of the glow opacity.
    #[serde(default = "SwatchConfig::default_max_glow_alpha")]
    pub max_glow_alpha: f64,
    /// Swatches whose absolute intensity is above this get a dark label.
    #[serde(default = "SwatchConfig::default_dark_label_threshold")]
    pub dark_label_threshold: f64,
}

impl SwatchConfig {
    fn default_offsets() -> Vec<f64> {
        vec![-2.0, -1.0, 0.0, 1.0, 2.0]
    }

    fn default_glow_offset() -> f64 {
        -2.0
    }

    fn default_max_glow_alpha() -> f64 {
        0.25
    }

    fn default_dark_label_threshold() -> f64 {
        -0.25
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            offsets: Self::default_offsets(),
            glow_offset: Self::default_glow_offset(),
            max_glow_alpha: Self::default_max_glow_alpha(),
            dark_label_threshold: Self::default_dark_label_threshold(),
        }
    }
}

/// Settings for a color editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Denominator passed to [`round_precision`](crate::precision::round_precision)
    /// when deciding whether a value changed. 1000 keeps three decimals.
    #[serde(default = "EditorConfig::default_precision_denominator")]
    pub precision_denominator: f64,
    /// HDR swatch strip layout.
    #[serde(default)]
    pub swatches: SwatchConfig,
}

impl EditorConfig {
    fn default_precision_denominator() -> f64 {
        1000.0
    }

    /// Parse a configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ColorError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            precision_denominator: Self::default_precision_denominator(),
            swatches: SwatchConfig::default(),
        }
    }
}
