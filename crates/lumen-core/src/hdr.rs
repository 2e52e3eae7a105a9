//! HDR intensity encoding for linear colors.
//!
//! An over-unit linear color is split into a base color whose largest RGB
//! channel is at most 1 and an intensity `n` such that
//! `color = base × 2ⁿ`. Intensity may be fractional.
//!
//! ```text
//!   RgbaLinear(8, 4, 2) ──extract──→ base (1, 0.5, 0.25), n = 3
//!   base, n = 3         ──inject───→ RgbaLinear(8, 4, 2)
//! ```
//!
//! These functions are stateless. Deciding *when* to re-extract (once per
//! selection, or on an explicit recalculate) is left to the caller: extracting
//! again from a value that was already rescaled loses the intensity the user
//! chose.

use serde::{Deserialize, Serialize};

use crate::color::RgbaLinear;
use crate::config::SwatchConfig;

/// A linear color split into a unit-range base and a power-of-two exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HdrIntensity {
    /// Color at intensity 0. Largest RGB channel is at most 1.
    pub base: RgbaLinear,
    /// log2 of the scale factor applied to `base`.
    pub intensity: f64,
}

impl HdrIntensity {
    /// Reassemble the full linear color.
    pub fn color(&self) -> RgbaLinear {
        inject_hdr_intensity(self.base, self.intensity)
    }
}

/// Split `color` into base color and intensity.
///
/// If the largest RGB channel is at most 1 the color is returned unchanged
/// with intensity 0; sub-unit colors are never scaled up. Otherwise intensity
/// is `log2(max)` and every channel is divided by `max`, leaving the largest
/// channel at exactly 1.
pub fn extract_hdr_intensity(color: RgbaLinear) -> HdrIntensity {
    let max = color.max_channel();
    if max <= 1.0 {
        return HdrIntensity {
            base: color,
            intensity: 0.0,
        };
    }

    HdrIntensity {
        base: RgbaLinear {
            red: color.red / max,
            green: color.green / max,
            blue: color.blue / max,
            alpha: color.alpha,
        },
        intensity: max.log2(),
    }
}

/// Scale the RGB channels of `base` by `2^intensity`. Alpha is unchanged.
pub fn inject_hdr_intensity(base: RgbaLinear, intensity: f64) -> RgbaLinear {
    base.scaled(intensity.exp2())
}

/// Re-express `color` at an explicit intensity: extract its base, then inject
/// `intensity`.
pub fn at_hdr_intensity(color: RgbaLinear, intensity: f64) -> RgbaLinear {
    inject_hdr_intensity(extract_hdr_intensity(color).base, intensity)
}

/// One entry of the intensity swatch strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensitySwatch {
    /// Offset relative to the current intensity.
    pub offset: f64,
    /// Absolute intensity of this swatch.
    pub intensity: f64,
    /// Swatch fill; also the value to save when the swatch is picked.
    pub color: RgbaLinear,
    /// Dimmer color used for the glow behind the swatch.
    pub glow: RgbaLinear,
    /// Glow opacity, within `[0, max_glow_alpha]`.
    pub glow_alpha: f64,
    /// Whether the label drawn on the swatch should be dark.
    pub dark_label: bool,
}

/// Build the swatch strip around `hdr`, one swatch per configured offset.
///
/// Callers that cache the intensity of the value being edited pass the cached
/// pair; others pass `extract_hdr_intensity(color)`.
pub fn intensity_swatches(hdr: &HdrIntensity, config: &SwatchConfig) -> Vec<IntensitySwatch> {
    let HdrIntensity { base, intensity } = *hdr;

    config
        .offsets
        .iter()
        .map(|&offset| {
            let level = intensity + offset;
            let glow_level = level + config.glow_offset;
            IntensitySwatch {
                offset,
                intensity: level,
                color: inject_hdr_intensity(base, level),
                glow: inject_hdr_intensity(base, glow_level),
                glow_alpha: glow_level.min(config.max_glow_alpha).max(0.0),
                dark_label: level > config.dark_label_threshold,
            }
        })
        .collect()
}
