//! Helpers for drawing a color as a plain 8-bit swatch.

use crate::color::{Color, Rgba};
use crate::hdr::extract_hdr_intensity;

/// Reduce `color` to a nonlinear sRGB value that is safe to display on an SDR
/// surface.
///
/// Linear colors drop to their intensity-0 base first, so an emissive color
/// shows its hue rather than clipping to white. Red, green and blue are then
/// clamped to `[0, 1]`. Alpha is left as is.
pub fn sdr_safe(color: &Color) -> Rgba {
    let displayable = match color {
        Color::RgbaLinear(linear) => Color::RgbaLinear(extract_hdr_intensity(*linear).base),
        other => *other,
    };

    let rgba = displayable.to_rgba();
    Rgba {
        red: rgba.red.clamp(0.0, 1.0),
        green: rgba.green.clamp(0.0, 1.0),
        blue: rgba.blue.clamp(0.0, 1.0),
        alpha: rgba.alpha,
    }
}

/// Quantize `color` to an 8-bit RGBA pixel via [`sdr_safe`]. Alpha is clamped
/// here as well.
pub fn to_swatch_pixel(color: &Color) -> image::Rgba<u8> {
    let safe = sdr_safe(color);
    let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    image::Rgba([safe.red, safe.green, safe.blue, safe.alpha].map(quantize))
}
