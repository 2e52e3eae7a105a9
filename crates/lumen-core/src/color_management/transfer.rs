//! sRGB transfer function (IEC 61966-2-1).
//!
//! Converts single channel values between linear light and the gamma-encoded
//! ("nonlinear") form. Both directions pass zero and negative values through
//! unchanged, and neither clamps the upper end, so over-unit HDR values keep
//! their magnitude.

/// Linear-segment threshold on the linear side.
const LINEAR_CUT: f64 = 0.0031308;

/// Linear-segment threshold on the encoded side.
const ENCODED_CUT: f64 = 0.04045;

/// Slope of the linear segment.
const LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the gamma segment.
const GAMMA: f64 = 2.4;

/// Encode a linear-light channel value into nonlinear sRGB.
///
/// ```text
/// L <= 0          → L
/// L <= 0.0031308  → L × 12.92
/// otherwise       → 1.055 × L^(1/2.4) − 0.055
/// ```
pub fn linear_to_nonlinear_srgb(value: f64) -> f64 {
    if value <= 0.0 {
        return value;
    }

    if value <= LINEAR_CUT {
        value * LINEAR_SLOPE
    } else {
        1.055 * value.powf(1.0 / GAMMA) - 0.055
    }
}

/// Decode a nonlinear sRGB channel value into linear light.
///
/// ```text
/// V <= 0        → V
/// V <= 0.04045  → V / 12.92
/// otherwise     → ((V + 0.055) / 1.055) ^ 2.4
/// ```
pub fn nonlinear_to_linear_srgb(value: f64) -> f64 {
    if value <= 0.0 {
        return value;
    }

    if value <= ENCODED_CUT {
        value / LINEAR_SLOPE
    } else {
        ((value + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Encode the red, green and blue channels of a linear triplet.
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(linear_to_nonlinear_srgb)
}

/// Decode the red, green and blue channels of a nonlinear triplet.
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(nonlinear_to_linear_srgb)
}
