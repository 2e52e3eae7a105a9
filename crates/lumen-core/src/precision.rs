//! Fixed-step quantization of color channels.
//!
//! Applied before comparing a value against what the remote last reported, and
//! before re-serializing through the protocol's text-based number formatting.

use crate::color::Color;

/// Round every channel of the active variant, alpha included, to a multiple
/// of `1 / denominator`.
///
/// ```text
/// x' = round(x × denominator) / denominator
/// ```
///
/// `denominator` must be positive. The variant is preserved. Idempotent.
pub fn round_precision(color: &Color, denominator: f64) -> Color {
    color.map_channels(|x| (x * denominator).round() / denominator)
}

impl Color {
    /// Whether `self` and `other` are the same variant and agree on every
    /// channel after rounding both to `denominator`.
    pub fn approx_eq_at(&self, other: &Color, denominator: f64) -> bool {
        round_precision(self, denominator) == round_precision(other, denominator)
    }
}
