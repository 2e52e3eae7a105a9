//! Color value types.
//!
//! [`Color`] is a closed sum over four representations. Its serde encoding is
//! the externally tagged form used by the inspection protocol: one map key
//! naming the active variant, e.g. `{"Rgba": {"red": 1.0, ...}}`.
//!
//! Channels are plain `f64` and are never validated. Non-finite values are a
//! caller precondition: conversions propagate them arithmetically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gamma-encoded ("nonlinear") sRGB with alpha.
///
/// Channels are nominally `0.0..=1.0`; values outside that range are carried
/// as is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Linear-light sRGB with alpha. Channels above 1.0 encode HDR intensity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbaLinear {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Hue (degrees), saturation, lightness and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

/// CIE LCh(ab) with lightness and chroma scaled to 0–1 (classic / 100) and
/// hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lcha {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl RgbaLinear {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Largest of the red, green and blue channels.
    pub fn max_channel(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// Multiply red, green and blue by `factor`, leaving alpha untouched.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            red: self.red * factor,
            green: self.green * factor,
            blue: self.blue * factor,
            alpha: self.alpha,
        }
    }
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl Lcha {
    pub const fn new(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            alpha,
        }
    }
}

/// Identifies one of the four color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB.
    Rgba,
    /// Linear-light sRGB.
    RgbaLinear,
    /// Hue / saturation / lightness.
    Hsla,
    /// CIE LCh(ab).
    Lcha,
}

impl ColorSpace {
    /// Variant tag as it appears on the wire.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Rgba => "Rgba",
            Self::RgbaLinear => "RgbaLinear",
            Self::Hsla => "Hsla",
            Self::Lcha => "Lcha",
        }
    }

    /// Human-readable label for menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgba => "sRGB",
            Self::RgbaLinear => "Linear sRGB",
            Self::Hsla => "HSL",
            Self::Lcha => "LCh",
        }
    }

    /// Look up a space by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|space| space.tag() == tag)
    }

    /// Every supported space, in menu order.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorSpace; 4] = [
            ColorSpace::Rgba,
            ColorSpace::RgbaLinear,
            ColorSpace::Hsla,
            ColorSpace::Lcha,
        ];
        &ALL
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A color in exactly one of the four supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgba(Rgba),
    RgbaLinear(RgbaLinear),
    Hsla(Hsla),
    Lcha(Lcha),
}

impl Color {
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::Rgba(Rgba::new(red, green, blue, alpha))
    }

    pub const fn rgba_linear(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::RgbaLinear(RgbaLinear::new(red, green, blue, alpha))
    }

    pub const fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::Hsla(Hsla::new(hue, saturation, lightness, alpha))
    }

    pub const fn lcha(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        Self::Lcha(Lcha::new(lightness, chroma, hue, alpha))
    }

    /// The representation this value is stored in.
    pub const fn space(&self) -> ColorSpace {
        match self {
            Self::Rgba(_) => ColorSpace::Rgba,
            Self::RgbaLinear(_) => ColorSpace::RgbaLinear,
            Self::Hsla(_) => ColorSpace::Hsla,
            Self::Lcha(_) => ColorSpace::Lcha,
        }
    }

    pub const fn alpha(&self) -> f64 {
        match self {
            Self::Rgba(c) => c.alpha,
            Self::RgbaLinear(c) => c.alpha,
            Self::Hsla(c) => c.alpha,
            Self::Lcha(c) => c.alpha,
        }
    }

    /// Channels of the active variant in field order, alpha last.
    pub const fn channels(&self) -> [f64; 4] {
        match *self {
            Self::Rgba(c) => [c.red, c.green, c.blue, c.alpha],
            Self::RgbaLinear(c) => [c.red, c.green, c.blue, c.alpha],
            Self::Hsla(c) => [c.hue, c.saturation, c.lightness, c.alpha],
            Self::Lcha(c) => [c.lightness, c.chroma, c.hue, c.alpha],
        }
    }

    /// Apply `f` to every channel of the active variant, alpha included.
    /// The variant is preserved.
    pub fn map_channels(&self, f: impl Fn(f64) -> f64) -> Self {
        let [c0, c1, c2, c3] = self.channels().map(f);
        match self {
            Self::Rgba(_) => Self::rgba(c0, c1, c2, c3),
            Self::RgbaLinear(_) => Self::rgba_linear(c0, c1, c2, c3),
            Self::Hsla(_) => Self::hsla(c0, c1, c2, c3),
            Self::Lcha(_) => Self::lcha(c0, c1, c2, c3),
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Self::Rgba(color)
    }
}

impl From<RgbaLinear> for Color {
    fn from(color: RgbaLinear) -> Self {
        Self::RgbaLinear(color)
    }
}

impl From<Hsla> for Color {
    fn from(color: Hsla) -> Self {
        Self::Hsla(color)
    }
}

impl From<Lcha> for Color {
    fn from(color: Lcha) -> Self {
        Self::Lcha(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_matches_variant() {
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 1.0).space(), ColorSpace::Rgba);
        assert_eq!(
            Color::rgba_linear(0.0, 0.0, 0.0, 1.0).space(),
            ColorSpace::RgbaLinear
        );
        assert_eq!(Color::hsla(0.0, 0.0, 0.0, 1.0).space(), ColorSpace::Hsla);
        assert_eq!(Color::lcha(0.0, 0.0, 0.0, 1.0).space(), ColorSpace::Lcha);
    }

    #[test]
    fn test_channels_follow_field_order() {
        let lcha = Color::lcha(0.1, 0.2, 0.3, 0.4);
        assert_eq!(lcha.channels(), [0.1, 0.2, 0.3, 0.4]);
        let hsla = Color::hsla(10.0, 0.2, 0.3, 0.4);
        assert_eq!(hsla.channels(), [10.0, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_map_channels_preserves_variant() {
        let color = Color::hsla(90.0, 0.5, 0.25, 1.0);
        let doubled = color.map_channels(|c| c * 2.0);
        assert_eq!(doubled, Color::hsla(180.0, 1.0, 0.5, 2.0));
    }

    #[test]
    fn test_tag_lookup_roundtrips() {
        for &space in ColorSpace::all() {
            assert_eq!(ColorSpace::from_tag(space.tag()), Some(space));
        }
        assert_eq!(ColorSpace::from_tag("Oklaba"), None);
    }

    #[test]
    fn test_labels_are_distinct_from_tags() {
        assert_eq!(ColorSpace::Rgba.label(), "sRGB");
        assert_eq!(ColorSpace::RgbaLinear.label(), "Linear sRGB");
        assert_eq!(ColorSpace::Hsla.label(), "HSL");
        assert_eq!(ColorSpace::Lcha.label(), "LCh");
        assert_eq!(ColorSpace::Lcha.to_string(), "Lcha");
    }

    #[test]
    fn test_scaled_leaves_alpha() {
        let color = RgbaLinear::new(0.5, 0.25, 1.0, 0.3);
        assert_eq!(color.scaled(4.0), RgbaLinear::new(2.0, 1.0, 4.0, 0.3));
        assert_eq!(color.max_channel(), 1.0);
    }
}
