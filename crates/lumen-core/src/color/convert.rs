//! Dispatch between the four representations.
//!
//! Every target has a conversion from every source. Converting into the space
//! a value is already in returns it unchanged, bit for bit. Alpha is copied
//! through every branch. Paths between non-RGB spaces go through nonlinear
//! sRGB (e.g. Hsla → Rgba → Lcha).

use crate::color::model::{Color, ColorSpace, Hsla, Lcha, Rgba, RgbaLinear};
use crate::color_management::hsl::{hsl_to_nonlinear_srgb, nonlinear_srgb_to_hsl};
use crate::color_management::lch::{lch_to_nonlinear_srgb, nonlinear_srgb_to_lch};
use crate::color_management::transfer::{decode_rgb, encode_rgb};

impl Color {
    /// Convert to gamma-encoded sRGB.
    pub fn to_rgba(&self) -> Rgba {
        let [red, green, blue] = match *self {
            Self::Rgba(color) => return color,
            Self::RgbaLinear(c) => encode_rgb(c.rgb()),
            Self::Hsla(c) => hsl_to_nonlinear_srgb(c.hue, c.saturation, c.lightness),
            Self::Lcha(c) => lch_to_nonlinear_srgb(c.lightness, c.chroma, c.hue),
        };
        Rgba::new(red, green, blue, self.alpha())
    }

    /// Convert to linear-light sRGB.
    pub fn to_rgba_linear(&self) -> RgbaLinear {
        match *self {
            Self::RgbaLinear(color) => color,
            _ => {
                let nonlinear = self.to_rgba();
                let [red, green, blue] = decode_rgb(nonlinear.rgb());
                RgbaLinear::new(red, green, blue, nonlinear.alpha)
            }
        }
    }

    /// Convert to HSL.
    pub fn to_hsla(&self) -> Hsla {
        match *self {
            Self::Hsla(color) => color,
            _ => {
                let c = self.to_rgba();
                let [hue, saturation, lightness] = nonlinear_srgb_to_hsl(c.red, c.green, c.blue);
                Hsla::new(hue, saturation, lightness, c.alpha)
            }
        }
    }

    /// Convert to LCh.
    pub fn to_lcha(&self) -> Lcha {
        match *self {
            Self::Lcha(color) => color,
            _ => {
                let c = self.to_rgba();
                let [lightness, chroma, hue] = nonlinear_srgb_to_lch(c.red, c.green, c.blue);
                Lcha::new(lightness, chroma, hue, c.alpha)
            }
        }
    }

    /// Convert into `space`.
    pub fn convert(&self, space: ColorSpace) -> Color {
        match space {
            ColorSpace::Rgba => self.to_rgba().into(),
            ColorSpace::RgbaLinear => self.to_rgba_linear().into(),
            ColorSpace::Hsla => self.to_hsla().into(),
            ColorSpace::Lcha => self.to_lcha().into(),
        }
    }

    /// Convert into whichever space `other` is stored in.
    ///
    /// Used when a picked color must be saved back in the space the edited
    /// value already uses.
    pub fn to_space_of(&self, other: &Color) -> Color {
        self.convert(other.space())
    }
}
