//! Named channels of the color variants.

use std::fmt;
use std::str::FromStr;

use lumen_core::{Color, Hsla, Lcha, Rgba, RgbaLinear};
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// A single channel, named as in the protocol's field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Hue,
    Saturation,
    Lightness,
    Chroma,
}

impl Channel {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
        }
    }

    /// Channels of `color`'s variant, in field order.
    pub fn of(color: &Color) -> [Channel; 4] {
        match color {
            Color::Rgba(_) | Color::RgbaLinear(_) => {
                [Self::Red, Self::Green, Self::Blue, Self::Alpha]
            }
            Color::Hsla(_) => [Self::Hue, Self::Saturation, Self::Lightness, Self::Alpha],
            Color::Lcha(_) => [Self::Lightness, Self::Chroma, Self::Hue, Self::Alpha],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "alpha" => Ok(Self::Alpha),
            "hue" => Ok(Self::Hue),
            "saturation" => Ok(Self::Saturation),
            "lightness" => Ok(Self::Lightness),
            "chroma" => Ok(Self::Chroma),
            other => Err(EditorError::UnknownChannel(other.to_string())),
        }
    }
}

/// Copy of `color` with one channel replaced. The variant is kept.
pub fn with_channel(color: &Color, channel: Channel, value: f64) -> Result<Color, EditorError> {
    let mut edited = *color;
    let slot = match (&mut edited, channel) {
        (Color::Rgba(Rgba { red, .. }), Channel::Red)
        | (Color::RgbaLinear(RgbaLinear { red, .. }), Channel::Red) => red,
        (Color::Rgba(Rgba { green, .. }), Channel::Green)
        | (Color::RgbaLinear(RgbaLinear { green, .. }), Channel::Green) => green,
        (Color::Rgba(Rgba { blue, .. }), Channel::Blue)
        | (Color::RgbaLinear(RgbaLinear { blue, .. }), Channel::Blue) => blue,
        (Color::Rgba(Rgba { alpha, .. }), Channel::Alpha)
        | (Color::RgbaLinear(RgbaLinear { alpha, .. }), Channel::Alpha)
        | (Color::Hsla(Hsla { alpha, .. }), Channel::Alpha)
        | (Color::Lcha(Lcha { alpha, .. }), Channel::Alpha) => alpha,
        (Color::Hsla(Hsla { hue, .. }), Channel::Hue)
        | (Color::Lcha(Lcha { hue, .. }), Channel::Hue) => hue,
        (Color::Hsla(Hsla { saturation, .. }), Channel::Saturation) => saturation,
        (Color::Hsla(Hsla { lightness, .. }), Channel::Lightness)
        | (Color::Lcha(Lcha { lightness, .. }), Channel::Lightness) => lightness,
        (Color::Lcha(Lcha { chroma, .. }), Channel::Chroma) => chroma,
        _ => {
            return Err(EditorError::ChannelNotInSpace {
                channel,
                space: color.space(),
            });
        }
    };
    *slot = value;
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_channel_replaces_one_field() {
        let color = Color::lcha(0.5, 0.2, 30.0, 1.0);
        assert_eq!(
            with_channel(&color, Channel::Chroma, 0.4).unwrap(),
            Color::lcha(0.5, 0.4, 30.0, 1.0)
        );
        assert_eq!(
            with_channel(&color, Channel::Hue, 90.0).unwrap(),
            Color::lcha(0.5, 0.2, 90.0, 1.0)
        );
    }

    #[test]
    fn test_with_channel_rejects_foreign_channel() {
        let err = with_channel(&Color::rgba(1.0, 1.0, 1.0, 1.0), Channel::Chroma, 0.5).unwrap_err();
        assert!(matches!(
            err,
            EditorError::ChannelNotInSpace {
                channel: Channel::Chroma,
                ..
            }
        ));
    }

    #[test]
    fn test_every_listed_channel_is_settable() {
        let colors = [
            Color::rgba(0.1, 0.2, 0.3, 0.4),
            Color::rgba_linear(0.1, 0.2, 0.3, 0.4),
            Color::hsla(10.0, 0.2, 0.3, 0.4),
            Color::lcha(0.1, 0.2, 30.0, 0.4),
        ];
        for color in colors {
            for (i, channel) in Channel::of(&color).into_iter().enumerate() {
                let edited = with_channel(&color, channel, 0.75).unwrap();
                assert_eq!(edited.channels()[i], 0.75, "{channel} on {}", color.space());
            }
        }
    }

    #[test]
    fn test_channel_names_parse() {
        for channel in Channel::of(&Color::hsla(0.0, 0.0, 0.0, 0.0)) {
            assert_eq!(channel.name().parse::<Channel>().unwrap(), channel);
        }
        let unknown = "luma".parse::<Channel>();
        assert!(matches!(unknown, Err(EditorError::UnknownChannel(_))));
    }
}
