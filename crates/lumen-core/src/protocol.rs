//! Codec for colors as exchanged with the remote inspection protocol.
//!
//! A color travels as a map with one key naming the active variant:
//!
//! ```text
//! {"RgbaLinear": {"red": 4.0, "green": 1.0, "blue": 0.5, "alpha": 1.0}}
//! ```
//!
//! Component values are additionally wrapped in an envelope holding JSON text,
//! `{"JSON": "{\"bevy_render::color::Color\": {...}}"}`, or replaced by the
//! sentinel string `"<<Unserializable>>"` when the remote cannot encode them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{Color, ColorSpace, Hsla, Lcha, Rgba, RgbaLinear};
use crate::error::ColorError;

/// Sentinel sent in place of an envelope for values the remote cannot encode.
pub const UNSERIALIZABLE: &str = "<<Unserializable>>";

/// `{"JSON": "<text>"}` wrapper around a serialized component value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "JSON")]
    pub json: String,
}

/// Decode a tagged color record.
///
/// Fails with [`ColorError::InvalidColorFormat`] when `value` is not a map or
/// does not carry exactly one of the `Rgba` / `RgbaLinear` / `Hsla` / `Lcha`
/// tags, and with [`ColorError::Json`] when the tag has a malformed payload.
pub fn decode_color(value: &Value) -> Result<Color, ColorError> {
    let Some(map) = value.as_object() else {
        return Err(ColorError::InvalidColorFormat(format!(
            "expected a tagged map, got {value}"
        )));
    };

    let tagged: Vec<(ColorSpace, &Value)> = map
        .iter()
        .filter_map(|(key, payload)| ColorSpace::from_tag(key).map(|space| (space, payload)))
        .collect();

    let &[(space, payload)] = tagged.as_slice() else {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        tracing::warn!(
            tags = tagged.len(),
            "color record needs exactly one variant tag: {keys:?}"
        );
        return Err(ColorError::InvalidColorFormat(format!(
            "expected exactly one variant tag, got keys {keys:?}"
        )));
    };

    let color = match space {
        ColorSpace::Rgba => Color::Rgba(Rgba::deserialize(payload)?),
        ColorSpace::RgbaLinear => Color::RgbaLinear(RgbaLinear::deserialize(payload)?),
        ColorSpace::Hsla => Color::Hsla(Hsla::deserialize(payload)?),
        ColorSpace::Lcha => Color::Lcha(Lcha::deserialize(payload)?),
    };
    Ok(color)
}

/// Encode a color as a tagged record.
pub fn encode_color(color: &Color) -> Result<Value, ColorError> {
    Ok(serde_json::to_value(color)?)
}

/// Open a component envelope and return the value under its type-name key.
///
/// `null` yields `Ok(None)`, as does an envelope whose text is not a
/// non-empty map. The sentinel string yields [`ColorError::Unserializable`].
pub fn unwrap_envelope(value: &Value) -> Result<Option<Value>, ColorError> {
    match value {
        Value::Null => return Ok(None),
        Value::String(text) if text == UNSERIALIZABLE => return Err(ColorError::Unserializable),
        _ => {}
    }

    let envelope = Envelope::deserialize(value)?;
    let inner: Value = serde_json::from_str(&envelope.json)?;
    match inner {
        Value::Object(map) => Ok(map.into_iter().next().map(|(_, v)| v)),
        _ => Ok(None),
    }
}

/// Wrap a value in a component envelope.
pub fn wrap_envelope(value: &Value) -> Value {
    serde_json::json!({ "JSON": value.to_string() })
}

/// Open an envelope and decode the color inside it.
pub fn decode_color_envelope(value: &Value) -> Result<Option<Color>, ColorError> {
    unwrap_envelope(value)?
        .map(|inner| decode_color(&inner))
        .transpose()
}
