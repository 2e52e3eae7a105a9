//! Editing session for one color-valued field.
//!
//! The remote owns the stored value (`component`). The editor keeps the value
//! shown to the user (`value`) and, for linear colors, the HDR intensity that
//! splits the two: `component = value × 2^intensity`. Every editing operation
//! returns the color to send back to the remote; the remote's echo comes back
//! through [`ColorEditor::sync`].
//!
//! ```text
//!   remote ──sync──→ memo ──→ value (base) + intensity ──edit──→ saved color ──→ remote
//! ```

use std::fmt::Debug;

use lumen_core::protocol::{decode_color_envelope, encode_color, wrap_envelope};
use lumen_core::{
    Color, ColorSpace, EditorConfig, HdrIntensity, IntensitySwatch, RgbaLinear,
    inject_hdr_intensity, intensity_swatches,
};
use serde_json::{Map, Value};

use crate::channel::{Channel, with_channel};
use crate::error::EditorError;
use crate::memo::IntensityMemo;

/// Editing state for the color field of the selected entity.
#[derive(Debug, Clone)]
pub struct ColorEditor<K> {
    config: EditorConfig,
    memo: IntensityMemo<K>,
    selection: K,
    component: Color,
    value: Color,
    intensity: f64,
}

impl<K: PartialEq + Clone + Debug> ColorEditor<K> {
    pub fn new(config: EditorConfig, selection: K, component: Color) -> Self {
        let mut editor = Self {
            config,
            memo: IntensityMemo::new(),
            selection: selection.clone(),
            component,
            value: component,
            intensity: 0.0,
        };
        editor.sync(selection, component);
        editor
    }

    /// Take an update from the remote.
    ///
    /// A change of selection invalidates the intensity memo. Linear values are
    /// split through the memo, so intensity is extracted once per selection
    /// and then held; other spaces are shown as is at intensity 0.
    pub fn sync(&mut self, selection: K, component: Color) {
        if selection != self.selection {
            tracing::debug!(
                from = ?self.selection,
                to = ?selection,
                "color editor selection changed"
            );
            self.memo.invalidate();
            self.selection = selection;
        }

        self.component = component;
        match component {
            Color::RgbaLinear(linear) => {
                let HdrIntensity { base, intensity } = self.memo.observe(&self.selection, linear);
                self.value = base.into();
                self.intensity = intensity;
            }
            other => {
                self.memo.invalidate();
                self.value = other;
                self.intensity = 0.0;
            }
        }
    }

    /// [`sync`](Self::sync) from a component envelope as the remote sends it.
    ///
    /// Returns `Ok(false)` and leaves the state alone when the envelope is
    /// empty.
    pub fn sync_envelope(&mut self, selection: K, envelope: &Value) -> Result<bool, EditorError> {
        match decode_color_envelope(envelope)? {
            Some(component) => {
                self.sync(selection, component);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Value shown to the user. For linear colors this is the base at
    /// intensity 0.
    pub fn value(&self) -> Color {
        self.value
    }

    /// Last value reported by, or sent to, the remote.
    pub fn component(&self) -> Color {
        self.component
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn space(&self) -> ColorSpace {
        self.value.space()
    }

    pub fn selection(&self) -> &K {
        &self.selection
    }

    /// Replace one channel of the shown value. Linear edits are re-injected
    /// at the current intensity before saving.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> Result<Color, EditorError> {
        let edited = with_channel(&self.value, channel, value)?;
        let saved = match edited {
            Color::RgbaLinear(base) => {
                Color::RgbaLinear(inject_hdr_intensity(base, self.intensity))
            }
            other => other,
        };

        tracing::debug!(%channel, value, space = %edited.space(), "color channel edited");
        self.value = edited;
        self.component = saved;
        Ok(saved)
    }

    /// The stored value converted into `space`.
    ///
    /// The editor state is left alone; the converted value arrives back
    /// through [`sync`](Self::sync).
    pub fn set_color_space(&self, space: ColorSpace) -> Color {
        tracing::debug!(from = %self.component.space(), to = %space, "color space changed");
        self.component.convert(space)
    }

    /// Set the HDR intensity explicitly, keeping the shown base.
    pub fn set_intensity(&mut self, intensity: f64) -> Result<Color, EditorError> {
        let base = self.linear_base()?;
        let saved = Color::RgbaLinear(inject_hdr_intensity(base, intensity));

        self.memo.set_intensity(&self.selection, intensity);
        self.intensity = intensity;
        self.component = saved;
        Ok(saved)
    }

    /// Move the intensity by `offset` steps, as picking a swatch does.
    pub fn apply_swatch(&mut self, offset: f64) -> Result<Color, EditorError> {
        self.set_intensity(self.intensity + offset)
    }

    /// Swatch strip around the current base and intensity. Empty for
    /// non-linear values.
    pub fn swatches(&self) -> Vec<IntensitySwatch> {
        match self.value {
            Color::RgbaLinear(base) => {
                let hdr = HdrIntensity {
                    base,
                    intensity: self.intensity,
                };
                intensity_swatches(&hdr, &self.config.swatches)
            }
            _ => Vec::new(),
        }
    }

    /// Re-derive intensity from the stored value, replacing the held one.
    pub fn recalculate_intensity(&mut self) -> Result<HdrIntensity, EditorError> {
        let Color::RgbaLinear(linear) = self.component else {
            return Err(EditorError::NotLinear(self.component.space()));
        };

        let hdr = self.memo.recalculate(&self.selection, linear);
        self.value = hdr.base.into();
        self.intensity = hdr.intensity;
        Ok(hdr)
    }

    /// Whether recalculating could change anything: false when a base channel
    /// already sits at exactly 1, or the value is not linear.
    pub fn can_recalculate(&self) -> bool {
        match self.value {
            Color::RgbaLinear(base) => !base.rgb().contains(&1.0),
            _ => false,
        }
    }

    /// Take a color picked on the wheel.
    ///
    /// The pick is converted into the stored value's space; for linear values
    /// with a positive intensity it is treated as the new base.
    pub fn apply_wheel(&mut self, picked: Color) -> Color {
        let converted = picked.to_space_of(&self.component);
        let saved = match converted {
            Color::RgbaLinear(base) if self.intensity > 0.0 => {
                Color::RgbaLinear(inject_hdr_intensity(base, self.intensity))
            }
            other => other,
        };

        self.value = converted;
        self.component = saved;
        saved
    }

    /// Whether `saved` matches the stored value at the configured precision.
    pub fn is_unchanged(&self, saved: &Color) -> bool {
        let denominator = self.config.precision_denominator;
        self.component.approx_eq_at(saved, denominator)
    }

    /// Envelope carrying `saved` as the field's value, keyed by the remote's
    /// type name.
    pub fn save_envelope(&self, type_name: &str, saved: &Color) -> Result<Value, EditorError> {
        let mut inner = Map::new();
        inner.insert(type_name.to_string(), encode_color(saved)?);
        Ok(wrap_envelope(&Value::Object(inner)))
    }

    fn linear_base(&self) -> Result<RgbaLinear, EditorError> {
        match self.value {
            Color::RgbaLinear(base) => Ok(base),
            other => Err(EditorError::NotLinear(other.space())),
        }
    }
}
