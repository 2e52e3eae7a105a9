//! Lumen Editor — editing state for a color-valued field.
//!
//! Holds the value shown to the user, the HDR intensity memo for linear
//! colors, and the operations an inspector panel performs on them (channel
//! edits, space switches, intensity swatches, wheel picks). Each operation
//! returns the color to send back to the remote owner of the field.

pub mod channel;
pub mod editor;
mod error;
pub mod memo;

pub use channel::{Channel, with_channel};
pub use editor::ColorEditor;
pub use error::EditorError;
pub use memo::IntensityMemo;
