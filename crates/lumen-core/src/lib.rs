//! Lumen Core — color-space conversion and HDR intensity encoding.
//!
//! Converts between gamma-encoded sRGB, linear sRGB, HSL and CIE LCh(ab), and
//! splits over-unit linear colors into a unit-range base plus a power-of-two
//! intensity. Everything here is a pure function over `Copy` values; there is
//! no shared state.

pub mod color;
pub mod color_management;
pub mod config;
pub mod display;
mod error;
pub mod hdr;
pub mod precision;
pub mod protocol;

// Re-exports for convenience.
pub use color::{Color, ColorSpace, Hsla, Lcha, Rgba, RgbaLinear};
pub use config::{EditorConfig, SwatchConfig};
pub use display::{sdr_safe, to_swatch_pixel};
pub use error::ColorError;
pub use hdr::{
    HdrIntensity, IntensitySwatch, at_hdr_intensity, extract_hdr_intensity, inject_hdr_intensity,
    intensity_swatches,
};
pub use precision::round_precision;
