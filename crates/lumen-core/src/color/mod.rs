//! The [`Color`] sum type and conversions between its representations.

pub mod convert;
pub mod model;

pub use model::{Color, ColorSpace, Hsla, Lcha, Rgba, RgbaLinear};
