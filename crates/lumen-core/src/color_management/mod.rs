//! Color management — transfer function and the HSL / LCh transforms.

pub mod hsl;
pub mod lch;
pub mod transfer;
