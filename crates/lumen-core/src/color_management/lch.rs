//! Nonlinear sRGB ↔ CIE LCh(ab) conversion through XYZ and Lab.
//!
//! Lightness and chroma are exchanged in a 0–1 scale (classic values / 100).
//!
//! # Reference
//! Lindbloom, Bruce J. — <http://brucelindbloom.com/> ("Math" section):
//! RGB/XYZ matrices, Lab↔XYZ, Lab↔LCh and the CIE ε/κ continuity constants.

use glam::{DMat3, DVec3};

use super::hsl::normalize_hue;
use super::transfer::{linear_to_nonlinear_srgb, nonlinear_to_linear_srgb};

/// CIE ε (Lab linear-segment threshold).
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ (Lab linear-segment slope).
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// D65 reference white in XYZ.
pub const D65_WHITE: DVec3 = DVec3::new(0.95047, 1.0, 1.08883);

/// Upper bound applied to the 0–1 scaled lightness and chroma when converting
/// from RGB. Kept above 1 so slightly out-of-gamut input keeps most of its
/// magnitude.
pub const LCH_COMPONENT_MAX: f64 = 1.5;

/// Build a matrix from row-major coefficients as published.
const fn from_rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(m[0][0], m[1][0], m[2][0]),
        DVec3::new(m[0][1], m[1][1], m[2][1]),
        DVec3::new(m[0][2], m[1][2], m[2][2]),
    )
}

/// Linear sRGB → XYZ (D65), Lindbloom `[M]`.
const SRGB_TO_XYZ: DMat3 = from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) → linear sRGB, Lindbloom `[M]⁻¹`.
const XYZ_TO_SRGB: DMat3 = from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Convert LCh (0–1 scaled lightness and chroma, hue in degrees) to nonlinear
/// sRGB.
///
/// ```text
/// LCh ─×100─→ Lab ──→ XYZ ──[M]⁻¹──→ linear RGB ──encode──→ clamp [0, 1]
/// ```
///
/// This is the only conversion that clamps RGB output.
pub fn lch_to_nonlinear_srgb(lightness: f64, chroma: f64, hue: f64) -> [f64; 3] {
    let l = lightness * 100.0;
    let c = chroma * 100.0;

    // LCh → Lab
    let hue_radians = hue.to_radians();
    let a = c * hue_radians.cos();
    let b = c * hue_radians.sin();

    // Lab → XYZ
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let fx3 = fx.powi(3);
    let xr = if fx3 > CIE_EPSILON {
        fx3
    } else {
        (116.0 * fx - 16.0) / CIE_KAPPA
    };
    let yr = if l > CIE_EPSILON * CIE_KAPPA {
        fy.powi(3)
    } else {
        l / CIE_KAPPA
    };
    let fz3 = fz.powi(3);
    let zr = if fz3 > CIE_EPSILON {
        fz3
    } else {
        (116.0 * fz - 16.0) / CIE_KAPPA
    };

    let xyz = DVec3::new(xr, yr, zr) * D65_WHITE;
    let linear = XYZ_TO_SRGB * xyz;

    linear
        .to_array()
        .map(|channel| linear_to_nonlinear_srgb(channel).clamp(0.0, 1.0))
}

/// Convert nonlinear sRGB to LCh, returned as `[lightness, chroma, hue]`.
///
/// ```text
/// RGB ──decode──→ linear RGB ──[M]──→ XYZ ──→ Lab ──→ LCh ─÷100─→ clamp [0, 1.5]
/// ```
///
/// Hue is in `[0, 360)`. At the white point chroma is ~0 and hue is
/// numerically arbitrary.
pub fn nonlinear_srgb_to_lch(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let linear = DVec3::new(
        nonlinear_to_linear_srgb(red),
        nonlinear_to_linear_srgb(green),
        nonlinear_to_linear_srgb(blue),
    );

    // RGB → XYZ → Lab
    let [xr, yr, zr] = (SRGB_TO_XYZ * linear / D65_WHITE).to_array();
    let [fx, fy, fz] = [xr, yr, zr].map(lab_f);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    // Lab → LCh
    let c = a.hypot(b);
    let h = normalize_hue(b.atan2(a).to_degrees());

    [
        (l / 100.0).clamp(0.0, LCH_COMPONENT_MAX),
        (c / 100.0).clamp(0.0, LCH_COMPONENT_MAX),
        h,
    ]
}

/// Lab companding: cube root above ε, linear segment below.
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}
