//! Nonlinear sRGB ↔ HSL conversion.
//!
//! Uses the chroma / hue-sector formulation. Channels are not clamped in
//! either direction.
//!
//! # Reference
//! Joblove & Greenberg (1978), "Color spaces for computer graphics"

/// Wrap a hue in degrees into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360, which is
/// folded back to 0.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert HSL to nonlinear sRGB.
///
/// ```text
/// C  = (1 − |2L − 1|) × S
/// H' = H / 60
/// X  = C × (1 − |H' mod 2 − 1|)
/// (r, g, b) = sector(H') + (L − C/2)
/// ```
///
/// Sectors are half-open (`[0,1) … [5,6)`). The hue is wrapped into
/// `[0, 360)` first, so 360° and negative hues select the right sector.
pub fn hsl_to_nonlinear_srgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_prime = normalize_hue(hue) / 60.0;
    let largest_component = chroma * (1.0 - ((hue_prime % 2.0) - 1.0).abs());

    let [r, g, b] = if hue_prime < 1.0 {
        [chroma, largest_component, 0.0]
    } else if hue_prime < 2.0 {
        [largest_component, chroma, 0.0]
    } else if hue_prime < 3.0 {
        [0.0, chroma, largest_component]
    } else if hue_prime < 4.0 {
        [0.0, largest_component, chroma]
    } else if hue_prime < 5.0 {
        [largest_component, 0.0, chroma]
    } else {
        [chroma, 0.0, largest_component]
    };

    let offset = lightness - chroma / 2.0;
    [r + offset, g + offset, b + offset]
}

/// Convert nonlinear sRGB to HSL, returned as `[hue, saturation, lightness]`.
///
/// Hue is 0 for achromatic input and otherwise lies in `[0, 360)`.
/// Saturation is 0 at `lightness <= 0` and `lightness >= 1`.
pub fn nonlinear_srgb_to_hsl(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let x_max = red.max(green).max(blue);
    let x_min = red.min(green).min(blue);
    let chroma = x_max - x_min;
    let lightness = (x_max + x_min) / 2.0;

    let hue = if chroma == 0.0 {
        0.0
    } else if red == x_max {
        60.0 * ((green - blue) / chroma)
    } else if green == x_max {
        60.0 * (2.0 + (blue - red) / chroma)
    } else {
        60.0 * (4.0 + (red - green) / chroma)
    };

    let saturation = if lightness <= 0.0 || lightness >= 1.0 {
        0.0
    } else {
        (x_max - lightness) / lightness.min(1.0 - lightness)
    };

    [normalize_hue(hue), saturation, lightness]
}
