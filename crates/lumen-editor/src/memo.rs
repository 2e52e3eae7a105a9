//! Per-selection memo of the extracted HDR intensity.
//!
//! Re-extracting intensity on every update of a linear value makes it drift
//! while the user drags a channel (a channel crossing 1.0 would suddenly move
//! intensity). The memo extracts once per selection and afterwards holds the
//! intensity fixed until it is invalidated, overridden or recalculated
//! explicitly.

use std::fmt::Debug;

use lumen_core::{HdrIntensity, RgbaLinear, extract_hdr_intensity, inject_hdr_intensity};

/// Single-slot memo keyed by selection identity.
#[derive(Debug, Clone)]
pub struct IntensityMemo<K> {
    cached: Option<(K, HdrIntensity)>,
}

impl<K> Default for IntensityMemo<K> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<K: PartialEq + Clone + Debug> IntensityMemo<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `color` for selection `key`.
    ///
    /// The first observation of a key extracts and caches. Later observations
    /// of the same key keep the cached intensity and express `color` relative
    /// to it (`base = color × 2^-intensity`).
    pub fn observe(&mut self, key: &K, color: RgbaLinear) -> HdrIntensity {
        match &mut self.cached {
            Some((cached_key, hdr)) if cached_key == key => {
                hdr.base = inject_hdr_intensity(color, -hdr.intensity);
                *hdr
            }
            _ => self.recalculate(key, color),
        }
    }

    /// Extract from `color` unconditionally and replace the cache.
    pub fn recalculate(&mut self, key: &K, color: RgbaLinear) -> HdrIntensity {
        let hdr = extract_hdr_intensity(color);
        tracing::debug!(?key, intensity = hdr.intensity, "HDR intensity extracted");
        self.cached = Some((key.clone(), hdr));
        hdr
    }

    /// Override the cached intensity for `key`, keeping the cached base.
    ///
    /// Returns `false` when nothing is cached for `key`.
    pub fn set_intensity(&mut self, key: &K, intensity: f64) -> bool {
        match &mut self.cached {
            Some((cached_key, hdr)) if cached_key == key => {
                hdr.intensity = intensity;
                true
            }
            _ => false,
        }
    }

    /// Drop the cached entry; the next observation extracts again.
    pub fn invalidate(&mut self) {
        if let Some((key, _)) = self.cached.take() {
            tracing::debug!(?key, "HDR intensity memo invalidated");
        }
    }

    /// Cached pair for `key`, if any.
    pub fn get(&self, key: &K) -> Option<HdrIntensity> {
        match &self.cached {
            Some((cached_key, hdr)) if cached_key == key => Some(*hdr),
            _ => None,
        }
    }
}
