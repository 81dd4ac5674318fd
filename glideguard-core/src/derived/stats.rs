//! Display-range groups: working band and vario scale
//!
//! Both are recomputed by the orchestrator every tick from flight statistics
//! and the current glide settings.

/// Altitude band the pilot has been working in
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingBand {
    /// Lower bound (m MSL)
    pub height_min_working: f64,
    /// Upper bound (m MSL), never below `height_min_working`
    pub height_max_working: f64,
    /// Current altitude within the band, 0 at the bottom, 1 at the top
    pub height_fraction_working: f64,
}

impl Default for WorkingBand {
    fn default() -> Self {
        Self {
            height_min_working: 0.0,
            height_max_working: 0.0,
            height_fraction_working: 1.0,
        }
    }
}

impl WorkingBand {
    /// Back to an empty band
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Where `height` lies within the band, clamped to `[0, 1]`
    ///
    /// A degenerate band (max == min) reports 1.
    pub fn fraction(&self, height: f64) -> f64 {
        let span = self.height_max_working - self.height_min_working;
        if !(span > 0.0) || !height.is_finite() {
            return 1.0;
        }
        ((height - self.height_min_working) / span).clamp(0.0, 1.0)
    }
}

/// Vario gauge range
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarioScale {
    /// Upper gauge bound (m/s), at least the MacCready setting
    pub positive_bound: f64,
    /// Lower gauge bound (m/s), at most minus the best-glide sink rate
    pub negative_bound: f64,
}

impl VarioScale {
    /// Back to a zero range
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
