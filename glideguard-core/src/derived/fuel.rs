//! Fuel endurance estimate for motor gliders

use core::time::Duration;

use crate::validity::Validity;

/// Remaining burn time at the configured consumption rate
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelInfo {
    /// Time until the tank is empty, check `available` first
    pub burn_time_remaining: Duration,
    /// When the estimate was last computed
    pub available: Validity,
}

impl FuelInfo {
    /// Forget the estimate
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The estimate, if it has been computed and not expired
    pub fn remaining(&self) -> Option<Duration> {
        self.available.is_valid().then_some(self.burn_time_remaining)
    }
}
