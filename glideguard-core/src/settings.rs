//! Computer settings and engine timing
//!
//! `ComputerSettings` is the per-tick configuration snapshot the pilot
//! controls (UTC offset, team code, polar, fuel). `EngineConfig` holds the
//! orchestrator's own cadence and rarely changes.
//!
//! Both are plain data with `Default` impls and a `validate()` that rejects
//! values the engine cannot work with. Loading them from disk is the host's
//! business; with the `serde` feature they deserialise from any format.
//!
//! Unset values are `None` at this boundary. Hosts holding legacy sentinel
//! values convert them with [`WaypointId::from_raw`], [`FlarmId::from_raw`]
//! and [`TeamCodeSettings::set_team_code_text`].

use crate::constants::time::{
    DEFAULT_IDLE_INTERVAL_MS, MAX_UTC_OFFSET_MINUTES, TEAM_CODE_UPDATE_INTERVAL_MS,
    TRACE_HISTORY_MIN_DELTA_MS,
};
use crate::errors::{ComputerError, ComputerResult};
use crate::team_code::TeamCode;
use crate::traffic::FlarmId;
use crate::waypoint::WaypointId;

/// Team-code configuration
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamCodeSettings {
    /// Waypoint all team codes are relative to
    pub reference_waypoint: Option<WaypointId>,
    /// Traffic contact to track as team mate; takes precedence over
    /// `team_code`
    pub flarm_id: Option<FlarmId>,
    /// Team mate's code as entered by the pilot
    pub team_code: Option<TeamCode>,
}

impl TeamCodeSettings {
    /// Set the team mate's code from pilot input; empty text clears it
    pub fn set_team_code_text(&mut self, text: &str) -> ComputerResult<()> {
        let text = text.trim();
        self.team_code = if text.is_empty() {
            None
        } else {
            Some(text.parse()?)
        };
        Ok(())
    }
}

/// Task safety margins
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskSettings {
    /// Minimum arrival height above terrain (m)
    pub safety_height_arrival: f64,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            safety_height_arrival: 300.0,
        }
    }
}

/// Aircraft configuration relevant to the engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneSettings {
    /// Fuel on board (litres)
    pub fuel_onboard: f64,
    /// Consumption with the engine running (litres per hour); zero for pure
    /// gliders
    pub fuel_consumption: f64,
}

impl PlaneSettings {
    /// A motor glider carrying `onboard` litres burning `consumption` l/h
    pub fn motor_glider(onboard: f64, consumption: f64) -> Self {
        Self {
            fuel_onboard: onboard,
            fuel_consumption: consumption,
        }
    }
}

/// Current glide polar parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarSettings {
    /// MacCready setting (m/s)
    pub mc: f64,
    /// Sink rate at best glide (m/s, positive down)
    pub sink_at_best_ld: f64,
}

impl Default for PolarSettings {
    fn default() -> Self {
        Self {
            mc: 0.0,
            // Typical 15 m class glider
            sink_at_best_ld: 0.6,
        }
    }
}

/// Flight logger cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerSettings {
    /// Seconds between fixes while cruising
    pub time_step_cruise: u16,
    /// Seconds between fixes while circling
    pub time_step_circling: u16,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            time_step_cruise: 5,
            time_step_circling: 1,
        }
    }
}

/// Configuration snapshot read on every tick
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputerSettings {
    /// Local time offset from UTC (minutes)
    pub utc_offset_minutes: i32,
    /// Team code
    pub team_code: TeamCodeSettings,
    /// Task margins
    pub task: TaskSettings,
    /// Aircraft
    pub plane: PlaneSettings,
    /// Glide polar
    pub polar: PolarSettings,
    /// Flight logger
    pub logger: LoggerSettings,
}

impl ComputerSettings {
    /// Check that every value is usable
    pub fn validate(&self) -> ComputerResult<()> {
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ComputerError::InvalidSetting {
                name: "utc_offset_minutes",
                reason: "offset beyond +/-14 hours",
            });
        }

        check_finite("task.safety_height_arrival", self.task.safety_height_arrival)?;
        check_finite("plane.fuel_onboard", self.plane.fuel_onboard)?;
        check_finite("plane.fuel_consumption", self.plane.fuel_consumption)?;
        check_finite("polar.mc", self.polar.mc)?;
        check_finite("polar.sink_at_best_ld", self.polar.sink_at_best_ld)?;

        if self.logger.time_step_cruise == 0 || self.logger.time_step_circling == 0 {
            return Err(ComputerError::InvalidSetting {
                name: "logger",
                reason: "logger time step must be at least one second",
            });
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> ComputerResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ComputerError::InvalidSetting {
            name,
            reason: "value must be finite",
        })
    }
}

/// Orchestrator cadence, all in sample-clock milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// How often `process_sample` reports that an idle pass is due
    pub idle_interval_ms: u64,
    /// Minimum time between own team-code recomputations
    pub team_code_interval_ms: u64,
    /// Minimum GPS time between trace-history entries
    pub trace_min_delta_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            idle_interval_ms: DEFAULT_IDLE_INTERVAL_MS,
            team_code_interval_ms: TEAM_CODE_UPDATE_INTERVAL_MS,
            trace_min_delta_ms: TRACE_HISTORY_MIN_DELTA_MS,
        }
    }
}

impl EngineConfig {
    /// Check that the intervals are consistent
    pub fn validate(&self) -> ComputerResult<()> {
        if self.idle_interval_ms == 0 {
            return Err(ComputerError::InvalidSetting {
                name: "idle_interval_ms",
                reason: "interval must be non-zero",
            });
        }
        if self.team_code_interval_ms == 0 {
            return Err(ComputerError::InvalidSetting {
                name: "team_code_interval_ms",
                reason: "interval must be non-zero",
            });
        }
        if self.trace_min_delta_ms == 0 {
            return Err(ComputerError::InvalidSetting {
                name: "trace_min_delta_ms",
                reason: "interval must be non-zero",
            });
        }
        Ok(())
    }
}
