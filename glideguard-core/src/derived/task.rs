//! Task statistics as published by the task manager
//!
//! Task definitions and scoring stay inside the task manager; these records
//! are the copy it publishes into the derived state each tick.

use crate::time::Timestamp;

/// Progress statistics for one task
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskStats {
    /// A task is defined and geometrically valid
    pub task_valid: bool,
    /// The start has been crossed
    pub task_started: bool,
    /// The finish has been crossed
    pub task_finished: bool,
    /// Sample clock at the start crossing
    pub start_time: Option<Timestamp>,
    /// Index of the active turnpoint
    pub active_index: usize,
    /// Remaining distance (m)
    pub distance_remaining: Option<f64>,
    /// Distance covered (m)
    pub distance_travelled: Option<f64>,
    /// Average task speed so far (m/s)
    pub speed_average: Option<f64>,
}

impl TaskStats {
    /// Back to "no task"
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
