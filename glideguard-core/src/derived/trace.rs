//! Short-term trace history for trend displays

use crate::buffer::{CircularBuffer, CircularBufferIter};
use crate::constants::buffers::TRACE_HISTORY_SIZE;
use crate::raw::RawSample;
use crate::time::Timestamp;

/// One recorded sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    /// GPS time of the sample (ms)
    pub time: Timestamp,
    /// Total-energy vario (m/s)
    pub brutto_vario: Option<f64>,
    /// Air-mass vario (m/s)
    pub netto_vario: Option<f64>,
    /// Navigation altitude (m)
    pub altitude: Option<f64>,
}

/// Bounded, time-ordered history of recent samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceHistory {
    entries: CircularBuffer<TraceEntry, TRACE_HISTORY_SIZE>,
}

impl TraceHistory {
    /// Record a sample; samples without GPS time are ignored
    pub fn append(&mut self, raw: &RawSample) {
        let Some(time) = raw.time else {
            return;
        };

        self.entries.push(TraceEntry {
            time,
            brutto_vario: raw.brutto_vario,
            netto_vario: raw.netto_vario,
            altitude: raw.nav_altitude(),
        });
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    /// Entries, oldest first
    pub fn iter(&self) -> CircularBufferIter<'_, TraceEntry, TRACE_HISTORY_SIZE> {
        self.entries.iter()
    }

    /// Mean brutto vario over the recorded entries that have one
    pub fn average_brutto_vario(&self) -> Option<f64> {
        let (sum, n) = self
            .iter()
            .filter_map(|e| e.brutto_vario)
            .fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
        (n > 0).then(|| sum / n as f64)
    }
}
