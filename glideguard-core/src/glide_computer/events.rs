//! Transition events
//!
//! The orchestrator detects phase and task transitions; reactions outside
//! the engine (audio, logger cadence, UI pop-ups) are the caller's. Events
//! are queued here and drained with
//! [`GlideComputer::drain_events`](super::GlideComputer::drain_events).
//!
//! ```text
//! process_sample ──► EventQueue (bounded) ──► drain_events() ──► caller
//! ```
//!
//! The queue never blocks the tick: when the caller falls behind, the
//! oldest event is dropped and a warning logged.

use heapless::Deque;

use crate::constants::buffers::MAX_PENDING_EVENTS;

/// Something the caller may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlideEvent {
    /// The computer is constructed and ready; recorded exactly once
    ComputerReady,
    /// Grounded → flying
    Takeoff,
    /// Flying → grounded
    Landing,
    /// The task start was crossed
    TaskStarted,
    /// The ordered task was finished
    TaskFinished,
}

#[cfg(feature = "defmt")]
impl defmt::Format for GlideEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ComputerReady => defmt::write!(fmt, "ComputerReady"),
            Self::Takeoff => defmt::write!(fmt, "Takeoff"),
            Self::Landing => defmt::write!(fmt, "Landing"),
            Self::TaskStarted => defmt::write!(fmt, "TaskStarted"),
            Self::TaskFinished => defmt::write!(fmt, "TaskFinished"),
        }
    }
}

/// Bounded FIFO of undelivered events
#[derive(Debug, Default)]
pub(super) struct EventQueue {
    events: Deque<GlideEvent, MAX_PENDING_EVENTS>,
}

impl EventQueue {
    pub(super) fn push(&mut self, event: GlideEvent) {
        if self.events.is_full() {
            let _dropped = self.events.pop_front();
            log_warn!("Event queue full, dropped {:?}", _dropped);
        }
        // Cannot fail: a slot was freed above if needed
        let _ = self.events.push_back(event);
    }

    pub(super) fn pop(&mut self) -> Option<GlideEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = EventQueue::default();
        queue.push(GlideEvent::Takeoff);
        queue.push(GlideEvent::Landing);
        assert_eq!(queue.pop(), Some(GlideEvent::Takeoff));
        assert_eq!(queue.pop(), Some(GlideEvent::Landing));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut queue = EventQueue::default();
        queue.push(GlideEvent::ComputerReady);
        for _ in 0..MAX_PENDING_EVENTS {
            queue.push(GlideEvent::Takeoff);
        }
        // ComputerReady was pushed out
        let mut drained = 0;
        while let Some(event) = queue.pop() {
            assert_eq!(event, GlideEvent::Takeoff);
            drained += 1;
        }
        assert_eq!(drained, MAX_PENDING_EVENTS);
    }
}
