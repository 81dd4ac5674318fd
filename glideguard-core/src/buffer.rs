//! Fixed-Size Circular Buffer for Short-Term History
//!
//! ## Overview
//!
//! The trace history behind the vario trend display keeps the last few
//! seconds of flight. This module provides the ring buffer it is built on:
//! fixed capacity chosen at compile time, no heap, and automatic overwrite of
//! the oldest entry once full.
//!
//! ## Design Rationale
//!
//! ### Why a Circular Buffer?
//!
//! Trend displays only care about the most recent N entries:
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) access to the most recent entry
//! - O(n) iteration in chronological order
//! - Zero heap allocations
//!
//! ### Why Not Use `heapless::Deque`?
//!
//! `heapless::Deque` rejects a push when full. For history we want the
//! opposite: silently drop the oldest entry, because recent data is the
//! valuable part.
//!
//! ### Memory Layout
//!
//! ```text
//! CircularBuffer<T, 5>:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  0  │  1  │  2  │  3  │  4  │  ← Array indices
//! └─────┴─────┴─────┴─────┴─────┘
//!    ↑                       ↑
//!    └── write_pos = 0      └── After 5 writes, wraps here
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use glideguard_core::buffer::CircularBuffer;
//!
//! let mut history: CircularBuffer<f64, 3> = CircularBuffer::new();
//! for v in [0.5, 1.2, 2.0, 1.8] {
//!     history.push(v);
//! }
//!
//! // Oldest entry was overwritten
//! let values: Vec<f64> = history.iter().copied().collect();
//! assert_eq!(values, vec![1.2, 2.0, 1.8]);
//! assert_eq!(history.last(), Some(&1.8));
//! ```

/// Fixed-size circular buffer
///
/// ## Internal Invariants
///
/// - `write_pos < N` (next write position is always valid)
/// - `len <= N` (never claim to have more items than capacity)
/// - Iteration yields entries oldest first
#[derive(Debug, Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Storage; `None` marks never-written slots
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid entries
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    /// Creates a new empty circular buffer
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds an entry, overwriting the oldest one when full
    pub fn push(&mut self, item: T) {
        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        self.data[idx].as_ref()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }

    /// Entry by logical index (0 = oldest, len-1 = newest)
    ///
    /// ```text
    /// Physical array:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical view:    [A, B, C, D, E]
    /// logical[0] = physical[(2+0)%5] = A
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over circular buffer contents
pub struct CircularBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for CircularBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when the logical contents match, regardless of ring position
impl<T: Copy + PartialEq, const N: usize> PartialEq for CircularBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
