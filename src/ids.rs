//! Task id generation.
//!
//! Ids are decimal strings. The default source reads the wall clock in
//! milliseconds; a counter source gives reproducible ids for scripting.

use chrono::Utc;

use crate::task::TaskId;

/// Source of fresh task ids.
pub trait IdSource {
    /// Produce an id that has not been issued by this source before.
    fn next_id(&mut self) -> TaskId;
}

/// Millisecond-timestamp ids, bumped past the last issued value when the
/// clock has not advanced.
pub struct TimestampIds<F = fn() -> i64> {
    clock: F,
    last: Option<i64>,
}

impl TimestampIds {
    /// Timestamp ids backed by the system clock.
    pub fn system() -> Self {
        Self::with_clock(now_millis)
    }
}

impl<F: FnMut() -> i64> TimestampIds<F> {
    /// Timestamp ids backed by a custom clock.
    pub fn with_clock(clock: F) -> Self {
        TimestampIds { clock, last: None }
    }
}

impl<F: FnMut() -> i64> IdSource for TimestampIds<F> {
    fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let value = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(value);
        TaskId::new(value.to_string())
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Counter ids starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.next += 1;
        TaskId::new(self.next.to_string())
    }
}
