//! Time source abstraction.
//!
//! The [`Clock`] trait keeps the repository free of direct calls to the
//! system clock. Tests substitute a fixed clock so stamped dates are
//! predictable.

use chrono::{Local, NaiveDateTime, Timelike};

pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Drop seconds and sub-second precision.
///
/// Review timestamps are persisted as `YYYY-MM-DD HH:MM`, so anything finer
/// would not survive a save/load cycle.
pub fn to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|at| at.with_nanosecond(0))
        .unwrap_or(at)
}
