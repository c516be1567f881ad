//! Fixed play-time source for tests.

use chrono::{DateTime, TimeZone, Utc};
use faraway_core::clock::Clock;

/// Stamps every recorded game with the same play time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock stopped at the given UTC date and time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid date and time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()
                .expect("valid fixed clock time"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
