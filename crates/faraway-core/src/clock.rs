//! Time source for recorded games.

use chrono::{DateTime, Utc};

/// Supplies the play time of a game recorded without one.
pub trait Clock: Send + Sync {
    /// The moment to stamp on a game recorded now.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
