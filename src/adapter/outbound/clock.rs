//! Wall-clock adapter.

use chrono::{DateTime, Utc};

use crate::port::outbound::clock::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
