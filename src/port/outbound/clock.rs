//! Clock port.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Every booking-window decision the store makes reads "now" through this
/// trait, so tests can pin or advance time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
