//! Builders for train records used across tests.
//!
//! Departures are expressed as hours from a clock's "now" so tests read in
//! terms of the booking window rather than calendar dates.

use chrono::Duration;

use crate::domain::id::{CorridorId, TrainId};
use crate::domain::train::{NewTrain, TrainRecord, TrainStatus};
use crate::port::outbound::clock::Clock;

/// A new train departing `hours` after `clock`'s now.
pub fn new_train(clock: &dyn Clock, corridor: &str, hours: i64, status: TrainStatus) -> NewTrain {
    NewTrain::new(corridor, clock.now() + Duration::hours(hours), status)
}

/// A stored record departing `hours` after `clock`'s now.
pub fn record(clock: &dyn Clock, id: &str, corridor: &str, hours: i64) -> TrainRecord {
    TrainRecord {
        id: TrainId::new(id),
        corridor: CorridorId::new(corridor),
        departure_timestamp: clock.now() + Duration::hours(hours),
        status: TrainStatus::Available,
    }
}

/// Encode records as an import payload.
pub fn payload(records: &[TrainRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}
