//! Built-in seed records.
//!
//! The seed is fixed in shape (ids, corridors, statuses, times of day) and
//! anchored to the current UTC date, so a freshly restored board is never
//! empty on arrival.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use super::id::{CorridorId, TrainId};
use super::train::{TrainRecord, TrainStatus};

struct SeedRow {
    id: &'static str,
    corridor: &'static str,
    day_offset: i64,
    hour: u32,
    minute: u32,
    status: TrainStatus,
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        id: "1",
        corridor: "BRV_OBRNICE",
        day_offset: 3,
        hour: 8,
        minute: 30,
        status: TrainStatus::Available,
    },
    SeedRow {
        id: "2",
        corridor: "BRV_OBRNICE",
        day_offset: 4,
        hour: 14,
        minute: 15,
        status: TrainStatus::Inquiry,
    },
    SeedRow {
        id: "3",
        corridor: "HAM_OBRNICE",
        day_offset: 3,
        hour: 10,
        minute: 0,
        status: TrainStatus::Full,
    },
    SeedRow {
        id: "4",
        corridor: "BRV_MOSNOV",
        day_offset: 5,
        hour: 9,
        minute: 45,
        status: TrainStatus::Available,
    },
    SeedRow {
        id: "5",
        corridor: "HAM_MOSNOV",
        day_offset: 6,
        hour: 16,
        minute: 20,
        status: TrainStatus::Inquiry,
    },
];

/// The seed set, anchored to the UTC date of `now`.
#[must_use]
pub fn default_trains(now: DateTime<Utc>) -> Vec<TrainRecord> {
    let today = now.date_naive();
    SEED.iter()
        .map(|row| {
            let time = NaiveTime::from_hms_opt(row.hour, row.minute, 0).unwrap_or_default();
            let departure = (today + Duration::days(row.day_offset))
                .and_time(time)
                .and_utc();
            TrainRecord {
                id: TrainId::new(row.id),
                corridor: CorridorId::new(row.corridor),
                departure_timestamp: departure,
                status: row.status,
            }
        })
        .collect()
}
