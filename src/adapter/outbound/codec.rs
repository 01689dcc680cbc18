//! JSON encoding of the snapshot blob.
//!
//! The blob is a single JSON array of train records. Decoding applies the
//! same element screening as imports: malformed elements are dropped and
//! counted, a non-array blob is unusable.

use tracing::warn;

use crate::domain::payload;
use crate::domain::train::TrainRecord;
use crate::error::PersistenceError;

pub fn encode(trains: &[TrainRecord]) -> Result<String, PersistenceError> {
    serde_json::to_string(trains).map_err(PersistenceError::Encode)
}

pub fn decode(blob: &str) -> Result<Vec<TrainRecord>, PersistenceError> {
    let screened =
        payload::screen_json(blob).map_err(|e| PersistenceError::Decode(e.to_string()))?;
    if screened.skipped > 0 {
        warn!(
            skipped = screened.skipped,
            kept = screened.trains.len(),
            "Dropped malformed records from snapshot"
        );
    }
    Ok(screened.trains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::{CorridorId, TrainId};
    use crate::domain::train::TrainStatus;
    use chrono::{TimeZone, Utc};

    #[test]
    fn encoded_blob_decodes_to_the_same_records() {
        let trains = vec![TrainRecord {
            id: TrainId::new("1"),
            corridor: CorridorId::new("HAM_MOSNOV"),
            departure_timestamp: Utc.with_ymd_and_hms(2026, 11, 1, 16, 20, 0).unwrap(),
            status: TrainStatus::Inquiry,
        }];
        let blob = encode(&trains).unwrap();
        assert_eq!(decode(&blob).unwrap(), trains);
    }

    #[test]
    fn non_array_blob_is_unusable() {
        assert!(matches!(
            decode(r#"{"trains":[]}"#),
            Err(PersistenceError::Decode(_))
        ));
        assert!(matches!(decode("garbage"), Err(PersistenceError::Decode(_))));
    }

    #[test]
    fn empty_array_is_a_valid_snapshot() {
        assert_eq!(decode("[]").unwrap(), vec![]);
    }
}
