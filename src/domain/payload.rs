//! Screening of untrusted JSON collections.
//!
//! Imported files and persisted blobs share one rule: the payload must be a
//! JSON array, and each element is adopted only if it has the record shape
//! (`id`, `corridor`, `departureTimestamp` or `departureIso`, `status`, all
//! strings) and converts to a [`TrainRecord`]. Anything else is dropped
//! without a per-item diagnostic; callers see only the count.

use serde_json::Value;

use super::error::ValidationError;
use super::train::TrainRecord;

const DEPARTURE_FIELDS: [&str; 2] = ["departureTimestamp", "departureIso"];

/// Outcome of screening a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screened {
    /// Elements adopted, in payload order.
    pub trains: Vec<TrainRecord>,
    /// Number of elements dropped.
    pub skipped: usize,
}

/// Parse `payload` as a JSON array and screen its elements.
pub fn screen_json(payload: &str) -> Result<Screened, ValidationError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ValidationError::MalformedImport(e.to_string()))?;

    match value {
        Value::Array(items) => Ok(screen(items)),
        _ => Err(ValidationError::ImportNotArray),
    }
}

/// Screen already-parsed elements.
#[must_use]
pub fn screen(items: Vec<Value>) -> Screened {
    let total = items.len();
    let trains: Vec<TrainRecord> = items
        .into_iter()
        .filter(has_record_shape)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    Screened {
        skipped: total - trains.len(),
        trains,
    }
}

fn has_record_shape(item: &Value) -> bool {
    let Some(object) = item.as_object() else {
        return false;
    };
    let is_string = |key: &str| object.get(key).is_some_and(Value::is_string);

    is_string("id")
        && is_string("corridor")
        && is_string("status")
        && DEPARTURE_FIELDS.iter().any(|key| is_string(key))
}
