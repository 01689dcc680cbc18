//! Train records and the field-level changes applied to them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::id::{CorridorId, TrainId};

/// Remaining capacity on a train.
///
/// Legacy status strings (`VOLNO`, `DOTAZ`, `PLNO`) are accepted when
/// reading persisted or imported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainStatus {
    #[serde(alias = "VOLNO")]
    Available,
    #[serde(alias = "DOTAZ")]
    Inquiry,
    #[serde(alias = "PLNO")]
    Full,
}

impl TrainStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Inquiry, Self::Full];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Inquiry => "INQUIRY",
            Self::Full => "FULL",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Inquiry => "On inquiry",
            Self::Full => "Full",
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" | "VOLNO" => Ok(Self::Available),
            "INQUIRY" | "DOTAZ" => Ok(Self::Inquiry),
            "FULL" | "PLNO" => Ok(Self::Full),
            _ => Err(ValidationError::UnknownStatus {
                input: s.to_string(),
            }),
        }
    }
}

/// One scheduled transport slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Store-assigned identifier, immutable after creation.
    pub id: TrainId,
    /// Corridor lookup key.
    pub corridor: CorridorId,
    /// Departure instant, the primary ordering key.
    #[serde(alias = "departureIso")]
    pub departure_timestamp: DateTime<Utc>,
    /// Capacity status.
    pub status: TrainStatus,
}

impl TrainRecord {
    /// Attach an id to a new train.
    #[must_use]
    pub fn from_new(id: TrainId, train: NewTrain) -> Self {
        Self {
            id,
            corridor: train.corridor,
            departure_timestamp: train.departure_timestamp,
            status: train.status,
        }
    }

    /// Replace every field the patch carries. The id is never touched.
    pub fn apply(&mut self, patch: &TrainPatch) {
        if let Some(corridor) = &patch.corridor {
            self.corridor = corridor.clone();
        }
        if let Some(departure) = patch.departure_timestamp {
            self.departure_timestamp = departure;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// A train that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    pub corridor: CorridorId,
    pub departure_timestamp: DateTime<Utc>,
    pub status: TrainStatus,
}

impl NewTrain {
    pub fn new(
        corridor: impl Into<CorridorId>,
        departure_timestamp: DateTime<Utc>,
        status: TrainStatus,
    ) -> Self {
        Self {
            corridor: corridor.into(),
            departure_timestamp,
            status,
        }
    }
}

/// Partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainPatch {
    pub corridor: Option<CorridorId>,
    pub departure_timestamp: Option<DateTime<Utc>>,
    pub status: Option<TrainStatus>,
}

impl TrainPatch {
    #[must_use]
    pub fn status(status: TrainStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn departure(departure: DateTime<Utc>) -> Self {
        Self {
            departure_timestamp: Some(departure),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn corridor(corridor: impl Into<CorridorId>) -> Self {
        Self {
            corridor: Some(corridor.into()),
            ..Self::default()
        }
    }

    /// True when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corridor.is_none() && self.departure_timestamp.is_none() && self.status.is_none()
    }
}

/// Parse a departure given on the command line.
///
/// Accepts an RFC 3339 instant, a UTC `YYYY-MM-DDTHH:MM`, or a bare date,
/// which departs at noon UTC.
pub fn parse_departure(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
        return Ok(date.and_time(noon).and_utc());
    }

    Err(ValidationError::InvalidDeparture {
        input: input.to_string(),
    })
}
