//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a train record.
///
/// Generated as UUID v4 for new records, or constructed from an existing
/// string for persisted and imported records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(String);

impl TrainId {
    /// Create a new `TrainId` with a generated UUID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the train ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TrainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TrainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Corridor identifier - newtype for type safety.
///
/// The set of valid corridors is reference data owned by configuration;
/// the identifier itself is only a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorridorId(String);

impl CorridorId {
    /// Create a new `CorridorId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the corridor ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorridorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CorridorId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CorridorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_id_generates_unique_ids() {
        let id1 = TrainId::generate();
        let id2 = TrainId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn train_id_from_str() {
        let id = TrainId::from("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn corridor_id_serializes_as_plain_string() {
        let id = CorridorId::new("BRV_MOSNOV");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"BRV_MOSNOV\"");
    }
}
