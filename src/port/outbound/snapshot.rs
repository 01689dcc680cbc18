//! Persistence port for the train collection.
//!
//! The whole collection is the unit of persistence: backends read and write
//! one value, never individual records.

use crate::domain::train::TrainRecord;
use crate::error::PersistenceError;

/// Whole-collection snapshot storage.
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. A value that
    /// exists but cannot be used is an error; the caller decides the fallback.
    fn load(&self) -> Result<Option<Vec<TrainRecord>>, PersistenceError>;

    /// Overwrite the persisted collection.
    fn save(&self, trains: &[TrainRecord]) -> Result<(), PersistenceError>;

    /// False for backends that discard everything.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Short description for logs (a path, a key, "disabled").
    fn describe(&self) -> String;
}
