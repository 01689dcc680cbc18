//! Snapshot backend used when persistence is turned off.

use crate::domain::train::TrainRecord;
use crate::error::PersistenceError;
use crate::port::outbound::snapshot::SnapshotStore;

/// Loads nothing and discards every save.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSnapshotStore;

impl SnapshotStore for DisabledSnapshotStore {
    fn load(&self) -> Result<Option<Vec<TrainRecord>>, PersistenceError> {
        Ok(None)
    }

    fn save(&self, _trains: &[TrainRecord]) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}
