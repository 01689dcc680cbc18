//! In-memory snapshot slot.
//!
//! Holds the encoded blob exactly as a key-value slot would. Clones share the
//! same slot, so a test can keep a handle after moving one into a store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::codec;
use crate::domain::train::TrainRecord;
use crate::error::PersistenceError;
use crate::port::outbound::snapshot::SnapshotStore;

#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    blob: Arc<RwLock<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemorySnapshotStore {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `blob`, verbatim.
    pub fn with_raw(blob: impl Into<String>) -> Self {
        let store = Self::default();
        *store.blob.write() = Some(blob.into());
        store
    }

    /// The raw blob currently held.
    pub fn raw(&self) -> Option<String> {
        self.blob.read().clone()
    }

    /// Make every subsequent save fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Vec<TrainRecord>>, PersistenceError> {
        self.blob.read().as_deref().map(codec::decode).transpose()
    }

    fn save(&self, trains: &[TrainRecord]) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(PersistenceError::Write {
                path: self.describe(),
                source: std::io::Error::other("writes disabled"),
            });
        }
        *self.blob.write() = Some(codec::encode(trains)?);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_slot() {
        let a = MemorySnapshotStore::new();
        let b = a.clone();
        a.save(&[]).unwrap();
        assert_eq!(b.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn failing_writes_leave_the_blob_alone() {
        let slot = MemorySnapshotStore::with_raw("[]");
        slot.fail_writes(true);
        assert!(slot.save(&[]).is_err());
        assert_eq!(slot.raw().as_deref(), Some("[]"));
    }
}
