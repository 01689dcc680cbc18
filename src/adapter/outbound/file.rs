//! File-backed snapshot slot.
//!
//! The slot is `<dir>/<key>.json`. Writes go to a temp file that is then
//! renamed over the slot, so a reader never sees a half-written blob.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::codec;
use crate::domain::train::TrainRecord;
use crate::error::PersistenceError;
use crate::port::outbound::snapshot::SnapshotStore;

#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Slot for `key` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Vec<TrainRecord>>, PersistenceError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        codec::decode(&blob).map(Some)
    }

    fn save(&self, trains: &[TrainRecord]) -> Result<(), PersistenceError> {
        let blob = codec::encode(trains)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            self.write_err(e)
        };

        let mut file = fs::File::create(&temp_path).map_err(|e| self.write_err(e))?;
        file.write_all(blob.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
