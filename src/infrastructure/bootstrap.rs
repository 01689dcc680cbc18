//! Composition root: builds a store from configuration.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::clock::SystemClock;
use crate::adapter::outbound::disabled::DisabledSnapshotStore;
use crate::adapter::outbound::file::FileSnapshotStore;
use crate::application::store::TrainStore;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::snapshot::SnapshotStore;

/// Pick the snapshot backend the configuration asks for.
///
/// `default_dir` is used when `storage.data_dir` is unset.
pub fn snapshot_store(config: &Config, default_dir: &Path) -> Box<dyn SnapshotStore> {
    if !config.storage.enabled {
        debug!("Persistence disabled, board lives in memory");
        return Box::new(DisabledSnapshotStore);
    }
    let dir = config.storage.resolve_dir(default_dir);
    Box::new(FileSnapshotStore::new(dir, &config.storage.key))
}

/// Open the store with the system clock.
pub fn open_store(config: &Config, default_dir: &Path) -> TrainStore {
    open_store_with_clock(config, default_dir, Arc::new(SystemClock))
}

/// Open the store with an explicit clock.
pub fn open_store_with_clock(
    config: &Config,
    default_dir: &Path,
    clock: Arc<dyn Clock>,
) -> TrainStore {
    TrainStore::open(snapshot_store(config, default_dir), clock).with_window(config.board.window())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::clock::ManualClock;

    #[test]
    fn disabled_storage_never_touches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.enabled = false;
        config.storage.data_dir = Some(dir.path().to_path_buf());

        let mut store =
            open_store_with_clock(&config, dir.path(), Arc::new(ManualClock::default()));
        assert!(!store.snapshot_enabled());
        store.reset_to_default();

        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn enabled_storage_writes_slot_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());

        let mut store =
            open_store_with_clock(&config, Path::new("/unused"), Arc::new(ManualClock::default()));
        store.reset_to_default();

        assert!(dir.path().join("captrain_trains.json").exists());
    }
}
