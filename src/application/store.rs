//! The train record store.
//!
//! [`TrainStore`] owns the canonical collection of train records. It
//! enforces the booking window on writes, sweeps expired trains on reads,
//! and mirrors every change to a [`SnapshotStore`] before returning.
//!
//! Persistence is best-effort: a failed snapshot write is logged and the
//! in-memory collection stays authoritative for the rest of the session.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::error::ValidationError;
use crate::domain::id::{CorridorId, TrainId};
use crate::domain::payload;
use crate::domain::seed;
use crate::domain::train::{NewTrain, TrainPatch, TrainRecord};
use crate::domain::window::BookingWindow;
use crate::error::{Error, Result};
use crate::port::inbound::board::{PublicCapacity, TrainAdmin};
use crate::port::outbound::clock::Clock;
use crate::port::outbound::snapshot::SnapshotStore;

/// Single source of truth for train records.
pub struct TrainStore {
    trains: Vec<TrainRecord>,
    snapshots: Box<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    window: BookingWindow,
}

impl TrainStore {
    /// Open the store, restoring the last snapshot.
    ///
    /// Falls back to the built-in seed set when nothing was saved or the
    /// saved value cannot be used. Opening never writes.
    pub fn open(snapshots: Box<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Self {
        let trains = match snapshots.load() {
            Ok(Some(trains)) => {
                info!(
                    count = trains.len(),
                    source = %snapshots.describe(),
                    "Restored train snapshot"
                );
                trains
            }
            Ok(None) => {
                debug!(source = %snapshots.describe(), "No snapshot found, using seed data");
                seed::default_trains(clock.now())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    source = %snapshots.describe(),
                    "Discarding unusable snapshot, using seed data"
                );
                seed::default_trains(clock.now())
            }
        };

        Self {
            trains,
            snapshots,
            clock,
            window: BookingWindow::default(),
        }
    }

    /// Replace the booking window.
    #[must_use]
    pub fn with_window(mut self, window: BookingWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub const fn window(&self) -> BookingWindow {
        self.window
    }

    /// Number of records held, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Whether changes reach a persistent backend.
    #[must_use]
    pub fn snapshot_enabled(&self) -> bool {
        self.snapshots.is_enabled()
    }

    /// Remove every train inside the booking window. Returns how many went.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let window = self.window;
        let before = self.trains.len();
        self.trains.retain(|t| window.admits(t.departure_timestamp, now));

        let removed = before - self.trains.len();
        if removed > 0 {
            debug!(removed, remaining = self.trains.len(), "Swept expired trains");
            self.persist();
        }
        removed
    }

    /// Live trains, optionally on one corridor, earliest departure first.
    ///
    /// Equal departures keep insertion order.
    pub fn list(&mut self, corridor: Option<&CorridorId>) -> Vec<TrainRecord> {
        self.sweep();
        let mut trains: Vec<TrainRecord> = self
            .trains
            .iter()
            .filter(|t| corridor.map_or(true, |c| &t.corridor == c))
            .cloned()
            .collect();
        trains.sort_by_key(|t| t.departure_timestamp);
        trains
    }

    /// The first `limit` entries of [`list`](Self::list) for a corridor.
    pub fn list_public(&mut self, corridor: &CorridorId, limit: usize) -> Vec<TrainRecord> {
        let mut trains = self.list(Some(corridor));
        trains.truncate(limit);
        trains
    }

    /// Store a new train under a fresh id.
    pub fn add(&mut self, train: NewTrain) -> Result<TrainRecord> {
        self.window.check(train.departure_timestamp, self.clock.now())?;

        let record = TrainRecord::from_new(self.fresh_id(), train);
        info!(
            id = %record.id,
            corridor = %record.corridor,
            departure = %record.departure_timestamp,
            status = %record.status,
            "Train added"
        );
        self.trains.push(record.clone());
        self.persist();
        Ok(record)
    }

    /// Merge `patch` into an existing train.
    ///
    /// Only a new departure is checked against the booking window; status
    /// and corridor changes are accepted as they are.
    pub fn update(&mut self, id: &TrainId, patch: &TrainPatch) -> Result<TrainRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::NotFound { id: id.clone() })?;

        if let Some(departure) = patch.departure_timestamp {
            self.window.check(departure, self.clock.now())?;
        }

        let record = &mut self.trains[index];
        record.apply(patch);
        let record = record.clone();
        info!(id = %record.id, status = %record.status, "Train updated");

        self.persist();
        Ok(record)
    }

    /// Remove a train. Unknown ids are a no-op, not an error.
    pub fn delete(&mut self, id: &TrainId) -> bool {
        let before = self.trains.len();
        self.trains.retain(|t| &t.id != id);

        let removed = self.trains.len() < before;
        if removed {
            info!(%id, "Train deleted");
            self.persist();
        }
        removed
    }

    /// Every live train, for serialization by the caller.
    pub fn export_all(&mut self) -> Vec<TrainRecord> {
        self.sweep();
        self.trains.clone()
    }

    /// Replace the whole collection with the usable elements of `payload`.
    ///
    /// Imported records keep their ids and are not checked against the
    /// booking window. On error the current collection is left untouched.
    pub fn import_replace(&mut self, payload: &str) -> Result<Vec<TrainRecord>> {
        let screened = payload::screen_json(payload)?;
        if screened.skipped > 0 {
            warn!(skipped = screened.skipped, "Dropped malformed import entries");
        }
        if screened.trains.is_empty() {
            return Err(ValidationError::EmptyImport.into());
        }

        info!(count = screened.trains.len(), "Imported trains");
        self.trains = screened.trains;
        self.persist();
        Ok(self.trains.clone())
    }

    /// Discard everything and restore the seed set.
    pub fn reset_to_default(&mut self) -> Vec<TrainRecord> {
        self.trains = seed::default_trains(self.clock.now());
        info!(count = self.trains.len(), "Restored seed data");
        self.persist();
        self.trains.clone()
    }

    fn position(&self, id: &TrainId) -> Option<usize> {
        self.trains.iter().position(|t| &t.id == id)
    }

    fn fresh_id(&self) -> TrainId {
        let mut id = TrainId::generate();
        while self.position(&id).is_some() {
            id = TrainId::generate();
        }
        id
    }

    fn persist(&self) {
        if let Err(e) = self.snapshots.save(&self.trains) {
            error!(
                error = %e,
                target = %self.snapshots.describe(),
                "Failed to persist trains, keeping in-memory state"
            );
        }
    }
}

impl PublicCapacity for TrainStore {
    fn public_capacity(&mut self, corridor: &CorridorId, limit: usize) -> Vec<TrainRecord> {
        self.list_public(corridor, limit)
    }

    fn live_count(&mut self, corridor: &CorridorId) -> usize {
        self.list(Some(corridor)).len()
    }
}

impl TrainAdmin for TrainStore {
    fn trains(&mut self, corridor: Option<&CorridorId>) -> Vec<TrainRecord> {
        self.list(corridor)
    }

    fn add(&mut self, train: NewTrain) -> Result<TrainRecord> {
        TrainStore::add(self, train)
    }

    fn update(&mut self, id: &TrainId, patch: &TrainPatch) -> Result<TrainRecord> {
        TrainStore::update(self, id, patch)
    }

    fn delete(&mut self, id: &TrainId) -> bool {
        TrainStore::delete(self, id)
    }

    fn export_all(&mut self) -> Vec<TrainRecord> {
        TrainStore::export_all(self)
    }

    fn import_replace(&mut self, payload: &str) -> Result<Vec<TrainRecord>> {
        TrainStore::import_replace(self, payload)
    }

    fn reset_to_default(&mut self) -> Vec<TrainRecord> {
        TrainStore::reset_to_default(self)
    }
}
