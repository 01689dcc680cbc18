//! Board surfaces driven by the presentation layer.

use crate::domain::id::{CorridorId, TrainId};
use crate::domain::train::{NewTrain, TrainPatch, TrainRecord};
use crate::error::Result;

/// What the public view may ask for.
///
/// Reads take `&mut self` because every read sweeps expired trains first.
pub trait PublicCapacity {
    /// The earliest `limit` live trains on a corridor.
    fn public_capacity(&mut self, corridor: &CorridorId, limit: usize) -> Vec<TrainRecord>;

    /// Number of live trains on a corridor.
    fn live_count(&mut self, corridor: &CorridorId) -> usize;
}

/// Full administrative surface.
pub trait TrainAdmin: PublicCapacity {
    /// Live trains, optionally filtered by corridor, sorted by departure.
    fn trains(&mut self, corridor: Option<&CorridorId>) -> Vec<TrainRecord>;

    fn add(&mut self, train: NewTrain) -> Result<TrainRecord>;

    fn update(&mut self, id: &TrainId, patch: &TrainPatch) -> Result<TrainRecord>;

    /// Returns whether a record was removed.
    fn delete(&mut self, id: &TrainId) -> bool;

    fn export_all(&mut self) -> Vec<TrainRecord>;

    fn import_replace(&mut self, payload: &str) -> Result<Vec<TrainRecord>>;

    fn reset_to_default(&mut self) -> Vec<TrainRecord>;
}
