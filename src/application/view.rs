//! Read models for the public and admin views.
//!
//! Both views are derived from the store on demand; neither holds state.

use serde::Serialize;

use crate::domain::corridor::Corridor;
use crate::domain::train::{TrainRecord, TrainStatus};
use crate::port::inbound::board::{PublicCapacity, TrainAdmin};

/// Trains on one corridor, as a view presents them.
#[derive(Debug, Clone, Serialize)]
pub struct CorridorBoard {
    pub corridor: Corridor,
    pub trains: Vec<TrainRecord>,
    /// Live trains on the corridor, including any not shown.
    pub total: usize,
}

impl CorridorBoard {
    /// Live trains left out of `trains`.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.total.saturating_sub(self.trains.len())
    }
}

/// Number of live trains per capacity status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub available: usize,
    pub inquiry: usize,
    pub full: usize,
}

impl StatusCounts {
    fn record(&mut self, status: TrainStatus) {
        match status {
            TrainStatus::Available => self.available += 1,
            TrainStatus::Inquiry => self.inquiry += 1,
            TrainStatus::Full => self.full += 1,
        }
    }

    #[must_use]
    pub fn get(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::Available => self.available,
            TrainStatus::Inquiry => self.inquiry,
            TrainStatus::Full => self.full,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.available + self.inquiry + self.full
    }
}

/// Everything the admin view shows.
#[derive(Debug, Clone, Serialize)]
pub struct AdminBoard {
    pub corridors: Vec<CorridorBoard>,
    pub status_counts: StatusCounts,
    /// Trains whose corridor is not in the catalog (only reachable by import).
    pub uncatalogued: Vec<TrainRecord>,
}

/// The public view: at most `limit` trains per catalog corridor.
pub fn public_board<B>(board: &mut B, catalog: &[Corridor], limit: usize) -> Vec<CorridorBoard>
where
    B: PublicCapacity + ?Sized,
{
    catalog
        .iter()
        .map(|corridor| CorridorBoard {
            trains: board.public_capacity(&corridor.id, limit),
            total: board.live_count(&corridor.id),
            corridor: corridor.clone(),
        })
        .collect()
}

/// The admin view: every live train, grouped by catalog corridor.
pub fn admin_board<B>(board: &mut B, catalog: &[Corridor]) -> AdminBoard
where
    B: TrainAdmin + ?Sized,
{
    let all = board.trains(None);

    let mut status_counts = StatusCounts::default();
    for train in &all {
        status_counts.record(train.status);
    }

    let corridors = catalog
        .iter()
        .map(|corridor| {
            let trains: Vec<TrainRecord> = all
                .iter()
                .filter(|t| t.corridor == corridor.id)
                .cloned()
                .collect();
            CorridorBoard {
                total: trains.len(),
                trains,
                corridor: corridor.clone(),
            }
        })
        .collect();

    let uncatalogued = all
        .into_iter()
        .filter(|t| !catalog.iter().any(|c| c.id == t.corridor))
        .collect();

    AdminBoard {
        corridors,
        status_counts,
        uncatalogued,
    }
}
