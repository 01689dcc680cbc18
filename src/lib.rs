//! Captrain - capacity board for scheduled train slots.
//!
//! Operators record upcoming departures per corridor and mark each one as
//! available, on inquiry or full. The public board shows the next few
//! departures per corridor; the admin view shows all of them.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Train records, corridors, the booking window, seed data
//! - **`port`** - Traits at the seams
//!   - `PublicCapacity` / `TrainAdmin` - what the views may ask of the store
//!   - `SnapshotStore` / `Clock` - what the store needs from the outside
//! - **`application`** - `TrainStore` and the board read models
//! - **`adapter`** - The CLI, file and in-memory snapshot stores
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Rules
//!
//! - Trains whose departure has passed are swept on every read.
//! - New departures must be more than 48 hours away (configurable).
//! - A failed snapshot write is logged; the in-memory board stays
//!   authoritative.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use captrain::adapter::outbound::clock::SystemClock;
//! use captrain::adapter::outbound::memory::MemorySnapshotStore;
//! use captrain::application::store::TrainStore;
//!
//! let mut store = TrainStore::open(Box::new(MemorySnapshotStore::new()), Arc::new(SystemClock));
//! assert_eq!(store.list(None).len(), 5);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
