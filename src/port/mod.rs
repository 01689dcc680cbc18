//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Outbound ports are implemented by adapters that reach external
//! facilities (the snapshot slot, the system clock); inbound ports are the
//! surfaces presentation code drives.
//!
//! # Architecture
//!
//! ```text
//!     ┌──────────────┐        ┌─────────────────────────┐
//!     │ Public view  ├───────►│                         │
//!     └──────────────┘        │      TrainStore         │
//!     ┌──────────────┐        │  (Domain + Port)        │
//!     │  Admin view  ├───────►│                         │
//!     └──────────────┘        └───────────┬─────────────┘
//!                                         │
//!                          ┌──────────────┴─────────────┐
//!                          ▼                            ▼
//!                   ┌─────────────┐              ┌───────────┐
//!                   │  Snapshot   │              │   Clock   │
//!                   │   Adapter   │              │  Adapter  │
//!                   └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::snapshot::SnapshotStore`] - whole-collection persistence
//! - [`outbound::clock::Clock`] - source of "now"
//! - [`inbound::board::PublicCapacity`] - read-only public surface
//! - [`inbound::board::TrainAdmin`] - full admin surface

pub mod inbound;
pub mod outbound;
