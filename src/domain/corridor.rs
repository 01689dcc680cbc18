//! Corridor reference data.
//!
//! Corridors are fixed routes that group train records. They are read-only
//! configuration, never part of the mutable store.

use serde::{Deserialize, Serialize};

use super::id::CorridorId;

/// A named route between an origin and a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    /// Lookup key referenced by train records.
    pub id: CorridorId,
    /// Display name.
    pub name: String,
    /// Origin label.
    pub from: String,
    /// Destination label.
    pub to: String,
}

impl Corridor {
    pub fn new(
        id: impl Into<CorridorId>,
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// The four built-in corridors.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new("BRV_OBRNICE", "BRV → Obrnice/Mělník", "BRV", "Obrnice/Mělník"),
            Self::new("HAM_OBRNICE", "HAM → Obrnice/Mělník", "HAM", "Obrnice/Mělník"),
            Self::new("BRV_MOSNOV", "BRV → Mošnov", "BRV", "Mošnov"),
            Self::new("HAM_MOSNOV", "HAM → Mošnov", "HAM", "Mošnov"),
        ]
    }
}

/// Find a corridor by id in a catalog.
#[must_use]
pub fn find<'a>(catalog: &'a [Corridor], id: &CorridorId) -> Option<&'a Corridor> {
    catalog.iter().find(|c| &c.id == id)
}
