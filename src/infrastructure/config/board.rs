//! Board presentation settings.

use serde::Deserialize;

use crate::domain::window::{BookingWindow, DEFAULT_MIN_LEAD_HOURS};

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Trains shown per corridor on the public board.
    #[serde(default = "default_public_limit")]
    pub public_limit: usize,
    /// Seconds between refreshes in `board watch`.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Minimum hours between now and a bookable departure.
    #[serde(default = "default_min_lead_hours")]
    pub min_lead_hours: u32,
}

const fn default_public_limit() -> usize {
    5
}

const fn default_refresh_interval_secs() -> u64 {
    60
}

const fn default_min_lead_hours() -> u32 {
    DEFAULT_MIN_LEAD_HOURS
}

impl BoardConfig {
    #[must_use]
    pub fn window(&self) -> BookingWindow {
        BookingWindow::from_hours(self.min_lead_hours)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            public_limit: default_public_limit(),
            refresh_interval_secs: default_refresh_interval_secs(),
            min_lead_hours: default_min_lead_hours(),
        }
    }
}
