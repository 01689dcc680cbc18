//! Booking window: the minimum lead time a departure must keep.
//!
//! A train is listable and bookable only while its departure lies strictly
//! more than `min_lead` after "now". The same rule drives both write-time
//! validation and the expiry sweep.

use chrono::{DateTime, Duration, Utc};

use super::error::ValidationError;

/// Default minimum lead time, in hours.
pub const DEFAULT_MIN_LEAD_HOURS: u32 = 48;

/// Largest accepted lead time, in hours (five years).
pub const MAX_MIN_LEAD_HOURS: u32 = 5 * 365 * 24;

/// Minimum lead time between "now" and a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    min_lead: Duration,
}

impl BookingWindow {
    /// Create a window with the given lead time in hours.
    #[must_use]
    pub fn from_hours(hours: u32) -> Self {
        Self {
            min_lead: Duration::hours(i64::from(hours)),
        }
    }

    /// The configured lead time.
    #[must_use]
    pub const fn min_lead(&self) -> Duration {
        self.min_lead
    }

    /// The boundary instant: departures must be strictly after it.
    ///
    /// Saturates at the last representable instant, so an oversized lead
    /// time admits nothing.
    #[must_use]
    pub fn earliest(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.min_lead).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// True when `departure` is strictly more than `min_lead` after `now`.
    #[must_use]
    pub fn admits(&self, departure: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        departure > self.earliest(now)
    }

    /// Reject departures that do not clear the window.
    pub fn check(
        &self,
        departure: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if self.admits(departure, now) {
            Ok(())
        } else {
            Err(ValidationError::DepartureTooSoon {
                departure,
                earliest: self.earliest(now),
            })
        }
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self::from_hours(DEFAULT_MIN_LEAD_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn boundary_is_exclusive() {
        let window = BookingWindow::default();
        let exactly = now() + Duration::hours(48);
        assert!(!window.admits(exactly, now()));
        assert!(window.admits(exactly + Duration::seconds(1), now()));
    }

    #[test]
    fn check_reports_boundary() {
        let window = BookingWindow::default();
        let departure = now() + Duration::hours(30);
        let err = window.check(departure, now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DepartureTooSoon {
                departure,
                earliest: now() + Duration::hours(48),
            }
        );
    }

    #[test]
    fn custom_lead_time() {
        let window = BookingWindow::from_hours(2);
        assert!(window.admits(now() + Duration::hours(3), now()));
        assert!(!window.admits(now() + Duration::hours(1), now()));
    }

    #[test]
    fn oversized_lead_time_admits_nothing() {
        let window = BookingWindow::from_hours(u32::MAX);
        assert_eq!(window.earliest(now()), DateTime::<Utc>::MAX_UTC);
        assert!(!window.admits(DateTime::<Utc>::MAX_UTC, now()));
        assert!(window.check(now() + Duration::days(365), now()).is_err());
    }
}
