//! Validation errors for board operations.
//!
//! These errors are returned when a business rule is violated: a departure
//! inside the booking window, an unusable import payload, or unparseable
//! user input.
//!
//! # Examples
//!
//! ```
//! use captrain::domain::error::ValidationError;
//! use captrain::domain::train::TrainStatus;
//!
//! let result: Result<TrainStatus, _> = "SOLD_OUT".parse();
//! assert!(matches!(result, Err(ValidationError::UnknownStatus { .. })));
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that occur when board rules are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Departure must lie strictly beyond the booking window.
    #[error("departure {departure} is inside the booking window (must be after {earliest})")]
    DepartureTooSoon {
        /// The rejected departure instant.
        departure: DateTime<Utc>,
        /// The window boundary the departure had to exceed.
        earliest: DateTime<Utc>,
    },

    /// Import payload is not valid JSON.
    #[error("import payload is not valid JSON: {0}")]
    MalformedImport(String),

    /// Import payload parsed, but is not an array.
    #[error("imported data must be an array of trains")]
    ImportNotArray,

    /// No element of the import payload had the required shape.
    #[error("no valid records in import")]
    EmptyImport,

    /// A departure string could not be parsed.
    #[error("invalid departure '{input}': expected RFC 3339, YYYY-MM-DDTHH:MM or YYYY-MM-DD")]
    InvalidDeparture {
        /// The raw input.
        input: String,
    },

    /// A status string did not name a known capacity status.
    #[error("unknown status '{input}': expected AVAILABLE, INQUIRY or FULL")]
    UnknownStatus {
        /// The raw input.
        input: String,
    },

    /// A corridor id is not part of the configured catalog.
    #[error("unknown corridor '{corridor}'")]
    UnknownCorridor {
        /// The rejected corridor id.
        corridor: String,
    },
}
