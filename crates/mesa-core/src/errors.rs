//! Error taxonomy for the Mesa workspace
//!
//! Every crate in the workspace reports failures through [`MesaError`], so
//! the HTTP and CLI layers can map variants (not strings) to status codes
//! and exit behavior.

use crate::model::reservation::ReservationStatus;
use thiserror::Error;

/// Result type alias using MesaError
pub type Result<T> = std::result::Result<T, MesaError>;

/// Comprehensive error taxonomy for Mesa operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MesaError {
    // ===== Validation Errors =====
    /// A required booking field is empty or missing
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Email address does not have a plausible shape
    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },

    /// Guest count outside the bookable range
    #[error("Invalid guest count {guests}: must be between {min} and {max}")]
    InvalidGuestCount { guests: u32, min: u32, max: u32 },

    /// Requested time is not one of the service slots
    #[error("Invalid time slot: {time}")]
    InvalidTimeSlot { time: String },

    /// Requested date is before today
    #[error("Date is in the past: {date}")]
    DateInPast { date: String },

    /// Status string could not be parsed (query params, CLI flags, storage)
    #[error("Invalid reservation status: {value}")]
    InvalidStatus { value: String },

    // ===== Moderation Errors =====
    /// Reservation not found in the store
    #[error("Reservation not found: {id}")]
    ReservationNotFound { id: String },

    /// Illegal moderation transition (only pending reservations can be decided)
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    // ===== Integration Errors =====
    /// Database failure
    #[error("Persistence error in {op}: {message}")]
    Persistence { op: String, message: String },

    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Transactional email dispatch failure
    #[error("Notification error: {message}")]
    Notification { message: String },

    /// Environment/configuration failure at startup
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MesaError {
    /// Whether this error is a rejection of caller-supplied input
    ///
    /// The HTTP layer maps validation errors to 400; everything else has a
    /// more specific mapping or falls through to 500.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MesaError::MissingField { .. }
                | MesaError::InvalidEmail { .. }
                | MesaError::InvalidGuestCount { .. }
                | MesaError::InvalidTimeSlot { .. }
                | MesaError::DateInPast { .. }
                | MesaError::InvalidStatus { .. }
        )
    }
}

/// Conversion from serde_json::Error to MesaError
impl From<serde_json::Error> for MesaError {
    fn from(err: serde_json::Error) -> Self {
        MesaError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(MesaError::MissingField { field: "email" }.is_validation());
        assert!(MesaError::InvalidGuestCount {
            guests: 0,
            min: 1,
            max: 20
        }
        .is_validation());
        assert!(!MesaError::ReservationNotFound { id: "r1".into() }.is_validation());
        assert!(!MesaError::Persistence {
            op: "insert".into(),
            message: "locked".into()
        }
        .is_validation());
    }

    #[test]
    fn test_transition_error_message() {
        let err = MesaError::InvalidTransition {
            from: ReservationStatus::Approved,
            to: ReservationStatus::Rejected,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: approved -> rejected"
        );
    }
}
