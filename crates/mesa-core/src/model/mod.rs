//! Domain model
//!
//! Type definitions for the reservation record and its moderation status.

pub mod reservation;

pub use reservation::{
    admin_order, Reservation, ReservationFilter, ReservationRequest, ReservationStatus,
    DEFAULT_REJECTION_REASON,
};
