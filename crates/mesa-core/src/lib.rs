//! Mesa core domain
//!
//! Domain model for restaurant table reservations: the reservation record,
//! its three-state moderation status (pending, approved, rejected), the
//! validation rules applied to inbound booking requests, and the shared
//! error taxonomy and logging facility used by the rest of the workspace.
//!
//! This crate is deliberately free of I/O. Persistence lives in
//! `mesa-store`, email dispatch in `mesa-notify`, and the HTTP surface in
//! `mesa-api`.

pub mod errors;
pub mod logging;
pub mod model;
pub mod rules;

pub use errors::{MesaError, Result};
pub use model::reservation::{
    admin_order, Reservation, ReservationFilter, ReservationRequest, ReservationStatus,
    DEFAULT_REJECTION_REASON,
};
