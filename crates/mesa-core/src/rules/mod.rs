//! Domain rules
//!
//! Validation applied to inbound booking requests before a reservation
//! record is minted.

pub mod validation;
