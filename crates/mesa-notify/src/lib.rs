//! Mesa Notify - transactional email for reservations
//!
//! Composes and dispatches the reservation emails: an operator notification
//! and a customer acknowledgement when a booking comes in, and a decision
//! notice to the customer when staff approve or reject.
//!
//! Dispatch goes through the [`EmailTransport`] trait so the provider is
//! swappable; the default implementation posts to the SendGrid v3 API.
//! There is no retry or queueing: a failed send is logged and reported to
//! the caller, and the reservation record stays the source of truth.

pub mod compose;
pub mod message;
pub mod notifier;
pub mod transport;

pub use message::{Message, RestaurantIdentity};
pub use notifier::Notifier;
pub use transport::{EmailTransport, NoopTransport, SendGridTransport};
