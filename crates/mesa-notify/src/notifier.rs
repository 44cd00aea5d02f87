//! Reservation notifier
//!
//! One dispatcher for all reservation emails. Creation sends two messages
//! (operator notification + customer acknowledgement); a moderation decision
//! sends the matching customer notice.

use crate::compose;
use crate::message::RestaurantIdentity;
use crate::transport::EmailTransport;
use mesa_core::errors::{MesaError, Result};
use mesa_core::model::reservation::{Reservation, ReservationStatus};
use std::sync::Arc;
use tracing::warn;

/// Composes and dispatches reservation emails through a transport
pub struct Notifier {
    transport: Arc<dyn EmailTransport>,
    identity: RestaurantIdentity,
}

impl Notifier {
    pub fn new(transport: Arc<dyn EmailTransport>, identity: RestaurantIdentity) -> Self {
        Self {
            transport,
            identity,
        }
    }

    /// Send both creation emails
    ///
    /// Both messages are attempted even when the first fails; the first
    /// failure is returned so the caller can log it. Callers must treat
    /// this as best-effort: the stored reservation is the source of truth.
    pub async fn reservation_created(&self, reservation: &Reservation) -> Result<()> {
        let messages = [
            compose::operator_notification(&self.identity, reservation),
            compose::customer_acknowledgement(&self.identity, reservation),
        ];

        let mut first_err = None;
        for message in &messages {
            if let Err(e) = self.transport.send(message).await {
                warn!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %e,
                    "failed to send reservation email"
                );
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Send the decision notice matching the reservation's status
    pub async fn reservation_decided(&self, reservation: &Reservation) -> Result<()> {
        let message = match reservation.status {
            ReservationStatus::Approved => {
                compose::customer_approval(&self.identity, reservation)
            }
            ReservationStatus::Rejected => {
                compose::customer_rejection(&self.identity, reservation)
            }
            ReservationStatus::Pending => {
                return Err(MesaError::Internal {
                    message: "no decision email for a pending reservation".to_string(),
                })
            }
        };

        self.transport.send(&message).await
    }
}
