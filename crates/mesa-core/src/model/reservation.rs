//! Reservation domain model
//!
//! A reservation is a customer's request for a table at a given date, time
//! and party size, tracked with a moderation status. Reservations are
//! created `Pending` and are decided exactly once by restaurant staff:
//! `Pending -> Approved` or `Pending -> Rejected`. A rejected reservation
//! always carries a rejection reason.

use crate::errors::{MesaError, Result};
use crate::rules::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Reason recorded when staff reject without giving one
pub const DEFAULT_REJECTION_REASON: &str = "No availability on the requested date";

/// Moderation status of a reservation
///
/// `Pending` is the initial state; `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReservationStatus {
    /// Stable lowercase name, as stored and as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = MesaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "approved" => Ok(ReservationStatus::Approved),
            "rejected" => Ok(ReservationStatus::Rejected),
            other => Err(MesaError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// Unvalidated inbound booking form
///
/// This is what the booking endpoint deserializes. [`Reservation::from_request`]
/// validates it and mints the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A reservation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier (UUIDv4)
    pub id: String,

    /// Customer name
    pub name: String,

    /// Customer email (lookup key for the status page)
    pub email: String,

    /// Customer phone
    pub phone: String,

    /// Requested date
    pub date: NaiveDate,

    /// Requested service slot (`HH:MM`)
    pub time: String,

    /// Party size
    pub guests: u32,

    /// Free-form notes (allergies, celebrations, ...)
    pub notes: Option<String>,

    /// Moderation status
    pub status: ReservationStatus,

    /// Reason given by staff; set only when rejected
    pub rejection_reason: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Validate a booking request and mint a pending reservation
    ///
    /// `today` is injected so the no-past-dates rule is testable; callers
    /// pass `Utc::now().date_naive()`.
    pub fn from_request(request: ReservationRequest, today: NaiveDate) -> Result<Self> {
        validation::validate_request(&request, today)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            date: request.date,
            time: request.time,
            guests: request.guests,
            notes: validation::normalize_notes(request.notes),
            status: ReservationStatus::Pending,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check whether the reservation is still awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.status == ReservationStatus::Pending
    }

    /// Approve a pending reservation
    pub fn approve(&mut self) -> Result<()> {
        if !self.is_pending() {
            return Err(MesaError::InvalidTransition {
                from: self.status,
                to: ReservationStatus::Approved,
            });
        }
        self.status = ReservationStatus::Approved;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Reject a pending reservation
    ///
    /// A blank or absent reason falls back to [`DEFAULT_REJECTION_REASON`].
    pub fn reject(&mut self, reason: Option<String>) -> Result<()> {
        if !self.is_pending() {
            return Err(MesaError::InvalidTransition {
                from: self.status,
                to: ReservationStatus::Rejected,
            });
        }
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

        self.status = ReservationStatus::Rejected;
        self.rejection_reason = Some(reason);
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation({}, {}, {} {}, guests={}, status={})",
            self.id, self.name, self.date, self.time, self.guests, self.status
        )
    }
}

/// Admin moderation list filter
///
/// Mirrors the moderation panel's filter row: an optional status plus a
/// free-text search over name, email and phone.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub search: Option<String>,
}

impl ReservationFilter {
    /// Check whether a reservation passes the filter
    ///
    /// Name and email match case-insensitively; phone is a plain substring
    /// match. An empty search term matches everything.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(status) = self.status {
            if reservation.status != status {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                reservation.name.to_lowercase().contains(&needle)
                    || reservation.email.to_lowercase().contains(&needle)
                    || reservation.phone.contains(term)
            }
        }
    }
}

/// Sort reservations into moderation order
///
/// Pending reservations first, then newest `created_at` first within each
/// group.
pub fn admin_order(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| {
        b.is_pending()
            .cmp(&a.is_pending())
            .then(b.created_at.cmp(&a.created_at))
    });
}
