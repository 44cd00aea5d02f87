//! SQLite repository implementation
//!
//! Persists reservation records to the reservations table. Reservations are
//! insert-once: creation writes the full row, moderation updates status,
//! rejection_reason and updated_at in place.

use crate::errors::{corrupt_row, from_rusqlite, Result};
use chrono::NaiveDate;
use mesa_core::errors::MesaError;
use mesa_core::model::reservation::{Reservation, ReservationStatus};
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str =
    "id, name, email, phone, date, time, guests, notes, status, rejection_reason, created_at, updated_at";

/// Raw row as stored; decoded into the domain type after the query
struct RawReservation {
    id: String,
    name: String,
    email: String,
    phone: String,
    date: String,
    time: String,
    guests: i64,
    notes: Option<String>,
    status: String,
    rejection_reason: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl RawReservation {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            date: row.get(4)?,
            time: row.get(5)?,
            guests: row.get(6)?,
            notes: row.get(7)?,
            status: row.get(8)?,
            rejection_reason: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }

    fn decode(self) -> Result<Reservation> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| corrupt_row(&self.id, &format!("bad date {:?}: {}", self.date, e)))?;
        let status: ReservationStatus = self
            .status
            .parse()
            .map_err(|_| corrupt_row(&self.id, &format!("bad status {:?}", self.status)))?;
        let created_at = chrono::DateTime::from_timestamp(self.created_at, 0)
            .ok_or_else(|| corrupt_row(&self.id, "bad created_at"))?;
        let updated_at = chrono::DateTime::from_timestamp(self.updated_at, 0)
            .ok_or_else(|| corrupt_row(&self.id, "bad updated_at"))?;

        Ok(Reservation {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date,
            time: self.time,
            guests: self.guests as u32,
            notes: self.notes,
            status,
            rejection_reason: self.rejection_reason,
            created_at,
            updated_at,
        })
    }
}

/// SQLite repository for reservations
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a freshly minted reservation
    ///
    /// Ids are unique; inserting the same id twice is a persistence error.
    pub fn insert(conn: &Connection, reservation: &Reservation) -> Result<()> {
        conn.execute(
            "INSERT INTO reservations
                (id, name, email, phone, date, time, guests, notes, status, rejection_reason, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                reservation.id,
                reservation.name,
                reservation.email,
                reservation.phone,
                reservation.date.format("%Y-%m-%d").to_string(),
                reservation.time,
                reservation.guests,
                reservation.notes,
                reservation.status.as_str(),
                reservation.rejection_reason,
                reservation.created_at.timestamp(),
                reservation.updated_at.timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a reservation by id
    pub fn get(conn: &Connection, id: &str) -> Result<Option<Reservation>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM reservations WHERE id = ?"))
            .map_err(from_rusqlite)?;

        let raw = stmt
            .query_row([id], RawReservation::from_row)
            .optional()
            .map_err(from_rusqlite)?;

        raw.map(RawReservation::decode).transpose()
    }

    /// List every reservation in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM reservations ORDER BY rowid"))
            .map_err(from_rusqlite)?;

        let raws: Vec<RawReservation> = stmt
            .query_map([], RawReservation::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        raws.into_iter().map(RawReservation::decode).collect()
    }

    /// List a customer's reservations, newest first
    ///
    /// Email matches case-insensitively: the customer status page accepts
    /// whatever capitalization the customer types.
    pub fn list_by_email(conn: &Connection, email: &str) -> Result<Vec<Reservation>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM reservations
                 WHERE email = ?1 COLLATE NOCASE
                 ORDER BY created_at DESC, rowid DESC"
            ))
            .map_err(from_rusqlite)?;

        let raws: Vec<RawReservation> = stmt
            .query_map([email.trim()], RawReservation::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        raws.into_iter().map(RawReservation::decode).collect()
    }

    /// Persist a moderation decision already validated by the domain
    pub fn update_status(
        conn: &Connection,
        id: &str,
        status: ReservationStatus,
        rejection_reason: Option<&str>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let updated = conn
            .execute(
                "UPDATE reservations
                 SET status = ?1, rejection_reason = ?2, updated_at = ?3
                 WHERE id = ?4",
                rusqlite::params![status.as_str(), rejection_reason, now, id],
            )
            .map_err(from_rusqlite)?;

        if updated == 0 {
            return Err(MesaError::ReservationNotFound { id: id.to_string() });
        }

        Ok(())
    }
}
