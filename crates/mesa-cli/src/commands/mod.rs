//! CLI commands

pub mod approve;
pub mod list;
pub mod reject;
pub mod show;

use mesa_core::Reservation;
use rusqlite::Connection;
use std::path::Path;

/// Open the reservation database and make sure the schema is current
pub fn open_db(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    let mut conn = mesa_store::db::open(path)?;
    mesa_store::db::configure(&conn)?;
    mesa_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

/// One-line summary used by the list command
pub fn summary_line(reservation: &Reservation) -> String {
    format!(
        "{}  {} {}  {:>2} guests  [{}]  {} <{}>",
        reservation.id,
        reservation.date,
        reservation.time,
        reservation.guests,
        reservation.status,
        reservation.name,
        reservation.email,
    )
}
