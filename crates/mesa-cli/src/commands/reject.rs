//! Reject command

use clap::Args;
use mesa_core::MesaError;
use mesa_store::SqliteRepo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RejectArgs {
    #[arg(long, default_value = "mesa.db")]
    pub db: PathBuf,

    /// Reservation id
    pub id: String,

    /// Reason shown to the customer; defaults to the standard text
    #[arg(long)]
    pub reason: Option<String>,
}

pub fn execute(args: RejectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(&args.db)?;

    let mut reservation = SqliteRepo::get(&conn, &args.id)?
        .ok_or(MesaError::ReservationNotFound { id: args.id })?;
    reservation.reject(args.reason)?;
    SqliteRepo::update_status(
        &conn,
        &reservation.id,
        reservation.status,
        reservation.rejection_reason.as_deref(),
    )?;

    println!("Reservation rejected: {}", reservation.id);
    if let Some(reason) = &reservation.rejection_reason {
        println!("  reason: {}", reason);
    }
    println!("  (no email sent; customer notices go out through the API server)");

    Ok(())
}
