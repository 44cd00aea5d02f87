//! Approve command

use clap::Args;
use mesa_core::MesaError;
use mesa_store::SqliteRepo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApproveArgs {
    #[arg(long, default_value = "mesa.db")]
    pub db: PathBuf,

    /// Reservation id
    pub id: String,
}

pub fn execute(args: ApproveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(&args.db)?;

    let mut reservation = SqliteRepo::get(&conn, &args.id)?
        .ok_or(MesaError::ReservationNotFound { id: args.id })?;
    reservation.approve()?;
    SqliteRepo::update_status(&conn, &reservation.id, reservation.status, None)?;

    println!("Reservation approved: {}", reservation.id);
    println!("  {} {}, {} guests, {}", reservation.date, reservation.time, reservation.guests, reservation.name);
    println!("  (no email sent; customer notices go out through the API server)");

    Ok(())
}
