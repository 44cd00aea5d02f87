//! Show command

use clap::Args;
use mesa_core::MesaError;
use mesa_store::SqliteRepo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(long, default_value = "mesa.db")]
    pub db: PathBuf,

    /// Reservation id
    pub id: String,
}

pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(&args.db)?;

    let reservation = SqliteRepo::get(&conn, &args.id)?
        .ok_or(MesaError::ReservationNotFound { id: args.id })?;

    println!("Reservation {}", reservation.id);
    println!("  name: {}", reservation.name);
    println!("  email: {}", reservation.email);
    println!("  phone: {}", reservation.phone);
    println!("  date: {} {}", reservation.date, reservation.time);
    println!("  guests: {}", reservation.guests);
    println!("  status: {}", reservation.status);
    if let Some(reason) = &reservation.rejection_reason {
        println!("  rejection_reason: {}", reason);
    }
    if let Some(notes) = &reservation.notes {
        println!("  notes: {}", notes);
    }
    println!("  created_at: {}", reservation.created_at);
    println!("  updated_at: {}", reservation.updated_at);

    Ok(())
}
