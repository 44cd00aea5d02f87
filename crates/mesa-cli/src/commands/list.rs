//! List command

use clap::Args;
use mesa_core::{admin_order, ReservationFilter, ReservationStatus};
use mesa_store::SqliteRepo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value = "mesa.db")]
    pub db: PathBuf,

    /// Only show reservations with this status (pending, approved, rejected)
    #[arg(long)]
    pub status: Option<String>,

    /// Free-text search over name, email and phone
    #[arg(long)]
    pub search: Option<String>,
}

pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_db(&args.db)?;

    let status: Option<ReservationStatus> =
        args.status.as_deref().map(str::parse).transpose()?;
    let filter = ReservationFilter {
        status,
        search: args.search,
    };

    let mut reservations = SqliteRepo::list_all(&conn)?;
    reservations.retain(|r| filter.matches(r));
    admin_order(&mut reservations);

    if reservations.is_empty() {
        println!("No reservations");
        return Ok(());
    }

    for reservation in &reservations {
        println!("{}", super::summary_line(reservation));
    }
    println!("{} reservation(s)", reservations.len());

    Ok(())
}
