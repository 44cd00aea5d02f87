//! Mesa CLI
//!
//! Operator command-line interface for the reservation database

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "mesa")]
#[command(about = "Mesa - Restaurant reservation management", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List reservations in moderation order
    List(commands::list::ListArgs),
    /// Show a single reservation
    Show(commands::show::ShowArgs),
    /// Approve a pending reservation
    Approve(commands::approve::ApproveArgs),
    /// Reject a pending reservation
    Reject(commands::reject::RejectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Approve(args) => commands::approve::execute(args),
        Commands::Reject(args) => commands::reject::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
