//! CLI argument parsing for the hos-trip-planner binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "hos-trip-planner", about = "FMCSA Hours-of-Service trip planning service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server (default if no subcommand given)
    Serve,
    /// Run database migrations and exit
    Migrate,
    /// Recompute and re-upsert one driver's RODS for a given date
    Replan {
        #[arg(long)]
        driver_id: Uuid,
        #[arg(long)]
        date: NaiveDate,
    },
}
