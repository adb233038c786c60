//! Electricity Views CLI
//!
//! Command-line interface for building dashboard tables from the UN
//! "Total Electricity" CSV export.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --year 2018 total_electricity.csv > production.csv
//! cargo run -- --view consumption --from 2008 --to 2018 total_electricity.csv > consumption.csv
//! cargo run -- --view world --year 2018 --transaction EP total_electricity.csv > world.csv
//! ```
//!
//! The program loads the export into memory, builds the requested
//! view and writes it as CSV to stdout. Logs go to stderr so the CSV
//! stream stays clean.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid arguments, file not found, malformed input,
//!   selector with no data, etc.)

use electricity_views::core::EnergyDataset;
use electricity_views::{cli, view};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs to stderr; stdout carries the view CSV.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Validate the argument combination before touching the input
    let request = match args.to_view_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let dataset = match EnergyDataset::from_path(&args.input_file) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Build the requested view and write it to stdout
    let pipeline = view::create_view(request);
    let mut output = std::io::stdout();
    if let Err(e) = pipeline.render(&dataset, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
