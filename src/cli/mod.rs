//! Command-line interface

pub mod args;

pub use args::{CliArgs, ViewKind};

use clap::Parser;

/// Parse command-line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
