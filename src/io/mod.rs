//! I/O module
//!
//! Handles CSV ingest of the UN export and view output.
//!
//! # Components
//!
//! - `csv_format` - export schema handling (header resolution, row
//!   parsing, view serialization)
//! - `reader` - streaming reader with iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    transaction_label, write_consumption_csv, write_production_csv, write_world_csv, Header,
    ParsedRow,
};
pub use reader::DatasetReader;
