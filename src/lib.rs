//! Electricity Views Library
//! # Overview
//!
//! This library turns the UN "Total Electricity" CSV export into the
//! chart-ready tables behind an electricity statistics dashboard.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (EnergyRecord, code tables, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::dataset`] - In-memory dataset with filter/group queries
//!   - [`core::country`] - Country name to ISO-3 resolution
//! - [`io`] - CSV reading of the UN export and CSV writing of views
//! - [`view`] - The view-building pipelines and their factory
//!
//! # Views
//!
//! Three views are supported:
//!
//! - **Production**: generation by fuel and purpose with `% of total`
//!   columns and synthetic residual "Other" rows
//! - **Consumption**: consumption by sector over a year range
//! - **World**: one (year, transaction code) pair across all
//!   countries, with ISO-3 codes for choropleth mapping
//!
//! # Input Format
//!
//! The input is the UNdata export for the "Total Electricity" dataset:
//! one row per (country, transaction code, year) with a quantity in
//! millions of kilowatt-hours, terminated by a footnote block the
//! reader stops at.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;
pub mod view;

pub use core::{CachedResolver, CountryResolver, EnergyDataset, StaticCountryResolver};
pub use types::{
    Consumer, CountryCode, EnergyError, EnergyRecord, Fuel, GroupKey, Purpose, Selection, Year,
};
pub use view::{create_view, ViewPipeline, ViewRequest};
