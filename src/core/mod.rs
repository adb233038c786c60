//! Core business logic module
//!
//! This module contains the data layer of the view engine:
//! - `dataset` - the in-memory dataset and its filtered/aggregated
//!   queries
//! - `country` - country-name to ISO-3 resolution behind a trait

pub mod country;
pub mod dataset;

pub use country::{CachedResolver, CountryResolver, StaticCountryResolver};
pub use dataset::{AggregateRow, CountryQuantity, EnergyDataset};
