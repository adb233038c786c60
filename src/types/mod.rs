//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: dataset row and selector types
//! - `codes`: transaction-code tables (fuel, purpose, consumer, family)
//! - `view`: display-ready view row types
//! - `error`: error types for the view engine

pub mod codes;
pub mod error;
pub mod record;
pub mod view;

pub use codes::{
    classify, consumer_for_code, fuel_for_code, purpose_for_code, CodeFamily, Consumer, Fuel,
    Purpose,
};
pub use error::EnergyError;
pub use record::{CountryCode, EnergyRecord, GroupKey, Selection, Year};
pub use view::{ConsumptionRow, ProductionRow, WorldRow};
