//! Record and selector types for the electricity dataset
//!
//! This module defines the cleaned source-row type produced by the CSV
//! loader, plus the explicit selector types used by dataset queries.

/// Year of a data row
///
/// The UN export covers 1990 onwards; i32 keeps arithmetic on year
/// ranges simple.
pub type Year = i32;

/// Numeric UN country-or-area code
pub type CountryCode = i32;

/// One cleaned row of the UN "Total Electricity" export
///
/// Built once at load time and never mutated afterwards. The commodity
/// columns, unit and footnote flags of the raw export are stripped
/// during parsing; the unit is implicitly fixed to 10^6 kWh for the
/// whole dataset (the loader validates this).
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRecord {
    /// Country or area display name
    pub country: String,

    /// Numeric UN country-or-area code
    pub country_code: CountryCode,

    /// Opaque transaction code (e.g. `EP`, `015C`, `1231`)
    ///
    /// A stable string key whose meaning is resolved only via the code
    /// tables in [`crate::types::codes`].
    pub code: String,

    /// Human-readable transaction label
    ///
    /// Derived from the combined commodity-transaction field by taking
    /// the suffix after the last `" - "` delimiter.
    pub transaction: String,

    /// Year the quantity applies to
    pub year: Year,

    /// Quantity in units of 10^6 kWh
    pub quantity: f64,
}

/// Explicit single-or-many selector
///
/// A query can target one key or an ordered list of keys; the variant
/// is normalized once at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// A single key
    One(T),

    /// An ordered sequence of keys
    Many(Vec<T>),
}

impl<T: Clone> Selection<T> {
    /// Normalize the selector into an ordered list of keys
    pub fn values(&self) -> Vec<T> {
        match self {
            Selection::One(value) => vec![value.clone()],
            Selection::Many(values) => values.clone(),
        }
    }
}

/// Grouping key for dataset aggregation
///
/// Selects whether aggregated rows are keyed by the raw transaction
/// code or by the derived human-readable transaction label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// Key by raw transaction code (e.g. `015C`)
    Code,

    /// Key by derived transaction label (e.g. `hydro`)
    Label,
}
