//! Display-ready view row types
//!
//! A view is a derived table produced per query and discarded after
//! rendering; it has no identity beyond the parameters that produced
//! it. Each row shape below serializes to exactly the columns the
//! charting layer consumes, in order.

use crate::types::codes::{Consumer, Fuel, Purpose};
use crate::types::record::Year;
use serde::Serialize;

/// One row of the production view
///
/// Carries the aggregated quantity plus the derived fuel, purpose and
/// percentage-of-total columns. Residual "Other" rows use the
/// synthetic codes `EP-other` / `SP-other`; their quantities are
/// derived, not drawn from the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRow {
    #[serde(rename = "Year")]
    pub year: Year,

    /// Transaction code, or a synthetic residual code
    #[serde(rename = "Transaction Code")]
    pub code: String,

    /// Aggregated quantity in 10^6 kWh, summed across countries
    #[serde(rename = "Quantity (1e6 kW/h)")]
    pub quantity: f64,

    /// `100 * quantity / (EP + SP)` for the row's year
    #[serde(rename = "% of total")]
    pub pct_of_total: f64,

    #[serde(rename = "Fuel")]
    pub fuel: Fuel,

    #[serde(rename = "Purpose")]
    pub purpose: Purpose,
}

/// One row of the consumption view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionRow {
    #[serde(rename = "Year")]
    pub year: Year,

    #[serde(rename = "Transaction Code")]
    pub code: String,

    /// Aggregated quantity in 10^6 kWh, summed across countries
    #[serde(rename = "Quantity (1e6 kW/h)")]
    pub quantity: f64,

    /// Consumer sector; `None` (empty field) for codes outside the
    /// fixed table
    #[serde(rename = "Consumer")]
    pub consumer: Option<Consumer>,
}

/// One row of the per-country world view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldRow {
    #[serde(rename = "Country or Area")]
    pub country: String,

    /// ISO-3166 alpha-3 code; `None` (empty field) when the name did
    /// not resolve
    #[serde(rename = "ISO-3")]
    pub iso3: Option<String>,

    #[serde(rename = "Year")]
    pub year: Year,

    #[serde(rename = "Transaction Code")]
    pub code: String,

    /// Quantity in 10^6 kWh for this country
    #[serde(rename = "Quantity (1e6 kW/h)")]
    pub quantity: f64,
}
