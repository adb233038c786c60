//! Production view: generation by fuel and purpose
//!
//! Aggregates the production code family for the requested years,
//! derives fuel and purpose labels, computes `% of total` against the
//! EP + SP denominator and appends the synthetic residual "Other"
//! rows per purpose.

use crate::core::dataset::AggregateRow;
use crate::core::EnergyDataset;
use crate::io::csv_format::write_production_csv;
use crate::types::codes::{fuel_for_code, purpose_for_code, Fuel, Purpose};
use crate::types::view::ProductionRow;
use crate::types::{EnergyError, GroupKey, Selection, Year};
use crate::view::ViewPipeline;
use std::collections::BTreeMap;
use std::io::Write;

/// Production codes shown on the dashboard: the EP / SP totals plus
/// the named sub-fuels for both purposes.
pub const DEFAULT_PRODUCTION_CODES: &[&str] = &[
    "EP", "SP", "015C", "016C", "015HY", "016HY", "015N", "016N", "015W", "016W", "015S", "016S",
    "015H", "016H",
];

/// Synthetic code for the main-activity residual row
pub const OTHER_MAIN_CODE: &str = "EP-other";
/// Synthetic code for the autoproducer residual row
pub const OTHER_AUTO_CODE: &str = "SP-other";

/// Builds the production view for a year selection and code list
pub struct ProductionView {
    years: Selection<Year>,
    codes: Vec<String>,
}

impl ProductionView {
    /// Create a production view over the given years and codes
    pub fn new(years: Selection<Year>, codes: Vec<String>) -> Self {
        Self { years, codes }
    }

    /// Build the display-ready rows
    ///
    /// Per year, in order: the aggregated source rows sorted by code,
    /// then the main-activity residual (when EP is present), then the
    /// autoproducer residual (when SP is present).
    ///
    /// The denominator for `% of total` is EP + SP for the row's
    /// year, not the Gross/Net totals in the data: those don't add up
    /// to the purpose breakdown the chart displays. A totals code
    /// missing from the selection contributes zero.
    ///
    /// # Errors
    ///
    /// `SelectorNotFound` if a requested year or code has no data, or
    /// if neither EP nor SP was selected (the view cannot be
    /// percentaged without a total).
    pub fn build(&self, dataset: &EnergyDataset) -> Result<Vec<ProductionRow>, EnergyError> {
        let transactions = Selection::Many(self.codes.clone());
        let rows = dataset.extract_generation_data(
            Some(&self.years),
            Some(&transactions),
            GroupKey::Code,
        )?;

        // A requested sub-fuel without a named fuel would be silently
        // absorbed into the residual, making it nonsensical.
        for code in &self.codes {
            if code != "EP" && code != "SP" && fuel_for_code(code) == Fuel::Other {
                tracing::warn!(
                    code = %code,
                    "requested production code has no named fuel; the residual rows will absorb it"
                );
            }
        }

        let mut by_year: BTreeMap<Year, Vec<AggregateRow>> = BTreeMap::new();
        for row in rows {
            by_year.entry(row.year).or_default().push(row);
        }

        let mut view = Vec::new();
        for (year, rows) in by_year {
            let ep_total = rows.iter().find(|r| r.key == "EP").map(|r| r.quantity);
            let sp_total = rows.iter().find(|r| r.key == "SP").map(|r| r.quantity);

            if ep_total.is_none() && sp_total.is_none() {
                return Err(EnergyError::selector_not_found("transaction", "EP"));
            }

            let denominator = ep_total.unwrap_or(0.0) + sp_total.unwrap_or(0.0);
            if denominator <= 0.0 {
                tracing::warn!(year, "EP + SP total is zero; % of total columns degrade to 0");
            }
            let pct = |quantity: f64| {
                if denominator > 0.0 {
                    100.0 * quantity / denominator
                } else {
                    0.0
                }
            };

            let mut named_main = 0.0;
            let mut named_auto = 0.0;
            for row in &rows {
                let fuel = fuel_for_code(&row.key);
                let purpose = purpose_for_code(&row.key);

                if fuel != Fuel::Total {
                    match purpose {
                        Purpose::MainActivity => named_main += row.quantity,
                        Purpose::Autoproducer => named_auto += row.quantity,
                        Purpose::Other => {}
                    }
                }

                view.push(ProductionRow {
                    year,
                    code: row.key.clone(),
                    quantity: row.quantity,
                    pct_of_total: pct(row.quantity),
                    fuel,
                    purpose,
                });
            }

            if let Some(ep) = ep_total {
                let residual = residual_or_clamp(year, Purpose::MainActivity, ep, named_main);
                view.push(ProductionRow {
                    year,
                    code: OTHER_MAIN_CODE.to_string(),
                    quantity: residual,
                    pct_of_total: pct(residual),
                    fuel: Fuel::Other,
                    purpose: Purpose::MainActivity,
                });
            }

            if let Some(sp) = sp_total {
                let residual = residual_or_clamp(year, Purpose::Autoproducer, sp, named_auto);
                view.push(ProductionRow {
                    year,
                    code: OTHER_AUTO_CODE.to_string(),
                    quantity: residual,
                    pct_of_total: pct(residual),
                    fuel: Fuel::Other,
                    purpose: Purpose::Autoproducer,
                });
            }
        }

        Ok(view)
    }
}

/// Residual for one purpose: total minus the named sub-fuels
///
/// A negative residual means the code-family list and the fuel table
/// have diverged, or the input is malformed; it is a data-integrity
/// condition, logged and clamped to zero rather than plotted.
fn residual_or_clamp(year: Year, purpose: Purpose, total: f64, named: f64) -> f64 {
    let residual = total - named;
    if residual < 0.0 {
        tracing::warn!(
            year,
            purpose = %purpose,
            residual,
            "named sub-fuel quantities exceed the purpose total; clamping residual to zero"
        );
        0.0
    } else {
        residual
    }
}

impl ViewPipeline for ProductionView {
    fn render(&self, dataset: &EnergyDataset, output: &mut dyn Write) -> Result<(), EnergyError> {
        let rows = self.build(dataset)?;
        write_production_csv(&rows, output)
    }
}
