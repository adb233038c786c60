//! World view: one (year, transaction code) pair across all countries
//!
//! Produces the per-country table behind the choropleth: each row is
//! one country's quantity plus its ISO-3166 alpha-3 code. A missing
//! (year, code) pair is an error; an unresolvable country name only
//! nulls that row's code.

use crate::core::country::{CachedResolver, CountryResolver, StaticCountryResolver};
use crate::core::EnergyDataset;
use crate::io::csv_format::write_world_csv;
use crate::types::view::WorldRow;
use crate::types::{EnergyError, Year};
use crate::view::ViewPipeline;
use std::io::Write;

/// Builds the per-country world view
pub struct WorldView {
    year: Year,
    code: String,
    resolver: Box<dyn CountryResolver>,
}

impl WorldView {
    /// Create a world view using the built-in country table
    pub fn new(year: Year, code: String) -> Self {
        Self::with_resolver(
            year,
            code,
            Box::new(CachedResolver::new(StaticCountryResolver::new())),
        )
    }

    /// Create a world view with a custom resolver
    pub fn with_resolver(year: Year, code: String, resolver: Box<dyn CountryResolver>) -> Self {
        Self {
            year,
            code,
            resolver,
        }
    }

    /// Build the display-ready rows, ordered by country name
    ///
    /// # Errors
    ///
    /// `SelectorNotFound` if the (year, code) pair is absent from the
    /// dataset. Checked before any country resolution so the two
    /// failure modes stay distinct.
    pub fn build(&self, dataset: &EnergyDataset) -> Result<Vec<WorldRow>, EnergyError> {
        let slice = dataset.world_slice(self.year, &self.code)?;

        Ok(slice
            .into_iter()
            .map(|entry| {
                let iso3 = self.resolver.resolve(&entry.country);
                if iso3.is_none() {
                    tracing::warn!(
                        country = %entry.country,
                        "country name did not resolve to an ISO-3 code"
                    );
                }
                WorldRow {
                    country: entry.country,
                    iso3,
                    year: self.year,
                    code: self.code.clone(),
                    quantity: entry.quantity,
                }
            })
            .collect())
    }
}

impl ViewPipeline for WorldView {
    fn render(&self, dataset: &EnergyDataset, output: &mut dyn Write) -> Result<(), EnergyError> {
        let rows = self.build(dataset)?;
        write_world_csv(&rows, output)
    }
}
