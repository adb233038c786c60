//! View-building pipelines
//!
//! This module defines the pipeline abstraction for turning the
//! in-memory dataset into a display-ready table. Each view
//! (production, consumption, world) is a separate implementation
//! selected at runtime by a factory, so the binary can dispatch on a
//! CLI flag and the presentation layer can consume any view through
//! one interface.

use crate::core::EnergyDataset;
use crate::types::{EnergyError, Selection, Year};
use std::io::Write;

pub mod consumption;
pub mod production;
pub mod world;

pub use consumption::{ConsumptionView, DEFAULT_CONSUMPTION_CODES};
pub use production::{ProductionView, DEFAULT_PRODUCTION_CODES};
pub use world::WorldView;

/// A complete view-building pipeline
///
/// Implementations filter and reshape the read-only dataset and write
/// the resulting table as CSV. Each render is one synchronous pass;
/// the dataset is never mutated.
pub trait ViewPipeline {
    /// Build the view from the dataset and write it to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if a requested selector has no data or the
    /// output cannot be written. Per-row degradations (unresolvable
    /// country names, clamped residuals) are logged, not propagated.
    fn render(&self, dataset: &EnergyDataset, output: &mut dyn Write) -> Result<(), EnergyError>;
}

/// A validated view request
///
/// Produced once at the CLI boundary; carries everything a pipeline
/// needs so invalid combinations are rejected before the input file
/// is even opened.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    /// Generation by fuel and purpose for the given years and codes
    Production {
        years: Selection<Year>,
        codes: Vec<String>,
    },

    /// Consumption by sector over an inclusive year range
    Consumption { from: Year, to: Year },

    /// One (year, transaction code) pair across all countries
    World { year: Year, code: String },
}

/// Create the pipeline for a validated view request
pub fn create_view(request: ViewRequest) -> Box<dyn ViewPipeline> {
    match request {
        ViewRequest::Production { years, codes } => Box::new(ProductionView::new(years, codes)),
        ViewRequest::Consumption { from, to } => Box::new(ConsumptionView::new(from, to)),
        ViewRequest::World { year, code } => Box::new(WorldView::new(year, code)),
    }
}
