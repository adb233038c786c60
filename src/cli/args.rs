use crate::types::{EnergyError, Selection};
use crate::view::{ViewRequest, DEFAULT_PRODUCTION_CODES};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build chart-ready tables from the UN "Total Electricity" export
#[derive(Parser, Debug)]
#[command(name = "electricity-views")]
#[command(about = "Build chart-ready tables from the UN Total Electricity export", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path (UNdata "Total Electricity" export)
    #[arg(value_name = "INPUT", help = "Path to the UN export CSV file")]
    pub input_file: PathBuf,

    /// Which view to build
    #[arg(
        long = "view",
        value_name = "VIEW",
        default_value = "production",
        help = "View to build: 'production', 'consumption' or 'world'"
    )]
    pub view: ViewKind,

    /// Year to display (production and world views)
    #[arg(
        long = "year",
        value_name = "YEAR",
        help = "Year to display (production and world views)"
    )]
    pub year: Option<i32>,

    /// Start of the year range (consumption view)
    #[arg(
        long = "from",
        value_name = "YEAR",
        help = "First year of the range (consumption view)"
    )]
    pub from: Option<i32>,

    /// End of the year range (consumption view)
    #[arg(
        long = "to",
        value_name = "YEAR",
        help = "Last year of the range, inclusive (consumption view)"
    )]
    pub to: Option<i32>,

    /// Transaction code to map (world view)
    #[arg(
        long = "transaction",
        value_name = "CODE",
        help = "Transaction code to map across countries (world view)"
    )]
    pub transaction: Option<String>,

    /// Production transaction codes to include
    #[arg(
        long = "codes",
        value_name = "CODES",
        value_delimiter = ',',
        help = "Comma-separated production codes (default: the dashboard list)"
    )]
    pub codes: Option<Vec<String>>,
}

/// Available views
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Production,
    Consumption,
    World,
}

impl CliArgs {
    /// Validate the argument combination into a typed view request
    ///
    /// Each view needs a different subset of the optional arguments;
    /// this resolves them once so invalid combinations are rejected
    /// before the input file is opened.
    ///
    /// # Errors
    ///
    /// `InvalidArguments` naming the missing or inconsistent option.
    pub fn to_view_request(&self) -> Result<ViewRequest, EnergyError> {
        match self.view {
            ViewKind::Production => {
                let year = self.year.ok_or_else(|| {
                    EnergyError::invalid_arguments("the production view requires --year")
                })?;
                let codes = self.codes.clone().unwrap_or_else(|| {
                    DEFAULT_PRODUCTION_CODES
                        .iter()
                        .map(|c| (*c).to_string())
                        .collect()
                });
                Ok(ViewRequest::Production {
                    years: Selection::One(year),
                    codes,
                })
            }
            ViewKind::Consumption => {
                let from = self.from.ok_or_else(|| {
                    EnergyError::invalid_arguments("the consumption view requires --from and --to")
                })?;
                let to = self.to.ok_or_else(|| {
                    EnergyError::invalid_arguments("the consumption view requires --from and --to")
                })?;
                if from > to {
                    return Err(EnergyError::invalid_arguments(format!(
                        "--from {from} is after --to {to}"
                    )));
                }
                Ok(ViewRequest::Consumption { from, to })
            }
            ViewKind::World => {
                let year = self.year.ok_or_else(|| {
                    EnergyError::invalid_arguments("the world view requires --year")
                })?;
                let code = self.transaction.clone().ok_or_else(|| {
                    EnergyError::invalid_arguments("the world view requires --transaction")
                })?;
                Ok(ViewRequest::World { year, code })
            }
        }
    }
}
