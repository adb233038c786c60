//! CSV format handling for the UN "Total Electricity" export
//!
//! This module centralizes all CSV format concerns, providing:
//! - Header resolution against the fixed export schema
//! - Pure per-row parsing into [`EnergyRecord`]
//! - View output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input schema
//!
//! The export carries the header columns `Commodity Code, Country or
//! Area Code, Country or Area, Commodity - Transaction Code,
//! Commodity - Transaction, Year, Unit, Quantity, Quantity
//! Footnotes`. The last two lines of the file are a footnote footer
//! introduced by a `footnoteSeqID` sentinel row and must be discarded
//! during parsing. All rows share one commodity (electricity) and one
//! unit (10^6 kWh); the commodity columns, unit and footnote flags
//! are dropped after validation.

use crate::types::view::{ConsumptionRow, ProductionRow, WorldRow};
use crate::types::{EnergyError, EnergyRecord};
use csv::StringRecord;
use std::io::Write;

/// Column holding the numeric UN country-or-area code
pub const COL_COUNTRY_CODE: &str = "Country or Area Code";
/// Column holding the country display name
pub const COL_COUNTRY: &str = "Country or Area";
/// Column holding the opaque transaction code
pub const COL_TRANSACTION_CODE: &str = "Commodity - Transaction Code";
/// Column holding the combined commodity-transaction label
pub const COL_TRANSACTION: &str = "Commodity - Transaction";
/// Column holding the year
pub const COL_YEAR: &str = "Year";
/// Column holding the unit of measure
pub const COL_UNIT: &str = "Unit";
/// Column holding the quantity
pub const COL_QUANTITY: &str = "Quantity";

/// First field of the row that introduces the footnote footer
pub const FOOTER_SENTINEL: &str = "footnoteSeqID";

/// Resolved column positions for the export schema
///
/// Built once from the header row; fails with `MissingColumn` if any
/// required column is absent so a schema mismatch surfaces before any
/// data row is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    country_code: usize,
    country: usize,
    code: usize,
    transaction: usize,
    year: usize,
    unit: usize,
    quantity: usize,
}

/// One parsed data row plus the unit it was reported in
///
/// The unit is validated (single value across the file) and stripped
/// by the loader; it never reaches the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub record: EnergyRecord,
    pub unit: String,
}

impl Header {
    /// Resolve column positions from the export header row
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` naming the first absent required
    /// column.
    pub fn from_record(headers: &StringRecord) -> Result<Self, EnergyError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| EnergyError::missing_column(name))
        };

        Ok(Header {
            country_code: find(COL_COUNTRY_CODE)?,
            country: find(COL_COUNTRY)?,
            code: find(COL_TRANSACTION_CODE)?,
            transaction: find(COL_TRANSACTION)?,
            year: find(COL_YEAR)?,
            unit: find(COL_UNIT)?,
            quantity: find(COL_QUANTITY)?,
        })
    }

    /// Parse one data row into an [`EnergyRecord`] plus its unit
    ///
    /// # Errors
    ///
    /// Returns `Parse` with the line number for short rows and
    /// non-numeric country code, year or quantity fields.
    pub fn parse_row(&self, record: &StringRecord, line: u64) -> Result<ParsedRow, EnergyError> {
        let field = |index: usize| {
            record.get(index).ok_or_else(|| {
                EnergyError::parse(
                    Some(line),
                    format!(
                        "row has {} fields, expected at least {}",
                        record.len(),
                        index + 1
                    ),
                )
            })
        };

        let country_code = field(self.country_code)?;
        let country_code = country_code.parse::<i32>().map_err(|_| {
            EnergyError::parse(
                Some(line),
                format!("non-numeric country code '{}'", country_code),
            )
        })?;

        let year = field(self.year)?;
        let year = year
            .parse::<i32>()
            .map_err(|_| EnergyError::parse(Some(line), format!("non-numeric year '{}'", year)))?;

        let quantity = field(self.quantity)?;
        let quantity = quantity.parse::<f64>().map_err(|_| {
            EnergyError::parse(Some(line), format!("non-numeric quantity '{}'", quantity))
        })?;

        Ok(ParsedRow {
            record: EnergyRecord {
                country: field(self.country)?.to_string(),
                country_code,
                code: field(self.code)?.to_string(),
                transaction: transaction_label(field(self.transaction)?),
                year,
                quantity,
            },
            unit: field(self.unit)?.to_string(),
        })
    }
}

/// Derive the transaction label from the combined field
///
/// The export combines commodity and transaction into one field
/// (e.g. "Electricity - total net production"); the label is the
/// suffix after the last `" - "` delimiter.
pub fn transaction_label(combined: &str) -> String {
    combined.rsplit(" - ").next().unwrap_or("").trim().to_string()
}

/// Write production view rows as CSV
///
/// Columns: `Year, Transaction Code, Quantity (1e6 kW/h), % of total,
/// Fuel, Purpose`. Rows are written in the order given (the builder
/// orders them deterministically).
pub fn write_production_csv(
    rows: &[ProductionRow],
    output: &mut dyn Write,
) -> Result<(), EnergyError> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write consumption view rows as CSV
///
/// Columns: `Year, Transaction Code, Quantity (1e6 kW/h), Consumer`.
/// An unmapped consumer serializes as an empty field.
pub fn write_consumption_csv(
    rows: &[ConsumptionRow],
    output: &mut dyn Write,
) -> Result<(), EnergyError> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write world view rows as CSV
///
/// Columns: `Country or Area, ISO-3, Year, Transaction Code,
/// Quantity (1e6 kW/h)`. An unresolved country serializes with an
/// empty ISO-3 field.
pub fn write_world_csv(rows: &[WorldRow], output: &mut dyn Write) -> Result<(), EnergyError> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Consumer, Fuel, Purpose};
    use rstest::rstest;

    const EXPORT_HEADER: [&str; 9] = [
        "Commodity Code",
        "Country or Area Code",
        "Country or Area",
        "Commodity - Transaction Code",
        "Commodity - Transaction",
        "Year",
        "Unit",
        "Quantity",
        "Quantity Footnotes",
    ];

    fn export_header() -> Header {
        Header::from_record(&StringRecord::from(EXPORT_HEADER.to_vec())).unwrap()
    }

    #[test]
    fn test_header_resolves_export_schema() {
        assert!(Header::from_record(&StringRecord::from(EXPORT_HEADER.to_vec())).is_ok());
    }

    #[rstest]
    #[case::no_quantity("Quantity")]
    #[case::no_year("Year")]
    #[case::no_unit("Unit")]
    #[case::no_code("Commodity - Transaction Code")]
    fn test_header_missing_column(#[case] dropped: &str) {
        let columns: Vec<&str> = EXPORT_HEADER
            .iter()
            .copied()
            .filter(|c| *c != dropped)
            .collect();

        let result = Header::from_record(&StringRecord::from(columns));
        assert_eq!(result, Err(EnergyError::missing_column(dropped)));
    }

    #[test]
    fn test_parse_row_valid() {
        let header = export_header();
        let record = StringRecord::from(vec![
            "EL",
            "840",
            "United States",
            "015C",
            "Electricity - total production, main activity",
            "2018",
            "Kilowatt-hours, million",
            "123.5",
            "",
        ]);

        let parsed = header.parse_row(&record, 2).unwrap();
        assert_eq!(parsed.unit, "Kilowatt-hours, million");
        assert_eq!(parsed.record.country, "United States");
        assert_eq!(parsed.record.country_code, 840);
        assert_eq!(parsed.record.code, "015C");
        assert_eq!(parsed.record.transaction, "total production, main activity");
        assert_eq!(parsed.record.year, 2018);
        assert_eq!(parsed.record.quantity, 123.5);
    }

    #[rstest]
    #[case::bad_quantity("840", "2018", "n/a", "non-numeric quantity 'n/a'")]
    #[case::empty_quantity("840", "2018", "", "non-numeric quantity ''")]
    #[case::bad_year("840", "20x8", "1.0", "non-numeric year '20x8'")]
    #[case::bad_country_code("US", "2018", "1.0", "non-numeric country code 'US'")]
    fn test_parse_row_non_numeric_fields(
        #[case] country_code: &str,
        #[case] year: &str,
        #[case] quantity: &str,
        #[case] expected_message: &str,
    ) {
        let header = export_header();
        let record = StringRecord::from(vec![
            "EL",
            country_code,
            "United States",
            "EP",
            "Electricity - total production",
            year,
            "Kilowatt-hours, million",
            quantity,
            "",
        ]);

        let result = header.parse_row(&record, 7);
        assert_eq!(result, Err(EnergyError::parse(Some(7), expected_message)));
    }

    #[test]
    fn test_parse_row_short_row() {
        let header = export_header();
        let record = StringRecord::from(vec!["EL", "840"]);

        let result = header.parse_row(&record, 3);
        assert!(matches!(result, Err(EnergyError::Parse { line: Some(3), .. })));
    }

    #[rstest]
    #[case::two_parts("Electricity - net installed capacity", "net installed capacity")]
    #[case::nested_delimiters(
        "Electricity - Gross production - hydro",
        "hydro"
    )]
    #[case::no_delimiter("total production", "total production")]
    #[case::empty("", "")]
    fn test_transaction_label(#[case] combined: &str, #[case] expected: &str) {
        assert_eq!(transaction_label(combined), expected);
    }

    #[test]
    fn test_write_production_csv() {
        let rows = vec![ProductionRow {
            year: 2018,
            code: "015C".to_string(),
            quantity: 60.0,
            pct_of_total: 30.0,
            fuel: Fuel::CombustibleFuels,
            purpose: Purpose::MainActivity,
        }];

        let mut output = Vec::new();
        write_production_csv(&rows, &mut output).unwrap();

        let expected = "Year,Transaction Code,Quantity (1e6 kW/h),% of total,Fuel,Purpose\n\
                        2018,015C,60.0,30.0,Combustible Fuels,Main activity\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_consumption_csv_unmapped_consumer_is_empty() {
        let rows = vec![
            ConsumptionRow {
                year: 2010,
                code: "121".to_string(),
                quantity: 14.0,
                consumer: Some(Consumer::Industry),
            },
            ConsumptionRow {
                year: 2010,
                code: "1299".to_string(),
                quantity: 2.0,
                consumer: None,
            },
        ];

        let mut output = Vec::new();
        write_consumption_csv(&rows, &mut output).unwrap();

        let expected = "Year,Transaction Code,Quantity (1e6 kW/h),Consumer\n\
                        2010,121,14.0,Industry\n\
                        2010,1299,2.0,\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_world_csv_unresolved_country_is_empty() {
        let rows = vec![
            WorldRow {
                country: "France".to_string(),
                iso3: Some("FRA".to_string()),
                year: 2018,
                code: "EP".to_string(),
                quantity: 60.0,
            },
            WorldRow {
                country: "Atlantis".to_string(),
                iso3: None,
                year: 2018,
                code: "EP".to_string(),
                quantity: 5.0,
            },
        ];

        let mut output = Vec::new();
        write_world_csv(&rows, &mut output).unwrap();

        let expected = "Country or Area,ISO-3,Year,Transaction Code,Quantity (1e6 kW/h)\n\
                        France,FRA,2018,EP,60.0\n\
                        Atlantis,,2018,EP,5.0\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
