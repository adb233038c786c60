//! Consumption view: consumption by sector over a year range

use crate::core::EnergyDataset;
use crate::io::csv_format::write_consumption_csv;
use crate::types::codes::consumer_for_code;
use crate::types::view::ConsumptionRow;
use crate::types::{EnergyError, GroupKey, Selection, Year};
use crate::view::ViewPipeline;
use std::io::Write;

/// Consumption codes shown on the dashboard: industry, households,
/// services, agriculture and transport.
pub const DEFAULT_CONSUMPTION_CODES: &[&str] = &["121", "1231", "1235", "1232", "122"];

/// Builds the consumption view over an inclusive year range
pub struct ConsumptionView {
    from: Year,
    to: Year,
}

impl ConsumptionView {
    /// Create a consumption view over `[from, to]`
    ///
    /// The range is validated at the CLI boundary; `from <= to` is
    /// assumed here.
    pub fn new(from: Year, to: Year) -> Self {
        Self { from, to }
    }

    /// Build the display-ready rows
    ///
    /// Aggregates the fixed consumer code list per year and attaches
    /// the consumer sector label; a year may carry fewer than five
    /// sectors when the source lacks data for it, never more.
    ///
    /// # Errors
    ///
    /// `SelectorNotFound` if a year in the range or one of the fixed
    /// codes has no data at all.
    pub fn build(&self, dataset: &EnergyDataset) -> Result<Vec<ConsumptionRow>, EnergyError> {
        let years = Selection::Many((self.from..=self.to).collect());
        let transactions = Selection::Many(
            DEFAULT_CONSUMPTION_CODES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        );

        let rows = dataset.extract_consumption_data(
            Some(&years),
            Some(&transactions),
            GroupKey::Code,
        )?;

        Ok(rows
            .into_iter()
            .map(|row| ConsumptionRow {
                consumer: consumer_for_code(&row.key),
                year: row.year,
                code: row.key,
                quantity: row.quantity,
            })
            .collect())
    }
}

impl ViewPipeline for ConsumptionView {
    fn render(&self, dataset: &EnergyDataset, output: &mut dyn Write) -> Result<(), EnergyError> {
        let rows = self.build(dataset)?;
        write_consumption_csv(&rows, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Consumer, EnergyRecord};
    use std::collections::BTreeSet;

    fn record(code: &str, year: Year, quantity: f64) -> EnergyRecord {
        EnergyRecord {
            country: "World".to_string(),
            country_code: 1,
            code: code.to_string(),
            transaction: String::new(),
            year,
            quantity,
        }
    }

    /// Every year in [2008, 2018] with all five sectors present.
    fn full_range_dataset() -> EnergyDataset {
        let mut records = Vec::new();
        for year in 2008..=2018 {
            for code in DEFAULT_CONSUMPTION_CODES {
                records.push(record(code, year, 10.0));
            }
        }
        EnergyDataset::from_records(records)
    }

    #[test]
    fn test_full_range_yields_eleven_years_of_five_sectors() {
        let dataset = full_range_dataset();
        let rows = ConsumptionView::new(2008, 2018).build(&dataset).unwrap();

        let years: BTreeSet<Year> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years.len(), 11);

        for year in 2008..=2018 {
            let sectors: BTreeSet<Option<Consumer>> = rows
                .iter()
                .filter(|r| r.year == year)
                .map(|r| r.consumer)
                .collect();
            assert_eq!(sectors.len(), 5);
            assert!(!sectors.contains(&None));
        }
    }

    #[test]
    fn test_sparse_year_carries_fewer_sectors_never_more() {
        let mut records = vec![
            record("121", 2008, 10.0),
            record("1231", 2008, 5.0),
        ];
        // 2009 has all five so each fixed code exists somewhere.
        for code in DEFAULT_CONSUMPTION_CODES {
            records.push(record(code, 2009, 10.0));
        }
        let dataset = EnergyDataset::from_records(records);

        let rows = ConsumptionView::new(2008, 2009).build(&dataset).unwrap();

        assert_eq!(rows.iter().filter(|r| r.year == 2008).count(), 2);
        assert_eq!(rows.iter().filter(|r| r.year == 2009).count(), 5);
    }

    #[test]
    fn test_consumer_labels_attach_per_code() {
        let dataset = full_range_dataset();
        let rows = ConsumptionView::new(2008, 2008).build(&dataset).unwrap();

        let consumer_for = |code: &str| {
            rows.iter()
                .find(|r| r.code == code)
                .and_then(|r| r.consumer)
        };
        assert_eq!(consumer_for("121"), Some(Consumer::Industry));
        assert_eq!(consumer_for("1231"), Some(Consumer::Households));
        assert_eq!(consumer_for("122"), Some(Consumer::Transport));
        assert_eq!(consumer_for("1232"), Some(Consumer::Agriculture));
        assert_eq!(consumer_for("1235"), Some(Consumer::Services));
    }

    #[test]
    fn test_year_without_data_is_selector_not_found() {
        let dataset = full_range_dataset();
        let result = ConsumptionView::new(2018, 2019).build(&dataset);

        assert_eq!(
            result,
            Err(EnergyError::selector_not_found("year", "2019"))
        );
    }
}
