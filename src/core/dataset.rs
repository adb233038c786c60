//! In-memory electricity dataset and its filtered/aggregated queries
//!
//! The dataset is built once from an export file and is read-only for
//! the remainder of the process; queries never mutate it. There is no
//! module-level singleton: the dataset is constructed explicitly and
//! passed by reference to the view builders.

use crate::io::reader::DatasetReader;
use crate::types::codes::{classify, CodeFamily};
use crate::types::{EnergyError, EnergyRecord, GroupKey, Selection, Year};
use std::collections::BTreeMap;
use std::path::Path;

/// One aggregated (year, key) quantity
///
/// Produced by the family extraction queries; the key is either a
/// transaction code or a transaction label depending on the
/// requested [`GroupKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub year: Year,
    pub key: String,
    /// Quantity in 10^6 kWh summed across countries
    pub quantity: f64,
}

/// One country's quantity for a fixed (year, transaction code) pair
#[derive(Debug, Clone, PartialEq)]
pub struct CountryQuantity {
    pub country: String,
    pub quantity: f64,
}

/// The full "Total Electricity" dataset held in memory
///
/// Invariant: after aggregation there is exactly one quantity per
/// (year, transaction code, country); the extraction queries fold the
/// country dimension away by summation.
#[derive(Debug, Clone)]
pub struct EnergyDataset {
    records: Vec<EnergyRecord>,
}

impl EnergyDataset {
    /// Load, clean and normalize an export file
    ///
    /// # Errors
    ///
    /// Propagates any reader error: file I/O, schema mismatch,
    /// malformed rows, mixed units. A single bad row fails the whole
    /// load; the dataset is never partially constructed.
    pub fn from_path(path: &Path) -> Result<Self, EnergyError> {
        let reader = DatasetReader::new(path)?;
        let mut records = Vec::new();
        for result in reader {
            records.push(result?);
        }

        tracing::info!(rows = records.len(), path = %path.display(), "loaded electricity dataset");
        Ok(Self { records })
    }

    /// Build a dataset from already-cleaned records
    ///
    /// Intended for tests and synthetic data.
    pub fn from_records(records: Vec<EnergyRecord>) -> Self {
        Self { records }
    }

    /// Number of rows in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All cleaned rows, in file order
    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    /// Extract aggregated electricity production data
    ///
    /// Filters rows whose code classifies as production (`01*`, `EP`,
    /// `SP`), groups by (year, key) summing quantities across
    /// countries, then restricts the result to the requested years
    /// and transactions if given.
    ///
    /// # Errors
    ///
    /// `SelectorNotFound` if a requested year or transaction has no
    /// matching rows within the restriction, so a transaction present
    /// only in unselected years still fails. This is deliberate: a
    /// silent empty table would make downstream percentage
    /// computations divide by zero.
    pub fn extract_generation_data(
        &self,
        years: Option<&Selection<Year>>,
        transactions: Option<&Selection<String>>,
        key: GroupKey,
    ) -> Result<Vec<AggregateRow>, EnergyError> {
        self.extract_family(CodeFamily::Production, years, transactions, key)
    }

    /// Extract aggregated electricity consumption data
    ///
    /// Identical contract to [`Self::extract_generation_data`], over
    /// the consumption family (`12*`) instead.
    pub fn extract_consumption_data(
        &self,
        years: Option<&Selection<Year>>,
        transactions: Option<&Selection<String>>,
        key: GroupKey,
    ) -> Result<Vec<AggregateRow>, EnergyError> {
        self.extract_family(CodeFamily::Consumption, years, transactions, key)
    }

    fn extract_family(
        &self,
        family: CodeFamily,
        years: Option<&Selection<Year>>,
        transactions: Option<&Selection<String>>,
        key: GroupKey,
    ) -> Result<Vec<AggregateRow>, EnergyError> {
        // BTreeMap keeps (year, key) ordering deterministic for output.
        let mut groups: BTreeMap<(Year, String), f64> = BTreeMap::new();
        for record in &self.records {
            if classify(&record.code) != family {
                continue;
            }

            let group_key = match key {
                GroupKey::Code => record.code.clone(),
                GroupKey::Label => record.transaction.clone(),
            };
            *groups.entry((record.year, group_key)).or_insert(0.0) += record.quantity;
        }

        let year_filter = years.map(Selection::values);
        let transaction_filter = transactions.map(Selection::values);

        let restricted: BTreeMap<(Year, String), f64> = groups
            .into_iter()
            .filter(|((year, k), _)| {
                year_filter.as_ref().map_or(true, |ys| ys.contains(year))
                    && transaction_filter.as_ref().map_or(true, |ts| ts.contains(k))
            })
            .collect();

        // Validate each requested key against the restricted result,
        // not the whole family: a transaction with rows only in other
        // years must fail, never silently drop out of the table.
        if let Some(ys) = &year_filter {
            for year in ys {
                if !restricted.keys().any(|(y, _)| y == year) {
                    return Err(EnergyError::selector_not_found("year", year.to_string()));
                }
            }
        }

        if let Some(ts) = &transaction_filter {
            for transaction in ts {
                if !restricted.keys().any(|(_, k)| k == transaction) {
                    return Err(EnergyError::selector_not_found(
                        "transaction",
                        transaction.as_str(),
                    ));
                }
            }
        }

        let rows = restricted
            .into_iter()
            .map(|((year, k), quantity)| AggregateRow {
                year,
                key: k,
                quantity,
            })
            .collect();

        Ok(rows)
    }

    /// Per-country quantities for one (year, transaction code) pair
    ///
    /// The country dimension is preserved; quantities are summed per
    /// country in case the source carries duplicate rows.
    ///
    /// # Errors
    ///
    /// `SelectorNotFound` if the pair has no rows at all; an absent
    /// selection must fail, not succeed emptily.
    pub fn world_slice(&self, year: Year, code: &str) -> Result<Vec<CountryQuantity>, EnergyError> {
        let mut groups: BTreeMap<String, f64> = BTreeMap::new();
        for record in &self.records {
            if record.year == year && record.code == code {
                *groups.entry(record.country.clone()).or_insert(0.0) += record.quantity;
            }
        }

        if groups.is_empty() {
            return Err(EnergyError::selector_not_found(
                "year/transaction pair",
                format!("{year}/{code}"),
            ));
        }

        Ok(groups
            .into_iter()
            .map(|(country, quantity)| CountryQuantity { country, quantity })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(country: &str, code: &str, label: &str, year: Year, quantity: f64) -> EnergyRecord {
        EnergyRecord {
            country: country.to_string(),
            country_code: 0,
            code: code.to_string(),
            transaction: label.to_string(),
            year,
            quantity,
        }
    }

    fn sample_dataset() -> EnergyDataset {
        EnergyDataset::from_records(vec![
            record("United States", "EP", "total production, main activity", 2018, 100.0),
            record("France", "EP", "total production, main activity", 2018, 60.0),
            record("United States", "015C", "combustible fuels, main activity", 2018, 40.0),
            record("France", "015C", "combustible fuels, main activity", 2018, 20.0),
            record("United States", "SP", "total production, autoproducer", 2018, 20.0),
            record("United States", "EP", "total production, main activity", 2017, 90.0),
            // Consumption family
            record("United States", "121", "consumption by industry", 2018, 30.0),
            record("France", "121", "consumption by industry", 2018, 10.0),
            record("United States", "1231", "consumption by households", 2018, 15.0),
            // Neither family; must never leak into either query
            record("United States", "03", "imports", 2018, 7.0),
        ])
    }

    #[test]
    fn test_generation_sums_across_countries() {
        let dataset = sample_dataset();
        let rows = dataset
            .extract_generation_data(None, None, GroupKey::Code)
            .unwrap();

        assert_eq!(
            rows,
            vec![
                AggregateRow { year: 2017, key: "EP".to_string(), quantity: 90.0 },
                AggregateRow { year: 2018, key: "015C".to_string(), quantity: 60.0 },
                AggregateRow { year: 2018, key: "EP".to_string(), quantity: 160.0 },
                AggregateRow { year: 2018, key: "SP".to_string(), quantity: 20.0 },
            ]
        );
    }

    #[test]
    fn test_generation_excludes_other_families() {
        let dataset = sample_dataset();
        let rows = dataset
            .extract_generation_data(None, None, GroupKey::Code)
            .unwrap();

        assert!(rows.iter().all(|r| r.key != "121" && r.key != "03"));
    }

    #[test]
    fn test_generation_filters_by_year_and_transaction() {
        let dataset = sample_dataset();
        let years = Selection::One(2018);
        let transactions = Selection::Many(vec!["EP".to_string(), "SP".to_string()]);

        let rows = dataset
            .extract_generation_data(Some(&years), Some(&transactions), GroupKey::Code)
            .unwrap();

        assert_eq!(
            rows,
            vec![
                AggregateRow { year: 2018, key: "EP".to_string(), quantity: 160.0 },
                AggregateRow { year: 2018, key: "SP".to_string(), quantity: 20.0 },
            ]
        );
    }

    #[test]
    fn test_generation_groups_by_label() {
        let dataset = sample_dataset();
        let rows = dataset
            .extract_generation_data(Some(&Selection::One(2018)), None, GroupKey::Label)
            .unwrap();

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "combustible fuels, main activity",
                "total production, autoproducer",
                "total production, main activity",
            ]
        );
    }

    #[rstest]
    #[case::missing_year(Some(Selection::One(2031)), None, "year", "2031")]
    #[case::missing_transaction(
        None,
        Some(Selection::One("015N".to_string())),
        "transaction",
        "015N"
    )]
    fn test_generation_selector_not_found(
        #[case] years: Option<Selection<Year>>,
        #[case] transactions: Option<Selection<String>>,
        #[case] kind: &str,
        #[case] value: &str,
    ) {
        let dataset = sample_dataset();
        let result = dataset.extract_generation_data(
            years.as_ref(),
            transactions.as_ref(),
            GroupKey::Code,
        );

        assert_eq!(result, Err(EnergyError::selector_not_found(kind, value)));
    }

    #[test]
    fn test_generation_transaction_outside_selected_years_is_an_error() {
        let dataset = EnergyDataset::from_records(vec![
            record("France", "EP", "total production, main activity", 2018, 100.0),
            record("France", "015C", "combustible fuels, main activity", 2017, 40.0),
        ]);
        let years = Selection::One(2018);
        let transactions = Selection::Many(vec!["EP".to_string(), "015C".to_string()]);

        let result =
            dataset.extract_generation_data(Some(&years), Some(&transactions), GroupKey::Code);

        assert_eq!(
            result,
            Err(EnergyError::selector_not_found("transaction", "015C"))
        );
    }

    #[test]
    fn test_generation_year_without_selected_transactions_is_an_error() {
        let dataset = EnergyDataset::from_records(vec![
            record("France", "EP", "total production, main activity", 2018, 100.0),
            record("France", "015C", "combustible fuels, main activity", 2017, 40.0),
        ]);
        let years = Selection::Many(vec![2017, 2018]);
        let transactions = Selection::One("EP".to_string());

        let result =
            dataset.extract_generation_data(Some(&years), Some(&transactions), GroupKey::Code);

        assert_eq!(result, Err(EnergyError::selector_not_found("year", "2017")));
    }

    #[test]
    fn test_consumption_filters_family() {
        let dataset = sample_dataset();
        let rows = dataset
            .extract_consumption_data(None, None, GroupKey::Code)
            .unwrap();

        assert_eq!(
            rows,
            vec![
                AggregateRow { year: 2018, key: "121".to_string(), quantity: 40.0 },
                AggregateRow { year: 2018, key: "1231".to_string(), quantity: 15.0 },
            ]
        );
    }

    #[test]
    fn test_world_slice_preserves_countries() {
        let dataset = sample_dataset();
        let rows = dataset.world_slice(2018, "EP").unwrap();

        assert_eq!(
            rows,
            vec![
                CountryQuantity { country: "France".to_string(), quantity: 60.0 },
                CountryQuantity { country: "United States".to_string(), quantity: 100.0 },
            ]
        );
    }

    #[test]
    fn test_world_slice_absent_pair_is_an_error() {
        let dataset = sample_dataset();
        let result = dataset.world_slice(2018, "015N");

        assert_eq!(
            result,
            Err(EnergyError::selector_not_found(
                "year/transaction pair",
                "2018/015N"
            ))
        );
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = EnergyDataset::from_records(vec![]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);

        let rows = dataset
            .extract_generation_data(None, None, GroupKey::Code)
            .unwrap();
        assert!(rows.is_empty());
    }
}
