//! Streaming reader for the UN electricity export
//!
//! Provides an iterator over cleaned [`EnergyRecord`]s from an export
//! file, delegating format concerns to the `csv_format` module.
//!
//! # Design
//!
//! The reader resolves the header once (failing fast on a schema
//! mismatch), then yields one `Result<EnergyRecord, EnergyError>` per
//! data row. Iteration stops at the footnote footer sentinel, so the
//! two-line footer never reaches the dataset. The single-unit
//! assumption is enforced while streaming: the first row's unit
//! becomes the expected value and any later deviation is a
//! `MixedUnits` error.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, schema mismatch) are returned from
//!   `new()`
//! - Individual row errors are yielded as `Err` variants with line
//!   numbers for debugging

use crate::io::csv_format::{Header, FOOTER_SENTINEL};
use crate::types::{EnergyError, EnergyRecord};
use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over the export's data rows
///
/// Yields `Result<EnergyRecord, EnergyError>` per row; stops at the
/// footnote footer.
pub struct DatasetReader {
    records: StringRecordsIntoIter<File>,
    header: Header,
    unit: Option<String>,
    done: bool,
}

impl DatasetReader {
    /// Open an export file and resolve its header
    ///
    /// The CSV reader trims whitespace from all fields and tolerates
    /// the shorter footer rows (field-count validation happens per
    /// row against the resolved header).
    ///
    /// # Errors
    ///
    /// - `FileNotFound` / `Io` if the file cannot be opened
    /// - `MissingColumn` if a required column is absent
    pub fn new(path: &Path) -> Result<Self, EnergyError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                EnergyError::file_not_found(&path.display().to_string())
            } else {
                EnergyError::from(e)
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        let header = Header::from_record(reader.headers()?)?;

        Ok(Self {
            records: reader.into_records(),
            header,
            unit: None,
            done: false,
        })
    }
}

impl Iterator for DatasetReader {
    type Item = Result<EnergyRecord, EnergyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.records.next()? {
            Ok(record) => {
                if record.get(0) == Some(FOOTER_SENTINEL) {
                    // Footnote footer begins here; the remaining lines
                    // are not data.
                    self.done = true;
                    return None;
                }

                let line = record.position().map_or(0, |pos| pos.line());
                match self.header.parse_row(&record, line) {
                    Ok(parsed) => match &self.unit {
                        Some(expected) if *expected != parsed.unit => {
                            self.done = true;
                            Some(Err(EnergyError::mixed_units(expected.clone(), parsed.unit)))
                        }
                        _ => {
                            self.unit = Some(parsed.unit);
                            Some(Ok(parsed.record))
                        }
                    },
                    Err(e) => Some(Err(e)),
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
