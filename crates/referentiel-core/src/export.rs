//! CSV export
//!
//! Builds the CSV document for a set of records and writes it as a file
//! named `{label}_{YYYY-MM-DD}.csv`. Fields are joined with `,` and rows
//! with `\n`; values are not quoted, so embedded commas or newlines in a
//! name or description end up verbatim in the output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::catalogue::{Catalogue, Record};
use crate::error::Result;

/// Label of an export restricted to the selected rows
pub const SELECTION_LABEL: &str = "competences_selectionnees";

/// Label of an export of the whole list
pub const FULL_LABEL: &str = "competences";

/// A CSV document ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// File name, `{label}_{YYYY-MM-DD}.csv`
    pub file_name: String,
    /// CSV text
    pub contents: String,
    /// Number of data rows
    pub count: usize,
}

impl CsvExport {
    /// Build an export of `records` dated today (UTC)
    pub fn new<K: Catalogue>(label: &str, records: &[K::Record]) -> Self {
        Self::dated::<K>(label, records, Utc::now().date_naive())
    }

    /// Build an export of `records` for the given date
    pub fn dated<K: Catalogue>(label: &str, records: &[K::Record], date: NaiveDate) -> Self {
        Self {
            file_name: file_name(label, date),
            contents: to_csv::<K>(records),
            count: records.len(),
        }
    }

    /// Write the document into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents)?;
        info!(path = %path.display(), rows = self.count, "CSV export written");
        Ok(path)
    }
}

/// Render records as CSV with the catalogue's fixed header
pub fn to_csv<K: Catalogue>(records: &[K::Record]) -> String {
    std::iter::once(K::CSV_HEADER.join(","))
        .chain(records.iter().map(|record| record.csv_fields().join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export file name for a label and date
pub fn file_name(label: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", label, date.format("%Y-%m-%d"))
}
