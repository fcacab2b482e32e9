mod parser;
mod reference;

pub use reference::reference_records;

use crate::analytics::RawPropertyRecord;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read property list: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid property list data: {0}")]
    Csv(#[from] csv::Error),
    #[error("property list contains no records")]
    Empty,
    #[error("property id '{0}' appears more than once")]
    DuplicateId(String),
}

/// Loads raw property records from a CSV property list.
pub struct PropertyListImporter;

impl PropertyListImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawPropertyRecord>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawPropertyRecord>, DatasetError> {
        let records = parser::parse_records(reader)?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(DatasetError::DuplicateId(record.id.clone()));
            }
        }

        Ok(records)
    }
}
