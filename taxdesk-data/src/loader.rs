use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use taxdesk_core::{Client, ComplianceItem, Notice, Task};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading practice records.
#[derive(Debug, Error)]
pub enum RecordLoaderError {
    #[error("cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// `row` is the 1-based data row (the header is row 0).
    #[error("CSV parse error on row {row}: {message}")]
    CsvParse { row: usize, message: String },
}

/// Loader for practice records exported as CSV.
///
/// Each record kind lives in its own file with a header row:
///
/// | File | Columns |
/// |------|---------|
/// | clients | `id,name,pan,email` |
/// | tasks | `id,client_id,title,status,due_date` |
/// | compliance | `id,client_id,compliance_type,due_date,status` |
/// | notices | `id,client_id,subject,status` |
///
/// Dates are `YYYY-MM-DD`. Optional columns may be left empty.
pub struct RecordLoader;

impl RecordLoader {
    pub fn parse_clients<R: Read>(reader: R) -> Result<Vec<Client>, RecordLoaderError> {
        parse_records(reader)
    }

    pub fn parse_tasks<R: Read>(reader: R) -> Result<Vec<Task>, RecordLoaderError> {
        parse_records(reader)
    }

    pub fn parse_compliance_items<R: Read>(
        reader: R
    ) -> Result<Vec<ComplianceItem>, RecordLoaderError> {
        parse_records(reader)
    }

    pub fn parse_notices<R: Read>(reader: R) -> Result<Vec<Notice>, RecordLoaderError> {
        parse_records(reader)
    }

    pub fn load_clients(path: &Path) -> Result<Vec<Client>, RecordLoaderError> {
        Self::parse_clients(open(path)?)
    }

    pub fn load_tasks(path: &Path) -> Result<Vec<Task>, RecordLoaderError> {
        Self::parse_tasks(open(path)?)
    }

    pub fn load_compliance_items(path: &Path) -> Result<Vec<ComplianceItem>, RecordLoaderError> {
        Self::parse_compliance_items(open(path)?)
    }

    pub fn load_notices(path: &Path) -> Result<Vec<Notice>, RecordLoaderError> {
        Self::parse_notices(open(path)?)
    }
}

fn open(path: &Path) -> Result<File, RecordLoaderError> {
    File::open(path).map_err(|e| RecordLoaderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parse_records<T, R>(reader: R) -> Result<Vec<T>, RecordLoaderError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, result)| {
            result.map_err(|e| RecordLoaderError::CsvParse {
                row: idx + 1,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    debug!(count = records.len(), "parsed records from CSV");
    Ok(records)
}
