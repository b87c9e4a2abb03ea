//! AHRI certification export reader.

use std::path::Path;

use tracing::warn;

use ahri_model::CertificationRecord;

use crate::error::{IngestError, Result};
use crate::header::HeaderIndex;

/// Required columns of the certification export.
pub const CERTIFICATION_COLUMNS: [&str; 4] =
    ["AHRI Number", "Outdoor Unit", "Indoor Unit", "Furnace"];

/// Read the AHRI certification export.
///
/// Model fields are kept raw: wildcard markers are expanded later, when the
/// certification index is built. Rows with a field-count mismatch are
/// skipped with a warning.
pub fn read_certification_records(path: &Path) -> Result<Vec<CertificationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| IngestError::from_open(path, error))?;

    let headers = reader
        .headers()
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .clone();
    let index = HeaderIndex::from_headers(&headers);
    let [ahri_col, outdoor_col, indoor_col, furnace_col] = CERTIFICATION_COLUMNS;
    let ahri_idx = index.required(ahri_col, path)?;
    let outdoor_idx = index.required(outdoor_col, path)?;
    let indoor_idx = index.required(indoor_col, path)?;
    let furnace_idx = index.required(furnace_col, path)?;

    let mut records = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let line = row + 2;
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(path = %path.display(), line, %error, "skipping malformed certification row");
                continue;
            }
        };

        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        records.push(CertificationRecord {
            ahri_number: field(ahri_idx),
            outdoor_model: field(outdoor_idx),
            indoor_model: field(indoor_idx),
            furnace_model: field(furnace_idx),
        });
    }

    Ok(records)
}
