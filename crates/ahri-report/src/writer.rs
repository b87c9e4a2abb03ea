//! CSV writer for the certified-matches list.

use std::path::{Path, PathBuf};

use thiserror::Error;

use ahri_model::OutputRecord;

/// The fixed output header, exact text and column order.
pub const OUTPUT_HEADER: [&str; 8] = [
    "AHRI Number",
    "Brand",
    "Orientation",
    "Type of System",
    "Outdoor Unit",
    "Furnace",
    "Evaporator Coil",
    "Air Handler",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Write the match list to `path`, header first, one row per record, in
/// the order the records were produced.
pub fn write_matches_csv(path: &Path, records: &[OutputRecord]) -> Result<(), ReportError> {
    let wrap = |source: csv::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    writer.write_record(OUTPUT_HEADER).map_err(wrap)?;
    for record in records {
        writer.write_record(row(record)).map_err(wrap)?;
    }
    writer
        .flush()
        .map_err(|source| wrap(csv::Error::from(source)))?;
    Ok(())
}

fn row(record: &OutputRecord) -> [&str; 8] {
    [
        &record.ahri_number,
        &record.brand,
        &record.orientation,
        &record.system_type,
        &record.outdoor_unit,
        &record.furnace,
        &record.evaporator_coil,
        &record.air_handler,
    ]
}
