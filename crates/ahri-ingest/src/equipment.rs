//! Vendor equipment catalog reader.
//!
//! The catalog is a wide layout: each row carries a brand plus up to five
//! model numbers, one column per equipment role. Every non-empty role cell
//! becomes one [`RawEquipment`] entry, so a single row can yield several
//! pieces of equipment.

use std::path::Path;

use tracing::warn;

use ahri_model::{EquipmentType, RawEquipment};

use crate::error::{IngestError, Result};
use crate::header::HeaderIndex;

/// Brand column heading.
pub const BRAND_COLUMN: &str = "Brand";

/// Role column headings, in catalog order.
pub const EQUIPMENT_COLUMNS: [&str; 5] = [
    "Furnace",
    "Outdoor Unit (ac)",
    "Outdoor Unit (hp)",
    "Evaporator Coil",
    "Air Handler",
];

/// Read the equipment catalog, exploding the wide layout into one entry per
/// non-empty role cell.
///
/// Row order (and therefore brand first-observed order) is preserved. Rows
/// with a field-count mismatch or an unreadable brand cell are skipped with
/// a warning.
pub fn read_equipment_list(path: &Path) -> Result<Vec<RawEquipment>> {
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

    let brand_idx = index.required(BRAND_COLUMN, path)?;
    let role_columns = role_columns(&index, path)?;

    let mut equipment = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let line = row + 2; // header is line 1
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(path = %path.display(), line, %error, "skipping malformed catalog row");
                continue;
            }
        };

        let Some(brand) = record.get(brand_idx).map(str::trim) else {
            warn!(path = %path.display(), line, "skipping catalog row with no brand field");
            continue;
        };

        for (equipment_type, idx) in &role_columns {
            let Some(model) = record.get(*idx).map(str::trim) else {
                continue;
            };
            if model.is_empty() {
                continue;
            }
            equipment.push(RawEquipment {
                input_model: model.to_string(),
                brand: brand.to_string(),
                equipment_type: *equipment_type,
            });
        }
    }

    Ok(equipment)
}

/// Resolve each role column heading to its equipment type and index,
/// failing the read on the first missing column.
fn role_columns(index: &HeaderIndex, path: &Path) -> Result<Vec<(EquipmentType, usize)>> {
    let mut columns = Vec::with_capacity(EQUIPMENT_COLUMNS.len());
    for name in EQUIPMENT_COLUMNS {
        let equipment_type =
            name.parse::<EquipmentType>()
                .map_err(|message| IngestError::UnrecognizedEquipmentType {
                    path: path.to_path_buf(),
                    message,
                })?;
        columns.push((equipment_type, index.required(name, path)?));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    const HEADER: &str =
        "Brand,Furnace,Outdoor Unit (ac),Outdoor Unit (hp),Evaporator Coil,Air Handler\n";

    #[test]
    fn explodes_wide_rows_into_typed_entries() {
        let file = catalog(&format!(
            "{HEADER}Goodman,GM9S960803BN,GSX140361,,CAPTA3626C3,\n"
        ));
        let equipment = read_equipment_list(file.path()).unwrap();

        assert_eq!(equipment.len(), 3);
        assert_eq!(equipment[0].equipment_type, EquipmentType::Furnace);
        assert_eq!(equipment[0].input_model, "GM9S960803BN");
        assert_eq!(equipment[1].equipment_type, EquipmentType::AcCondenser);
        assert_eq!(equipment[2].equipment_type, EquipmentType::EvaporatorCoil);
        assert!(equipment.iter().all(|item| item.brand == "Goodman"));
    }

    #[test]
    fn preserves_row_order_across_brands() {
        let file = catalog(&format!(
            "{HEADER}Goodman,GM9S960803BN,,,,\nAmana,AM9S960803BN,,,,\n"
        ));
        let equipment = read_equipment_list(file.path()).unwrap();

        let brands: Vec<&str> = equipment.iter().map(|item| item.brand.as_str()).collect();
        assert_eq!(brands, vec!["Goodman", "Amana"]);
    }

    #[test]
    fn skips_field_count_mismatch_rows() {
        let file = catalog(&format!(
            "{HEADER}Goodman,GM9S960803BN,,,,\nBroken,OnlyTwoFields\nAmana,AM9S960803BN,,,,\n"
        ));
        let equipment = read_equipment_list(file.path()).unwrap();

        assert_eq!(equipment.len(), 2);
        assert!(equipment.iter().all(|item| item.brand != "Broken"));
    }

    #[test]
    fn missing_required_column_fails_the_read() {
        let file = catalog("Brand,Furnace\nGoodman,GM9S960803BN\n");
        let error = read_equipment_list(file.path()).unwrap_err();

        assert!(matches!(error, IngestError::MissingColumn { .. }));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let error = read_equipment_list(Path::new("no_such_catalog.csv")).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn trims_model_whitespace_and_drops_empty_cells() {
        let file = catalog(&format!("{HEADER}Goodman, GM9S960803BN ,,,  ,\n"));
        let equipment = read_equipment_list(file.path()).unwrap();

        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].input_model, "GM9S960803BN");
    }
}
