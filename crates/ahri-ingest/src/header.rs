//! Header-row mapping shared by both CSV readers.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maps column names (trimmed, lowercased, BOM-stripped) to their index in
/// the header row.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    indices: BTreeMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a raw header record.
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut indices = BTreeMap::new();
        for (idx, name) in headers.iter().enumerate() {
            let clean = name.trim_matches('\u{feff}').trim().to_lowercase();
            indices.insert(clean, idx);
        }
        Self { indices }
    }

    /// Column index for `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(&name.trim().to_lowercase()).copied()
    }

    /// Column index for `name`, or the missing-column error that fails the
    /// whole read.
    pub fn required(&self, name: &str, path: &Path) -> Result<usize> {
        self.get(name).ok_or_else(|| IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    }
}
