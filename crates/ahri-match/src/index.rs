//! The certification lookup table.

use std::collections::HashMap;

use tracing::{debug, warn};

use ahri_model::{CertificationRecord, EquipmentType};

use crate::normalize::normalize;
use crate::wildcard::{expand_furnace, expand_indoor, expand_outdoor};

/// Separator between the outdoor, indoor, and furnace components of a key.
pub const KEY_DELIMITER: char = '|';

/// Exact-match lookup from a normalized `(outdoor, indoor, furnace)` triple
/// to an AHRI certificate number.
///
/// Built once up front from every certification record and read-only
/// afterwards. Roles absent from a record contribute an empty component,
/// so a coil-only system keys as `outdoor|indoor|`.
#[derive(Debug, Default)]
pub struct CertificationIndex {
    entries: HashMap<String, String>,
    duplicate_keys: usize,
}

impl CertificationIndex {
    /// Build the index: normalize each record role, expand wildcards, and
    /// insert every concrete triple.
    ///
    /// Key collisions keep the later record (last write wins) and are
    /// surfaced as warnings: well-formed certification data should never
    /// produce them, so each one is a data-quality signal.
    pub fn build(records: &[CertificationRecord]) -> Self {
        let mut entries = HashMap::new();
        let mut duplicate_keys = 0usize;

        for record in records {
            let outdoor = normalize(&record.outdoor_model, EquipmentType::AcCondenser);
            let indoor = normalize(&record.indoor_model, EquipmentType::AirHandler);
            let furnace = normalize(&record.furnace_model, EquipmentType::Furnace);

            for furnace_variant in expand_furnace(&furnace) {
                for indoor_variant in expand_indoor(&indoor) {
                    for outdoor_variant in expand_outdoor(&outdoor) {
                        let key = join_key(&outdoor_variant, &indoor_variant, &furnace_variant);
                        if let Some(previous) =
                            entries.insert(key.clone(), record.ahri_number.clone())
                        {
                            duplicate_keys += 1;
                            warn!(
                                key = %key,
                                previous = %previous,
                                replacement = %record.ahri_number,
                                "duplicate certification key; keeping the later record"
                            );
                        }
                    }
                }
            }
        }

        debug!(
            records = records.len(),
            keys = entries.len(),
            duplicate_keys,
            "certification index built"
        );
        Self {
            entries,
            duplicate_keys,
        }
    }

    /// Exact-match lookup against normalized model numbers. Total: a miss
    /// is `None`, never an error.
    pub fn lookup(&self, outdoor: &str, indoor: &str, furnace: &str) -> Option<&str> {
        self.entries
            .get(&join_key(outdoor, indoor, furnace))
            .map(String::as_str)
    }

    /// Number of concrete keys (after wildcard expansion).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of collisions observed during the build.
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }
}

fn join_key(outdoor: &str, indoor: &str, furnace: &str) -> String {
    format!("{outdoor}{KEY_DELIMITER}{indoor}{KEY_DELIMITER}{furnace}")
}
