//! Raw AHRI directory records.

use serde::{Deserialize, Serialize};

/// One row of the AHRI certification export, untouched.
///
/// Model fields may contain the `*` wildcard marker standing in for a set
/// of concrete variants (furnace orientation, indoor cabinet width); roles
/// not present in the certified system are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub ahri_number: String,
    pub outdoor_model: String,
    pub indoor_model: String,
    pub furnace_model: String,
}
