//! Model-number normalization.
//!
//! Catalog model numbers and AHRI record model numbers both pass through
//! here before any comparison. Normalization canonicalizes length only; it
//! never changes case and never fails.

use ahri_model::EquipmentType;

/// Maximum length of a normalized model number.
pub const MAX_MODEL_LEN: usize = 11;

/// Length of the vendor packaging prefix some catalogs prepend to cased
/// evaporator coil model numbers.
const COIL_PREFIX_LEN: usize = 2;

/// Canonicalize a raw model number into its fixed-length comparison key.
///
/// All types truncate to at most [`MAX_MODEL_LEN`] characters; shorter
/// inputs pass through unchanged. Evaporator coils whose model does not
/// start with `c`/`C` and is long enough to carry a vendor prefix drop the
/// first two characters before truncating.
pub fn normalize(model: &str, equipment_type: EquipmentType) -> String {
    match equipment_type {
        EquipmentType::EvaporatorCoil => normalize_coil(model),
        _ => truncate(model, MAX_MODEL_LEN).to_string(),
    }
}

fn normalize_coil(model: &str) -> String {
    let starts_with_c = model
        .chars()
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(&'c'));
    if !starts_with_c && model.len() >= COIL_PREFIX_LEN + MAX_MODEL_LEN {
        if let Some(stripped) = model.get(COIL_PREFIX_LEN..COIL_PREFIX_LEN + MAX_MODEL_LEN) {
            return stripped.to_string();
        }
    }
    truncate(model, MAX_MODEL_LEN).to_string()
}

/// Truncate to `max` bytes; inputs that are shorter, or that cannot be cut
/// at a character boundary, pass through unchanged.
fn truncate(s: &str, max: usize) -> &str {
    s.get(..max).unwrap_or(s)
}
