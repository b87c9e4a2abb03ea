//! Topology-specific compatibility filters.
//!
//! These predicates run before (or instead of) the certification lookup
//! and are total: a combination is accepted or rejected, never an error.
//! Models too short for a positional extraction are rejected as invalid
//! rather than matched.

use ahri_model::SystemCombination;

/// Second character of an indoor model marking a horizontal cabinet.
pub const HORIZONTAL_ORIENTATION_MARKER: char = 'H';

/// Zero-indexed span of the tonnage code in an indoor model.
const INDOOR_TONNAGE_SPAN: (usize, usize) = (5, 7);

/// Offsets, back from the end of an outdoor model, of the tonnage code.
const OUTDOOR_TONNAGE_BACK: (usize, usize) = (4, 2);

/// Zero-indexed position of the cabinet-width character in a fully
/// normalized furnace model.
const FURNACE_CABINET_INDEX: usize = 10;

/// Offset, back from the end of an indoor model, of the cabinet-width
/// character (the same position the trailing wildcard expands over).
const INDOOR_CABINET_BACK: usize = 2;

/// Admissibility check for one combination.
///
/// Furnace-only systems have nothing to check. Every other topology
/// requires an upright indoor unit and matching tonnage codes; topologies
/// pairing a cased coil with a furnace additionally require matching
/// cabinet widths.
pub fn is_compatible(combination: &SystemCombination) -> bool {
    if combination.system_type.is_furnace_only() {
        return true;
    }

    let (Some(indoor), Some(outdoor)) = (&combination.indoor, &combination.outdoor) else {
        return false;
    };
    if !is_upright(&indoor.normalized_model) {
        return false;
    }
    if !tonnage_matches(&outdoor.normalized_model, &indoor.normalized_model) {
        return false;
    }
    if combination.system_type.pairs_coil_with_furnace() {
        let Some(furnace) = &combination.furnace else {
            return false;
        };
        return cabinet_matches(&indoor.normalized_model, &furnace.normalized_model);
    }
    true
}

/// Reject horizontal indoor cabinets; models shorter than two characters
/// are invalid and also rejected.
pub fn is_upright(indoor_model: &str) -> bool {
    match indoor_model.chars().nth(1) {
        Some(second) => !second.eq_ignore_ascii_case(&HORIZONTAL_ORIENTATION_MARKER),
        None => false,
    }
}

/// The outdoor unit's tonnage code must equal the indoor unit's.
pub fn tonnage_matches(outdoor_model: &str, indoor_model: &str) -> bool {
    match (outdoor_tonnage(outdoor_model), indoor_tonnage(indoor_model)) {
        (Some(outdoor_code), Some(indoor_code)) => outdoor_code.eq_ignore_ascii_case(indoor_code),
        _ => false,
    }
}

/// Tonnage code of an outdoor model: the two characters ending four and
/// two positions before the end.
pub fn outdoor_tonnage(model: &str) -> Option<&str> {
    let start = model.len().checked_sub(OUTDOOR_TONNAGE_BACK.0)?;
    let end = model.len().checked_sub(OUTDOOR_TONNAGE_BACK.1)?;
    model.get(start..end)
}

/// Tonnage code of an indoor model: characters five and six.
pub fn indoor_tonnage(model: &str) -> Option<&str> {
    model.get(INDOOR_TONNAGE_SPAN.0..INDOOR_TONNAGE_SPAN.1)
}

/// The coil's cabinet-width character must equal the furnace's.
pub fn cabinet_matches(indoor_model: &str, furnace_model: &str) -> bool {
    let indoor_start = match indoor_model.len().checked_sub(INDOOR_CABINET_BACK) {
        Some(start) => start,
        None => return false,
    };
    let indoor_cabinet = indoor_model.get(indoor_start..indoor_start + 1);
    let furnace_cabinet = furnace_model.get(FURNACE_CABINET_INDEX..FURNACE_CABINET_INDEX + 1);
    match (indoor_cabinet, furnace_cabinet) {
        (Some(indoor_char), Some(furnace_char)) => indoor_char.eq_ignore_ascii_case(furnace_char),
        _ => false,
    }
}
