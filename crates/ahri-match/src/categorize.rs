//! Standard vs. communicating classification.
//!
//! Communicating model families are recognized by fixed substrings of the
//! normalized model number. The marker tables are per equipment type; a
//! model that matches none of its type's markers is standard wiring.

use ahri_model::{Category, EquipmentType};

const AIR_HANDLER_MARKERS: &[&str] = &["ahve"];
const EVAPORATOR_COIL_MARKERS: &[&str] = &["capea"];
const AC_CONDENSER_MARKERS: &[&str] = &["axv", "gxv"];
const HEAT_PUMP_MARKERS: &[&str] = &["aszv9", "azv6", "gszv9", "gzv6"];

/// The communicating-family markers for an equipment type.
///
/// Furnaces have none: they pair with either category and are always
/// classified standard.
pub fn communicating_markers(equipment_type: EquipmentType) -> &'static [&'static str] {
    match equipment_type {
        EquipmentType::Furnace => &[],
        EquipmentType::AirHandler => AIR_HANDLER_MARKERS,
        EquipmentType::EvaporatorCoil => EVAPORATOR_COIL_MARKERS,
        EquipmentType::AcCondenser => AC_CONDENSER_MARKERS,
        EquipmentType::HeatPump => HEAT_PUMP_MARKERS,
    }
}

/// Classify a unit from its normalized model number. Pure and total:
/// marker containment is case-insensitive, and no marker hit means
/// [`Category::Standard`].
pub fn categorize(equipment_type: EquipmentType, normalized_model: &str) -> Category {
    let model = normalized_model.to_lowercase();
    let communicating = communicating_markers(equipment_type)
        .iter()
        .any(|marker| model.contains(marker));
    if communicating {
        Category::Communicating
    } else {
        Category::Standard
    }
}
