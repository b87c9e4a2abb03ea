//! Catalog preparation: the one pass that derives normalized model numbers
//! and control categories.

use ahri_model::{Equipment, RawEquipment};

use crate::categorize::categorize;
use crate::normalize::normalize;

/// Turn a raw catalog entry into prepared equipment.
///
/// Normalization runs first, then categorization over the normalized
/// model; nothing downstream re-derives either field.
pub fn prepare(raw: RawEquipment) -> Equipment {
    let normalized_model = normalize(&raw.input_model, raw.equipment_type);
    let category = categorize(raw.equipment_type, &normalized_model);
    Equipment {
        input_model: raw.input_model,
        normalized_model,
        brand: raw.brand,
        equipment_type: raw.equipment_type,
        category,
    }
}

/// Prepare a whole catalog, preserving input order.
pub fn prepare_all(raw: Vec<RawEquipment>) -> Vec<Equipment> {
    raw.into_iter().map(prepare).collect()
}

/// Brands in the order they were first observed in the catalog.
///
/// This order drives the outer loop of matching and is part of the output
/// contract, so it must not be sorted.
pub fn brand_order(equipment: &[Equipment]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for item in equipment {
        if !order.iter().any(|brand| brand == &item.brand) {
            order.push(item.brand.clone());
        }
    }
    order
}
