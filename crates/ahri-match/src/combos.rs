//! Combination generation.
//!
//! Equipment is partitioned into typed buckets, each split by control
//! category, and every topology's candidates are the Cartesian product of
//! the buckets it uses, one category at a time. Generation order is part
//! of the output contract and is fixed: standard before communicating,
//! loops nested furnace (outermost), then indoor, then outdoor.

use ahri_model::{Category, Equipment, EquipmentType, SystemCombination, SystemType};

/// One equipment bucket split by control category.
#[derive(Debug, Default, Clone)]
struct CategorySplit {
    standard: Vec<Equipment>,
    communicating: Vec<Equipment>,
}

impl CategorySplit {
    fn push(&mut self, item: Equipment) {
        match item.category {
            Category::Standard => self.standard.push(item),
            Category::Communicating => self.communicating.push(item),
        }
    }

    fn get(&self, category: Category) -> &[Equipment] {
        match category {
            Category::Standard => &self.standard,
            Category::Communicating => &self.communicating,
        }
    }
}

/// A brand's equipment, partitioned by type and category.
///
/// Furnaces are pooled across both categories: they pair with standard and
/// communicating systems alike.
#[derive(Debug, Default, Clone)]
pub struct EquipmentBuckets {
    furnaces: Vec<Equipment>,
    air_handlers: CategorySplit,
    coils: CategorySplit,
    condensers: CategorySplit,
    heat_pumps: CategorySplit,
}

impl EquipmentBuckets {
    /// Partition equipment into the five type buckets. Exhaustive over the
    /// equipment-type enum; input order is preserved within each bucket.
    pub fn partition<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Equipment>,
    {
        let mut buckets = Self::default();
        for item in items {
            match item.equipment_type {
                EquipmentType::Furnace => buckets.furnaces.push(item.clone()),
                EquipmentType::AirHandler => buckets.air_handlers.push(item.clone()),
                EquipmentType::EvaporatorCoil => buckets.coils.push(item.clone()),
                EquipmentType::AcCondenser => buckets.condensers.push(item.clone()),
                EquipmentType::HeatPump => buckets.heat_pumps.push(item.clone()),
            }
        }
        buckets
    }
}

const CATEGORIES: [Category; 2] = [Category::Standard, Category::Communicating];

/// Generate every candidate combination for one brand and topology.
///
/// Standard and communicating equipment never cross-pair; furnaces join
/// either category's systems.
pub fn generate(
    buckets: &EquipmentBuckets,
    brand: &str,
    system_type: SystemType,
) -> Vec<SystemCombination> {
    let mut combinations = Vec::new();

    match system_type {
        SystemType::Furnace => {
            for furnace in &buckets.furnaces {
                combinations.push(combo(brand, system_type, Some(furnace), None, None));
            }
        }
        SystemType::CentralAc => {
            cross_indoor_outdoor(
                &mut combinations,
                brand,
                system_type,
                &buckets.coils,
                &buckets.condensers,
            );
        }
        SystemType::CentralAcAirHandler => {
            cross_indoor_outdoor(
                &mut combinations,
                brand,
                system_type,
                &buckets.air_handlers,
                &buckets.condensers,
            );
        }
        SystemType::CentralAcFurnace => {
            cross_furnace_indoor_outdoor(
                &mut combinations,
                brand,
                system_type,
                &buckets.furnaces,
                &buckets.coils,
                &buckets.condensers,
            );
        }
        SystemType::HeatPumpAirHandler => {
            cross_indoor_outdoor(
                &mut combinations,
                brand,
                system_type,
                &buckets.air_handlers,
                &buckets.heat_pumps,
            );
        }
        SystemType::HeatPumpFurnace => {
            cross_furnace_indoor_outdoor(
                &mut combinations,
                brand,
                system_type,
                &buckets.furnaces,
                &buckets.coils,
                &buckets.heat_pumps,
            );
        }
    }

    combinations
}

fn cross_indoor_outdoor(
    out: &mut Vec<SystemCombination>,
    brand: &str,
    system_type: SystemType,
    indoor: &CategorySplit,
    outdoor: &CategorySplit,
) {
    for category in CATEGORIES {
        for indoor_unit in indoor.get(category) {
            for outdoor_unit in outdoor.get(category) {
                out.push(combo(
                    brand,
                    system_type,
                    None,
                    Some(indoor_unit),
                    Some(outdoor_unit),
                ));
            }
        }
    }
}

fn cross_furnace_indoor_outdoor(
    out: &mut Vec<SystemCombination>,
    brand: &str,
    system_type: SystemType,
    furnaces: &[Equipment],
    indoor: &CategorySplit,
    outdoor: &CategorySplit,
) {
    for category in CATEGORIES {
        for furnace in furnaces {
            for indoor_unit in indoor.get(category) {
                for outdoor_unit in outdoor.get(category) {
                    out.push(combo(
                        brand,
                        system_type,
                        Some(furnace),
                        Some(indoor_unit),
                        Some(outdoor_unit),
                    ));
                }
            }
        }
    }
}

fn combo(
    brand: &str,
    system_type: SystemType,
    furnace: Option<&Equipment>,
    indoor: Option<&Equipment>,
    outdoor: Option<&Equipment>,
) -> SystemCombination {
    SystemCombination {
        brand: brand.to_string(),
        system_type,
        furnace: furnace.cloned(),
        indoor: indoor.cloned(),
        outdoor: outdoor.cloned(),
    }
}
