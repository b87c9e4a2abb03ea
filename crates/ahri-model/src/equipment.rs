//! Equipment types, control categories, and catalog entries.
//!
//! The vendor catalog is a wide CSV: one column per equipment role, one row
//! per brand line-up. Ingest flattens it into [`RawEquipment`] values; the
//! matching engine then derives the normalized model number and control
//! category exactly once, producing [`Equipment`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five equipment roles that participate in system configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    /// Gas furnace. Pairs with either control category.
    Furnace,
    /// Air handler (fan coil) indoor unit.
    AirHandler,
    /// Cased evaporator coil indoor unit.
    EvaporatorCoil,
    /// Air-conditioning condenser outdoor unit.
    AcCondenser,
    /// Heat-pump condenser outdoor unit.
    HeatPump,
}

impl EquipmentType {
    /// All equipment types, in catalog column order.
    pub const ALL: [EquipmentType; 5] = [
        EquipmentType::Furnace,
        EquipmentType::AirHandler,
        EquipmentType::EvaporatorCoil,
        EquipmentType::AcCondenser,
        EquipmentType::HeatPump,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Furnace => "furnace",
            EquipmentType::AirHandler => "air handler",
            EquipmentType::EvaporatorCoil => "evaporator coil",
            EquipmentType::AcCondenser => "ac condenser",
            EquipmentType::HeatPump => "heat pump",
        }
    }

    /// Returns true for units installed outside (condensers and heat pumps).
    pub fn is_outdoor(&self) -> bool {
        matches!(self, EquipmentType::AcCondenser | EquipmentType::HeatPump)
    }

    /// Returns true for units that occupy the indoor slot of a combination.
    pub fn is_indoor(&self) -> bool {
        matches!(
            self,
            EquipmentType::AirHandler | EquipmentType::EvaporatorCoil
        )
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    /// Parse a catalog column name or canonical type name (case-insensitive).
    ///
    /// Accepts both the bare role names and the `Outdoor Unit (ac)` /
    /// `Outdoor Unit (hp)` column headings the vendor catalog uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "furnace" => Ok(EquipmentType::Furnace),
            "air handler" => Ok(EquipmentType::AirHandler),
            "evaporator coil" => Ok(EquipmentType::EvaporatorCoil),
            "ac condenser" | "outdoor unit (ac)" => Ok(EquipmentType::AcCondenser),
            "heat pump" | "outdoor unit (hp)" => Ok(EquipmentType::HeatPump),
            _ => Err(format!("unrecognized equipment type: {s}")),
        }
    }
}

/// Control wiring category of a unit.
///
/// Communicating equipment talks a proprietary serial protocol and only
/// forms systems with other communicating units; standard equipment uses
/// conventional single-stage wiring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Standard,
    Communicating,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Communicating => "communicating",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry as read from the equipment CSV, before the engine has
/// derived its normalized model number and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEquipment {
    /// Model number exactly as printed in the catalog.
    pub input_model: String,
    pub brand: String,
    pub equipment_type: EquipmentType,
}

/// A fully prepared piece of equipment.
///
/// `normalized_model` and `category` are derived once, in that order, by
/// the matching engine; nothing downstream re-derives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Model number exactly as printed in the catalog; this is what output
    /// records carry.
    pub input_model: String,
    /// Fixed-length comparison key used for categorization, filtering, and
    /// certification lookup.
    pub normalized_model: String,
    pub brand: String,
    pub equipment_type: EquipmentType,
    pub category: Category,
}
