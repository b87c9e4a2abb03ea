//! System topologies, generated combinations, and output rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::equipment::Equipment;

/// The configuration pattern of a complete HVAC system.
///
/// A topology determines which equipment roles participate in combination
/// generation and which compatibility filters apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    /// Furnace alone; certification does not apply.
    Furnace,
    /// Condenser + evaporator coil.
    CentralAc,
    /// Condenser + air handler.
    CentralAcAirHandler,
    /// Condenser + evaporator coil + furnace.
    CentralAcFurnace,
    /// Heat pump + air handler (electric heat).
    HeatPumpAirHandler,
    /// Heat pump + evaporator coil + furnace (dual fuel).
    HeatPumpFurnace,
}

impl SystemType {
    /// All topologies, in the canonical request order a default run uses.
    pub const ALL: [SystemType; 6] = [
        SystemType::CentralAc,
        SystemType::Furnace,
        SystemType::CentralAcAirHandler,
        SystemType::CentralAcFurnace,
        SystemType::HeatPumpAirHandler,
        SystemType::HeatPumpFurnace,
    ];

    /// Human request name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemType::Furnace => "furnace",
            SystemType::CentralAc => "central ac",
            SystemType::CentralAcAirHandler => "central ac & air handler",
            SystemType::CentralAcFurnace => "central ac & furnace",
            SystemType::HeatPumpAirHandler => "heat pump & air handler",
            SystemType::HeatPumpFurnace => "heat pump & furnace",
        }
    }

    /// Canonical code written to the `Type of System` output column.
    pub fn as_code(&self) -> &'static str {
        match self {
            SystemType::Furnace => "furnace",
            SystemType::CentralAc => "central_ac",
            SystemType::CentralAcAirHandler => "central_ac_air_handler",
            SystemType::CentralAcFurnace => "central_ac_furnace",
            SystemType::HeatPumpAirHandler => "air_source_heat_pump_electric_heat",
            SystemType::HeatPumpFurnace => "air_source_heat_pump_furnace",
        }
    }

    /// Returns true for the furnace-only topology.
    pub fn is_furnace_only(&self) -> bool {
        matches!(self, SystemType::Furnace)
    }

    /// Returns true when the topology pairs a cased coil with a furnace,
    /// which brings the cabinet-width filter into play.
    pub fn pairs_coil_with_furnace(&self) -> bool {
        matches!(
            self,
            SystemType::CentralAcFurnace | SystemType::HeatPumpFurnace
        )
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = String;

    /// Parse a topology request name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "furnace" => Ok(SystemType::Furnace),
            "central ac" => Ok(SystemType::CentralAc),
            "central ac & air handler" => Ok(SystemType::CentralAcAirHandler),
            "central ac & furnace" => Ok(SystemType::CentralAcFurnace),
            "heat pump & air handler" => Ok(SystemType::HeatPumpAirHandler),
            "heat pump & furnace" => Ok(SystemType::HeatPumpFurnace),
            _ => Err(format!("unsupported topology: {s}")),
        }
    }
}

/// One candidate system assembled by the combination generator.
///
/// Populated slots depend on the topology. Invariant: every populated unit
/// shares `brand`, and every populated non-furnace unit shares its control
/// category (furnaces pair with either).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCombination {
    pub brand: String,
    pub system_type: SystemType,
    pub furnace: Option<Equipment>,
    pub indoor: Option<Equipment>,
    pub outdoor: Option<Equipment>,
}

/// One row of the certified-matches output.
///
/// Fields not applicable to the combination's topology are empty strings,
/// never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub ahri_number: String,
    pub brand: String,
    /// Reserved column; currently always empty.
    pub orientation: String,
    pub system_type: String,
    pub outdoor_unit: String,
    pub furnace: String,
    pub evaporator_coil: String,
    pub air_handler: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_names_round_trip() {
        for topology in SystemType::ALL {
            assert_eq!(topology.as_str().parse::<SystemType>().unwrap(), topology);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Heat Pump & Furnace".parse::<SystemType>().unwrap(),
            SystemType::HeatPumpFurnace
        );
    }

    #[test]
    fn rejects_unknown_topologies() {
        let error = "geothermal".parse::<SystemType>().unwrap_err();
        assert!(error.contains("geothermal"));
    }

    #[test]
    fn heat_pump_codes_match_directory_vocabulary() {
        assert_eq!(
            SystemType::HeatPumpAirHandler.as_code(),
            "air_source_heat_pump_electric_heat"
        );
        assert_eq!(
            SystemType::HeatPumpFurnace.as_code(),
            "air_source_heat_pump_furnace"
        );
    }

    #[test]
    fn cabinet_filter_applies_only_to_coil_furnace_pairings() {
        let expected: Vec<SystemType> = SystemType::ALL
            .into_iter()
            .filter(SystemType::pairs_coil_with_furnace)
            .collect();
        assert_eq!(
            expected,
            vec![SystemType::CentralAcFurnace, SystemType::HeatPumpFurnace]
        );
    }
}
