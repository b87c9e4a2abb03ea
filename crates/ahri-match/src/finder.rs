//! Match orchestration.
//!
//! Drives generation, filtering, and certification lookup in the canonical
//! order: brands as first observed in the catalog, then the requested
//! topologies in caller order, then combinations in generation order. A
//! bad topology request is warned about and skipped; it never aborts the
//! rest of the batch.

use tracing::{debug, warn};

use ahri_model::{Equipment, EquipmentType, OutputRecord, SystemCombination, SystemType};

use crate::combos::{EquipmentBuckets, generate};
use crate::error::MatchError;
use crate::filter::is_compatible;
use crate::index::CertificationIndex;
use crate::prepare::brand_order;

/// Certification requirement for central-ac-only systems.
///
/// Surrounding practice is inconsistent on whether a condenser/coil pair
/// needs an AHRI certificate or is accepted on tonnage compatibility
/// alone, so the choice is an explicit strategy rather than a silent
/// default buried in the finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CentralAcPolicy {
    /// Accept on compatibility alone; the certificate column stays empty.
    #[default]
    TonnageOnly,
    /// Require a certificate, like every other multi-unit topology.
    RequireCertificate,
}

/// Inputs to one matching run.
#[derive(Debug)]
pub struct MatchRequest<'a> {
    /// Prepared catalog equipment, in catalog order.
    pub equipment: &'a [Equipment],
    /// Certification index built from the AHRI export.
    pub index: &'a CertificationIndex,
    /// Topology request names, in the order they should run.
    pub topologies: &'a [String],
    pub central_ac_policy: CentralAcPolicy,
}

/// Per-topology counters, aggregated across brands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyCount {
    pub topology: SystemType,
    pub combinations: usize,
    pub matches: usize,
}

/// Result of one matching run.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Output rows, in canonical order.
    pub records: Vec<OutputRecord>,
    /// Total combinations generated (before filtering).
    pub combinations: usize,
    /// Counters per topology, in first-requested order.
    pub by_topology: Vec<TopologyCount>,
    /// Non-fatal errors (skipped brand/topology pairings).
    pub errors: Vec<String>,
}

/// Resolve a topology request name.
fn resolve_topology(name: &str) -> Result<SystemType, MatchError> {
    name.parse::<SystemType>()
        .map_err(|_| MatchError::UnsupportedTopology(name.to_string()))
}

/// Run the whole batch: every brand crossed with every requested topology.
pub fn run_matching(request: &MatchRequest<'_>) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    let brands = brand_order(request.equipment);

    for brand in &brands {
        let buckets = EquipmentBuckets::partition(
            request
                .equipment
                .iter()
                .filter(|item| &item.brand == brand),
        );

        for name in request.topologies {
            let topology = match resolve_topology(name) {
                Ok(topology) => topology,
                Err(error) => {
                    warn!(brand = %brand, topology = %name, %error, "skipping topology");
                    outcome.errors.push(format!("{brand}: {error}"));
                    continue;
                }
            };

            let combinations = generate(&buckets, brand, topology);
            if combinations.is_empty() {
                continue;
            }

            let matched =
                find_certified_matches(&combinations, request.index, request.central_ac_policy);
            debug!(
                brand = %brand,
                topology = %topology,
                combinations = combinations.len(),
                matches = matched.len(),
                "topology processed"
            );

            outcome.combinations += combinations.len();
            tally(
                &mut outcome.by_topology,
                topology,
                combinations.len(),
                matched.len(),
            );
            outcome.records.extend(matched);
        }
    }

    outcome
}

fn tally(counts: &mut Vec<TopologyCount>, topology: SystemType, combinations: usize, matches: usize) {
    if let Some(entry) = counts.iter_mut().find(|entry| entry.topology == topology) {
        entry.combinations += combinations;
        entry.matches += matches;
    } else {
        counts.push(TopologyCount {
            topology,
            combinations,
            matches,
        });
    }
}

/// Filter one topology's combinations and emit output rows for those that
/// survive.
///
/// Furnace-only combinations always pass (certification does not apply);
/// everything else runs the compatibility filters and, where required, the
/// certification lookup. Rejections are silent by design.
pub fn find_certified_matches(
    combinations: &[SystemCombination],
    index: &CertificationIndex,
    policy: CentralAcPolicy,
) -> Vec<OutputRecord> {
    let mut records = Vec::new();

    for combination in combinations {
        if combination.system_type.is_furnace_only() {
            records.push(output_record(combination, String::new()));
            continue;
        }

        if !is_compatible(combination) {
            continue;
        }

        let ahri_number = if requires_certification(combination.system_type, policy) {
            let outdoor = normalized_or_empty(&combination.outdoor);
            let indoor = normalized_or_empty(&combination.indoor);
            let furnace = normalized_or_empty(&combination.furnace);
            match index.lookup(outdoor, indoor, furnace) {
                Some(number) => number.to_string(),
                None => continue,
            }
        } else {
            String::new()
        };

        records.push(output_record(combination, ahri_number));
    }

    records
}

/// Whether a topology's combinations must be found in the certification
/// index to be emitted.
fn requires_certification(topology: SystemType, policy: CentralAcPolicy) -> bool {
    match topology {
        SystemType::Furnace => false,
        SystemType::CentralAc => matches!(policy, CentralAcPolicy::RequireCertificate),
        _ => true,
    }
}

fn normalized_or_empty(unit: &Option<Equipment>) -> &str {
    unit.as_ref()
        .map(|item| item.normalized_model.as_str())
        .unwrap_or("")
}

/// Build the output row for a surviving combination.
///
/// Output columns carry the original catalog model numbers; the indoor
/// unit lands in the coil or air-handler column according to its own type,
/// not the topology.
fn output_record(combination: &SystemCombination, ahri_number: String) -> OutputRecord {
    let mut record = OutputRecord {
        ahri_number,
        brand: combination.brand.clone(),
        system_type: combination.system_type.as_code().to_string(),
        ..OutputRecord::default()
    };
    if let Some(outdoor) = &combination.outdoor {
        record.outdoor_unit = outdoor.input_model.clone();
    }
    if let Some(furnace) = &combination.furnace {
        record.furnace = furnace.input_model.clone();
    }
    if let Some(indoor) = &combination.indoor {
        match indoor.equipment_type {
            EquipmentType::AirHandler => record.air_handler = indoor.input_model.clone(),
            _ => record.evaporator_coil = indoor.input_model.clone(),
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use ahri_model::{CertificationRecord, RawEquipment};

    use crate::prepare::prepare_all;

    use super::*;

    fn raw(model: &str, brand: &str, equipment_type: EquipmentType) -> RawEquipment {
        RawEquipment {
            input_model: model.to_string(),
            brand: brand.to_string(),
            equipment_type,
        }
    }

    fn certification(ahri: &str, outdoor: &str, indoor: &str, furnace: &str) -> CertificationRecord {
        CertificationRecord {
            ahri_number: ahri.to_string(),
            outdoor_model: outdoor.to_string(),
            indoor_model: indoor.to_string(),
            furnace_model: furnace.to_string(),
        }
    }

    fn names(topologies: &[SystemType]) -> Vec<String> {
        topologies
            .iter()
            .map(|topology| topology.as_str().to_string())
            .collect()
    }

    #[test]
    fn central_ac_under_tonnage_only_emits_without_a_certificate() {
        let equipment = prepare_all(vec![
            raw("GSX1403610", "Goodman", EquipmentType::AcCondenser),
            raw("CAPF43636B6", "Goodman", EquipmentType::EvaporatorCoil),
        ]);
        let index = CertificationIndex::build(&[]);
        let topologies = names(&[SystemType::CentralAc]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::TonnageOnly,
        });

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert!(record.ahri_number.is_empty());
        assert_eq!(record.outdoor_unit, "GSX1403610");
        assert_eq!(record.evaporator_coil, "CAPF43636B6");
        assert!(record.air_handler.is_empty());
        assert_eq!(record.system_type, "central_ac");
    }

    #[test]
    fn central_ac_under_require_certificate_consults_the_index() {
        let equipment = prepare_all(vec![
            raw("GSX1403610", "Goodman", EquipmentType::AcCondenser),
            raw("CAPF43636B6", "Goodman", EquipmentType::EvaporatorCoil),
        ]);
        let certified = CertificationIndex::build(&[certification(
            "202541234",
            "GSX1403610",
            "CAPF43636B6",
            "",
        )]);
        let uncertified = CertificationIndex::build(&[]);
        let topologies = names(&[SystemType::CentralAc]);

        let hit = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &certified,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::RequireCertificate,
        });
        assert_eq!(hit.records.len(), 1);
        assert_eq!(hit.records[0].ahri_number, "202541234");

        let miss = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &uncertified,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::RequireCertificate,
        });
        assert!(miss.records.is_empty());
        assert_eq!(miss.combinations, 1);
    }

    #[test]
    fn furnace_topology_needs_no_certificate_and_no_filters() {
        let equipment = prepare_all(vec![
            raw("GM9S960803BN", "Goodman", EquipmentType::Furnace),
            raw("GM9S961205DN", "Goodman", EquipmentType::Furnace),
        ]);
        let index = CertificationIndex::build(&[]);
        let topologies = names(&[SystemType::Furnace]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::default(),
        });

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.records.iter().all(|r| r.ahri_number.is_empty()));
        assert_eq!(outcome.records[0].furnace, "GM9S960803BN");
        assert!(outcome.records[0].outdoor_unit.is_empty());
    }

    #[test]
    fn certified_three_unit_system_round_trips_through_the_index() {
        // Catalog coil carries a two-character vendor prefix; the AHRI
        // record lists the clean model with a cabinet wildcard.
        let equipment = prepare_all(vec![
            raw("GM9S960803B", "Goodman", EquipmentType::Furnace),
            raw("XXCAPF43636B6", "Goodman", EquipmentType::EvaporatorCoil),
            raw("GSX1403610", "Goodman", EquipmentType::AcCondenser),
        ]);
        let index = CertificationIndex::build(&[certification(
            "201234567",
            "GSX1403610",
            "CAPF43636*6",
            "GM9S960803B",
        )]);
        let topologies = names(&[SystemType::CentralAcFurnace]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::default(),
        });

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.ahri_number, "201234567");
        // Output carries the original catalog model, prefix included.
        assert_eq!(record.evaporator_coil, "XXCAPF43636B6");
        assert_eq!(record.furnace, "GM9S960803B");
    }

    #[test]
    fn air_handler_lands_in_its_own_output_column() {
        let equipment = prepare_all(vec![
            raw("ARUF436C14A", "Goodman", EquipmentType::AirHandler),
            raw("GSZ1403610", "Goodman", EquipmentType::HeatPump),
        ]);
        let index = CertificationIndex::build(&[certification(
            "209876543",
            "GSZ1403610",
            "ARUF436C14A",
            "",
        )]);
        let topologies = names(&[SystemType::HeatPumpAirHandler]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::default(),
        });

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.air_handler, "ARUF436C14A");
        assert!(record.evaporator_coil.is_empty());
        assert_eq!(record.system_type, "air_source_heat_pump_electric_heat");
    }

    #[test]
    fn unsupported_topology_is_skipped_without_aborting_the_batch() {
        let equipment = prepare_all(vec![raw(
            "GM9S960803BN",
            "Goodman",
            EquipmentType::Furnace,
        )]);
        let index = CertificationIndex::build(&[]);
        let topologies = vec!["geothermal".to_string(), "furnace".to_string()];
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::default(),
        });

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("geothermal"));
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn output_order_follows_brand_then_topology_then_generation() {
        let equipment = prepare_all(vec![
            // Amana appears first in the catalog even though Goodman sorts
            // first alphabetically.
            raw("AM9S960803BN", "Amana", EquipmentType::Furnace),
            raw("GM9S960803BN", "Goodman", EquipmentType::Furnace),
            raw("GM9S961205DN", "Goodman", EquipmentType::Furnace),
        ]);
        let index = CertificationIndex::build(&[]);
        let topologies = names(&[SystemType::Furnace]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::default(),
        });

        let furnaces: Vec<&str> = outcome
            .records
            .iter()
            .map(|record| record.furnace.as_str())
            .collect();
        assert_eq!(
            furnaces,
            vec!["AM9S960803BN", "GM9S960803BN", "GM9S961205DN"]
        );
    }

    #[test]
    fn filtered_pairs_are_discarded_silently() {
        // Horizontal coil: orientation filter rejects before any lookup.
        let equipment = prepare_all(vec![
            raw("GSX1403610", "Goodman", EquipmentType::AcCondenser),
            raw("CHPF43636B6", "Goodman", EquipmentType::EvaporatorCoil),
        ]);
        let index = CertificationIndex::build(&[]);
        let topologies = names(&[SystemType::CentralAc]);
        let outcome = run_matching(&MatchRequest {
            equipment: &equipment,
            index: &index,
            topologies: &topologies,
            central_ac_policy: CentralAcPolicy::TonnageOnly,
        });

        assert_eq!(outcome.combinations, 1);
        assert!(outcome.records.is_empty());
        assert!(outcome.errors.is_empty());
    }
}
