//! Integration tests for the pipeline module.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use ahri_cli::pipeline::{MatchConfig, ingest, match_catalog, output, prepare};
use ahri_match::CentralAcPolicy;

const EQUIPMENT_HEADER: &str =
    "Brand,Furnace,Outdoor Unit (ac),Outdoor Unit (hp),Evaporator Coil,Air Handler\n";
const CERTIFICATION_HEADER: &str = "AHRI Number,Outdoor Unit,Indoor Unit,Furnace\n";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

fn run(
    dir: &TempDir,
    equipment: &str,
    certifications: &str,
    topologies: &[&str],
    policy: CentralAcPolicy,
) -> (ahri_match::MatchOutcome, PathBuf) {
    let equipment_file = write_file(dir, "equipment.csv", equipment);
    let certifications_file = write_file(dir, "ahri.csv", certifications);
    let output_file = dir.path().join("matches.csv");

    let ingested = ingest(&equipment_file, &certifications_file).unwrap();
    let prepared = prepare(ingested.equipment, &ingested.certifications);
    let topologies: Vec<String> = topologies.iter().map(|name| (*name).to_string()).collect();
    let outcome = match_catalog(
        &prepared.equipment,
        &prepared.index,
        &MatchConfig {
            topologies: &topologies,
            central_ac_policy: policy,
        },
    );
    let written = output(&output_file, &outcome.records, false).unwrap();
    (outcome, written.unwrap())
}

#[test]
fn central_ac_pair_matches_on_tonnage_alone() {
    let dir = TempDir::new().unwrap();
    // Condenser tonnage code "34" (four and two before the end) equals the
    // coil's characters five and six; no certification record exists.
    let equipment = format!("{EQUIPMENT_HEADER}Acme,,ACU12AB3456,,CAPF634B6AA,\n");
    let (outcome, path) = run(
        &dir,
        &equipment,
        CERTIFICATION_HEADER,
        &["central ac"],
        CentralAcPolicy::TonnageOnly,
    );

    assert_eq!(outcome.records.len(), 1);
    let content = std::fs::read_to_string(path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "AHRI Number,Brand,Orientation,Type of System,Outdoor Unit,Furnace,Evaporator Coil,Air Handler"
    );
    assert_eq!(
        lines.next().unwrap(),
        ",Acme,,central_ac,ACU12AB3456,,CAPF634B6AA,"
    );
    assert!(lines.next().is_none());
}

#[test]
fn certified_three_unit_system_is_labelled_with_its_certificate() {
    let dir = TempDir::new().unwrap();
    // The catalog coil carries a vendor prefix the normalizer strips; the
    // AHRI record compresses cabinet widths with a trailing wildcard.
    let equipment = format!(
        "{EQUIPMENT_HEADER}Goodman,GM9S960803B,GSX1403610,,XXCAPF43636B6,\n"
    );
    let certifications = format!(
        "{CERTIFICATION_HEADER}201234567,GSX1403610,CAPF43636*6,GM9S960803B\n"
    );
    let (outcome, path) = run(
        &dir,
        &equipment,
        &certifications,
        &["central ac & furnace"],
        CentralAcPolicy::default(),
    );

    assert_eq!(outcome.combinations, 1);
    assert_eq!(outcome.records.len(), 1);
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains(
        "201234567,Goodman,,central_ac_furnace,GSX1403610,GM9S960803B,XXCAPF43636B6,"
    ));
}

#[test]
fn furnace_rows_are_emitted_without_certificates() {
    let dir = TempDir::new().unwrap();
    let equipment = format!(
        "{EQUIPMENT_HEADER}Goodman,GM9S960803BN,,,,\nGoodman,GM9S961205DN,,,,\n"
    );
    let (outcome, path) = run(
        &dir,
        &equipment,
        CERTIFICATION_HEADER,
        &["furnace"],
        CentralAcPolicy::default(),
    );

    assert_eq!(outcome.records.len(), 2);
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains(",Goodman,,furnace,,GM9S960803BN,,"));
    assert!(content.contains(",Goodman,,furnace,,GM9S961205DN,,"));
}

#[test]
fn topology_order_and_brand_order_are_preserved_in_the_output() {
    let dir = TempDir::new().unwrap();
    // Zephyr is observed before Acme; requested topology order runs
    // furnace before central ac.
    let equipment = format!(
        "{EQUIPMENT_HEADER}Zephyr,ZM9S960803B,,,,\n\
         Acme,AM9S960803B,ACU12AB3456,,CAPF634B6AA,\n"
    );
    let (outcome, _path) = run(
        &dir,
        &equipment,
        CERTIFICATION_HEADER,
        &["furnace", "central ac"],
        CentralAcPolicy::TonnageOnly,
    );

    let rows: Vec<(&str, &str)> = outcome
        .records
        .iter()
        .map(|record| (record.brand.as_str(), record.system_type.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Zephyr", "furnace"),
            ("Acme", "furnace"),
            ("Acme", "central_ac"),
        ]
    );
}

#[test]
fn unsupported_topology_is_reported_but_does_not_abort() {
    let dir = TempDir::new().unwrap();
    let equipment = format!("{EQUIPMENT_HEADER}Goodman,GM9S960803BN,,,,\n");
    let (outcome, _path) = run(
        &dir,
        &equipment,
        CERTIFICATION_HEADER,
        &["geothermal", "furnace"],
        CentralAcPolicy::default(),
    );

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("unsupported topology"));
}

#[test]
fn missing_equipment_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let certifications_file = write_file(&dir, "ahri.csv", CERTIFICATION_HEADER);
    let missing = dir.path().join("no_such_catalog.csv");

    let error = ingest(&missing, &certifications_file).unwrap_err();
    assert!(format!("{error:#}").contains("no_such_catalog.csv"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matches.csv");

    let written = output(&path, &[], true).unwrap();

    assert!(written.is_none());
    assert!(!path.exists());
}
