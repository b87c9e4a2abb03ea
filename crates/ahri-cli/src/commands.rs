use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use ahri_cli::pipeline::{MatchConfig, PreparedInputs, ingest, match_catalog, output, prepare};
use ahri_match::CentralAcPolicy;
use ahri_model::SystemType;

use crate::cli::{CentralAcPolicyArg, RunArgs};
use crate::summary::apply_table_style;
use crate::types::MatchRunResult;

pub fn run_topologies() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Topology", "Code", "Certification"]);
    apply_table_style(&mut table);
    for topology in SystemType::ALL {
        let certification = if topology.is_furnace_only() {
            "not applicable"
        } else if topology == SystemType::CentralAc {
            "policy-dependent"
        } else {
            "required"
        };
        table.add_row(vec![topology.as_str(), topology.as_code(), certification]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_match(args: &RunArgs) -> Result<MatchRunResult> {
    let run_span = info_span!("run");
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Ingest - read the catalog and the certification export
    // =========================================================================
    let ingested = ingest(&args.equipment_file, &args.certifications_file)
        .context("ingest inputs")?;
    let equipment_count = ingested.equipment.len();
    let certification_count = ingested.certifications.len();

    // =========================================================================
    // Stage 2: Prepare - normalize, categorize, build the index
    // =========================================================================
    let PreparedInputs {
        equipment, index, ..
    } = prepare(ingested.equipment, &ingested.certifications);

    // =========================================================================
    // Stage 3: Match - generate, filter, look up
    // =========================================================================
    let topologies = requested_topologies(args);
    let config = MatchConfig {
        topologies: &topologies,
        central_ac_policy: central_ac_policy(args.central_ac_policy),
    };
    let outcome = match_catalog(&equipment, &index, &config);

    // =========================================================================
    // Stage 4: Output - write the certified matches
    // =========================================================================
    let output_path = output(&args.output, &outcome.records, args.dry_run)
        .context("write output")?;

    let has_errors = !outcome.errors.is_empty();
    Ok(MatchRunResult {
        output_path,
        equipment_count,
        certification_count,
        index_keys: index.len(),
        duplicate_keys: index.duplicate_keys(),
        combinations: outcome.combinations,
        matches: outcome.records.len(),
        by_topology: outcome.by_topology,
        errors: outcome.errors,
        has_errors,
    })
}

/// Topology request names: explicit flags, or every supported topology in
/// canonical order.
fn requested_topologies(args: &RunArgs) -> Vec<String> {
    if args.topologies.is_empty() {
        SystemType::ALL
            .iter()
            .map(|topology| topology.as_str().to_string())
            .collect()
    } else {
        args.topologies.clone()
    }
}

fn central_ac_policy(arg: CentralAcPolicyArg) -> CentralAcPolicy {
    match arg {
        CentralAcPolicyArg::TonnageOnly => CentralAcPolicy::TonnageOnly,
        CentralAcPolicyArg::RequireCertificate => CentralAcPolicy::RequireCertificate,
    }
}
