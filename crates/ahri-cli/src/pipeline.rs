//! Matching pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the equipment catalog and the certification export
//! 2. **Prepare**: Normalize and categorize equipment, build the index
//! 3. **Match**: Generate combinations, filter, look up certificates
//! 4. **Output**: Write the certified-matches CSV
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ahri_ingest::{read_certification_records, read_equipment_list};
use ahri_match::{
    CentralAcPolicy, CertificationIndex, MatchOutcome, MatchRequest, prepare_all, run_matching,
};
use ahri_model::{Category, CertificationRecord, Equipment, OutputRecord, RawEquipment};
use ahri_report::write_matches_csv;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Catalog entries, in catalog order.
    pub equipment: Vec<RawEquipment>,
    /// Raw certification records, wildcards intact.
    pub certifications: Vec<CertificationRecord>,
}

/// Read both inputs. Missing files, unreadable headers, and missing
/// required columns are fatal; malformed rows were already skipped with a
/// warning by the readers.
pub fn ingest(equipment_file: &Path, certifications_file: &Path) -> Result<IngestResult> {
    let ingest_span = info_span!("ingest");
    let _guard = ingest_span.enter();
    let start = Instant::now();

    let equipment = read_equipment_list(equipment_file)
        .with_context(|| format!("read equipment catalog {}", equipment_file.display()))?;
    let certifications = read_certification_records(certifications_file)
        .with_context(|| format!("read certification export {}", certifications_file.display()))?;

    info!(
        equipment_count = equipment.len(),
        certification_count = certifications.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        equipment,
        certifications,
    })
}

// ============================================================================
// Stage 2: Prepare
// ============================================================================

/// Result of the prepare stage.
#[derive(Debug)]
pub struct PreparedInputs {
    /// Equipment with normalized models and categories derived.
    pub equipment: Vec<Equipment>,
    /// The certification lookup table, wildcards expanded.
    pub index: CertificationIndex,
    pub standard_count: usize,
    pub communicating_count: usize,
}

/// Normalize and categorize the catalog, then build the certification
/// index. Pure computation; never fails.
pub fn prepare(raw: Vec<RawEquipment>, certifications: &[CertificationRecord]) -> PreparedInputs {
    let prepare_span = info_span!("prepare");
    let _guard = prepare_span.enter();
    let start = Instant::now();

    let equipment = prepare_all(raw);
    let standard_count = equipment
        .iter()
        .filter(|item| item.category == Category::Standard)
        .count();
    let communicating_count = equipment.len() - standard_count;

    let index = CertificationIndex::build(certifications);

    info!(
        standard_count,
        communicating_count,
        index_keys = index.len(),
        duplicate_keys = index.duplicate_keys(),
        duration_ms = start.elapsed().as_millis(),
        "prepare complete"
    );
    PreparedInputs {
        equipment,
        index,
        standard_count,
        communicating_count,
    }
}

// ============================================================================
// Stage 3: Match
// ============================================================================

/// Matching configuration from the CLI.
#[derive(Debug)]
pub struct MatchConfig<'a> {
    /// Topology request names, in the order they should run.
    pub topologies: &'a [String],
    pub central_ac_policy: CentralAcPolicy,
}

/// Run the matching engine over the prepared inputs.
pub fn match_catalog(
    equipment: &[Equipment],
    index: &CertificationIndex,
    config: &MatchConfig<'_>,
) -> MatchOutcome {
    let match_span = info_span!("match");
    let _guard = match_span.enter();
    let start = Instant::now();

    let outcome = run_matching(&MatchRequest {
        equipment,
        index,
        topologies: config.topologies,
        central_ac_policy: config.central_ac_policy,
    });

    info!(
        combinations = outcome.combinations,
        matches = outcome.records.len(),
        error_count = outcome.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "matching complete"
    );
    outcome
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the certified matches. Returns the written path, or `None` on a
/// dry run.
pub fn output(path: &Path, records: &[OutputRecord], dry_run: bool) -> Result<Option<PathBuf>> {
    let output_span = info_span!("output");
    let _guard = output_span.enter();
    let start = Instant::now();

    if dry_run {
        info!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    write_matches_csv(path, records)
        .with_context(|| format!("write matches to {}", path.display()))?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(path.to_path_buf()))
}
