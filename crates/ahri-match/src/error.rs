use thiserror::Error;

/// Failures scoped to a single brand/topology pairing.
///
/// The orchestrator catches these, logs a warning, and continues with the
/// rest of the batch; they never abort a run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("unsupported topology: {0}")]
    UnsupportedTopology(String),

    #[error("unrecognized equipment type: {0}")]
    UnrecognizedEquipmentType(String),
}
