//! The AHRI matching engine.
//!
//! A single-pass, deterministic batch computation: catalog equipment is
//! normalized and categorized, a certification index is built once from
//! the AHRI export (wildcards expanded), and for each brand and requested
//! topology the generator produces candidate combinations that are run
//! through the compatibility filters and, where the topology requires it,
//! the certification lookup.
//!
//! Everything here is pure except for `tracing` diagnostics; file I/O
//! lives in the ingest and report crates.

pub mod categorize;
pub mod combos;
pub mod error;
pub mod filter;
pub mod finder;
pub mod index;
pub mod normalize;
pub mod prepare;
pub mod wildcard;

pub use categorize::categorize;
pub use combos::{EquipmentBuckets, generate};
pub use error::MatchError;
pub use finder::{
    CentralAcPolicy, MatchOutcome, MatchRequest, TopologyCount, find_certified_matches,
    run_matching,
};
pub use index::CertificationIndex;
pub use normalize::normalize;
pub use prepare::{brand_order, prepare, prepare_all};
