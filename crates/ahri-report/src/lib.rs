//! Output writing for certified matches.

pub mod writer;

pub use writer::{OUTPUT_HEADER, ReportError, write_matches_csv};
