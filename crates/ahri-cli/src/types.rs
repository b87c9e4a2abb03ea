use std::path::PathBuf;

use ahri_match::TopologyCount;

#[derive(Debug)]
pub struct MatchRunResult {
    /// Written output path; `None` on a dry run or when nothing matched.
    pub output_path: Option<PathBuf>,
    pub equipment_count: usize,
    pub certification_count: usize,
    pub index_keys: usize,
    pub duplicate_keys: usize,
    pub combinations: usize,
    pub matches: usize,
    pub by_topology: Vec<TopologyCount>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
