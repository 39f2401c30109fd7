pub mod driver;
pub mod jobs;
pub mod manifest;
pub mod matcher;
pub mod operations;
pub mod types;

pub use driver::run;
pub use jobs::{builtin_jobs, DEFAULT_BASE_DIR};
pub use manifest::{load_manifest, Manifest};
pub use operations::{apply_pairs, patch_file, Applied};
pub use types::{MissedPair, PairError, PatchJob, PatchReport, ReplacementPair, RunSummary};
