pub mod file_operations;
pub mod patcher;

pub use patcher::{apply_pairs, patch_file, Applied};
