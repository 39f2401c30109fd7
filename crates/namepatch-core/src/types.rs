use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PairError {
    #[error("search text must not be empty")]
    EmptySearch,
}

/// A single literal substitution: the first occurrence of `search` becomes `replace`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementPair {
    search: String,
    replace: String,
}

impl ReplacementPair {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Result<Self, PairError> {
        let search = search.into();
        if search.is_empty() {
            return Err(PairError::EmptySearch);
        }
        Ok(Self {
            search,
            replace: replace.into(),
        })
    }

    /// For built-in literals whose search text is known to be non-empty.
    pub(crate) fn literal(search: impl Into<String>, replace: impl Into<String>) -> Self {
        let search = search.into();
        debug_assert!(!search.is_empty());
        Self {
            search,
            replace: replace.into(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchJob {
    pub file_path: PathBuf,
    pub pairs: Vec<ReplacementPair>,
}

impl PatchJob {
    pub fn new(file_path: impl Into<PathBuf>, pairs: Vec<ReplacementPair>) -> Self {
        Self {
            file_path: file_path.into(),
            pairs,
        }
    }

    /// Absolute paths are kept as is, relative ones are joined onto `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        if self.file_path.is_absolute() {
            self.file_path.clone()
        } else {
            base_dir.join(&self.file_path)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissedPair {
    pub index: usize,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub file_path: PathBuf,
    pub applied: usize,
    pub missed: Vec<MissedPair>,
}

impl PatchReport {
    pub fn is_clean(&self) -> bool {
        self.missed.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub files_patched: usize,
    pub pairs_applied: usize,
    pub pairs_missed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &PatchReport) {
        self.files_patched += 1;
        self.pairs_applied += report.applied;
        self.pairs_missed += report.missed.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_rejected() {
        assert_eq!(
            ReplacementPair::new("", "anything"),
            Err(PairError::EmptySearch)
        );
        assert!(ReplacementPair::new(" ", "").is_ok());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Path::new("/srv/app/views");
        let rel = PatchJob::new("LugeView.vue", vec![]);
        assert_eq!(rel.resolve(base), PathBuf::from("/srv/app/views/LugeView.vue"));

        let abs = PatchJob::new("/tmp/Other.vue", vec![]);
        assert_eq!(abs.resolve(base), PathBuf::from("/tmp/Other.vue"));
    }

    #[test]
    fn test_summary_accumulates() {
        let mut summary = RunSummary::default();
        summary.record(&PatchReport {
            file_path: PathBuf::from("a.vue"),
            applied: 4,
            missed: vec![MissedPair {
                index: 2,
                preview: "x".to_string(),
            }],
        });
        summary.record(&PatchReport {
            file_path: PathBuf::from("b.vue"),
            applied: 5,
            missed: vec![],
        });
        assert_eq!(summary.files_patched, 2);
        assert_eq!(summary.pairs_applied, 9);
        assert_eq!(summary.pairs_missed, 1);
    }
}
