use crate::matcher::{preview, replace_first};
use crate::operations::file_operations::{read_text_content, write_file_content};
use crate::types::{MissedPair, PatchReport, ReplacementPair};
use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub content: String,
    pub applied: usize,
    pub missed: Vec<MissedPair>,
}

/// Applies `pairs` to `content` in order. Each pair sees the buffer as left by
/// the previous ones; a pair whose search text is absent is skipped.
pub fn apply_pairs(content: &str, pairs: &[ReplacementPair]) -> Applied {
    let mut buffer = content.to_string();
    let mut applied = 0;
    let mut missed = Vec::new();

    for (i, pair) in pairs.iter().enumerate() {
        if replace_first(&mut buffer, pair.search(), pair.replace()) {
            debug!("pair #{} applied", i + 1);
            applied += 1;
        } else {
            missed.push(MissedPair {
                index: i,
                preview: preview(pair.search()).to_string(),
            });
        }
    }

    Applied {
        content: buffer,
        applied,
        missed,
    }
}

/// Reads `path`, applies `pairs` and writes the result back, even when some
/// pairs did not match. Line endings are normalized to `\n` on read, so the
/// file is always written back with `\n` endings.
pub fn patch_file(path: &Path, pairs: &[ReplacementPair]) -> Result<PatchReport> {
    let content = read_text_content(path)?;
    let result = apply_pairs(&content, pairs);

    for miss in &result.missed {
        warn!(
            "pair #{} not found in {:?}: {:?}",
            miss.index + 1,
            path,
            miss.preview
        );
    }

    write_file_content(path, &result.content)?;

    Ok(PatchReport {
        file_path: path.to_path_buf(),
        applied: result.applied,
        missed: result.missed,
    })
}
