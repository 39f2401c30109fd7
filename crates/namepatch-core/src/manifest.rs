use crate::operations::file_operations::read_file_content;
use crate::types::{PatchJob, ReplacementPair};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    base_dir: Option<PathBuf>,
    #[serde(default, rename = "job")]
    jobs: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JobEntry {
    file: PathBuf,
    #[serde(default, rename = "pair")]
    pairs: Vec<PairEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PairEntry {
    search: String,
    replace: String,
}

/// A job list loaded from TOML in place of the built-in migration.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub base_dir: Option<PathBuf>,
    pub jobs: Vec<PatchJob>,
}

pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let raw: ManifestFile = toml::from_str(content).context("Failed to parse manifest")?;

    let mut jobs = Vec::with_capacity(raw.jobs.len());
    for (j, job) in raw.jobs.into_iter().enumerate() {
        let mut pairs = Vec::with_capacity(job.pairs.len());
        for (p, pair) in job.pairs.into_iter().enumerate() {
            let pair = ReplacementPair::new(pair.search, pair.replace).with_context(|| {
                format!("Job #{} ({:?}), pair #{}", j + 1, job.file, p + 1)
            })?;
            pairs.push(pair);
        }
        jobs.push(PatchJob::new(job.file, pairs));
    }

    Ok(Manifest {
        base_dir: raw.base_dir,
        jobs,
    })
}

/// Loads a manifest from disk. A relative `base_dir` is taken relative to
/// the manifest's own directory.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = read_file_content(path)?;
    let mut manifest =
        parse_manifest(&content).with_context(|| format!("Invalid manifest: {:?}", path))?;

    if let Some(base) = manifest.base_dir.as_mut() {
        if base.is_relative() {
            if let Some(parent) = path.parent() {
                *base = parent.join(&*base);
            }
        }
    }

    Ok(manifest)
}
