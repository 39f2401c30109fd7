use crate::operations::patch_file;
use crate::types::{PatchJob, RunSummary};
use anyhow::Result;
use log::info;
use std::io::Write;
use std::path::Path;

pub const DONE_MARKER: &str = "All done!";

/// Runs every job in order and writes the progress report to `out`.
/// Stops at the first I/O error; files already written stay written.
pub fn run<W: Write>(jobs: &[PatchJob], base_dir: &Path, out: &mut W) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for job in jobs {
        let path = job.resolve(base_dir);
        info!("patching {:?} with {} pair(s)", path, job.pairs.len());

        let report = patch_file(&path, &job.pairs)?;
        for miss in &report.missed {
            writeln!(
                out,
                "WARNING: could not find pattern in {}: {:?}",
                path.display(),
                miss.preview
            )?;
        }
        writeln!(out, "Patched {}", path.display())?;

        summary.record(&report);
    }

    writeln!(out, "{}", DONE_MARKER)?;
    Ok(summary)
}
