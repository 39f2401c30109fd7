use anyhow::Result;
use clap::Parser;
use namepatch_core::{builtin_jobs, load_manifest, run, PatchJob, DEFAULT_BASE_DIR};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about = "Insert the NamePicker component into the sport views", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Run the built-in migration from the sports-app checkout root
    namepatch

    # Point the built-in migration at another views directory
    namepatch --base-dir ~/work/sports-app/frontend/src/views

    # Run a custom job list
    namepatch --manifest migration.toml

    # Show which files would be touched, without touching them
    namepatch --list

Each search text replaces its first occurrence only. Patterns that are not
found are reported and skipped; the file is written back regardless."#)]
struct Args {
    #[arg(long, value_name = "DIR", help = "Base directory for relative job paths [default: frontend/src/views]")]
    base_dir: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "TOML manifest to use instead of the built-in jobs")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Print the selected jobs and exit")]
    list: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = execute(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn execute(args: &Args) -> Result<()> {
    let (jobs, manifest_base) = select_jobs(args)?;
    let base_dir = args
        .base_dir
        .clone()
        .or(manifest_base)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

    if args.list {
        for job in &jobs {
            println!("{} ({} pairs)", job.resolve(&base_dir).display(), job.pairs.len());
        }
        return Ok(());
    }

    let summary = run(&jobs, &base_dir, &mut io::stdout().lock())?;
    log::info!(
        "{} file(s) patched, {} pair(s) applied, {} missed",
        summary.files_patched,
        summary.pairs_applied,
        summary.pairs_missed
    );
    Ok(())
}

fn select_jobs(args: &Args) -> Result<(Vec<PatchJob>, Option<PathBuf>)> {
    match &args.manifest {
        Some(path) => {
            let manifest = load_manifest(path)?;
            Ok((manifest.jobs, manifest.base_dir))
        }
        None => Ok((builtin_jobs(), None)),
    }
}
