//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{MissingPolicy, PrepConfig};
use crate::processor::{report_profile, DatasetProcessor};

#[derive(Parser, Debug)]
#[command(name = "tabprep")]
#[command(about = "Normalize delimiter-separated datasets into analysis-ready columns")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Dataset file, or a directory to scan for dataset files
    #[arg(value_name = "INPUT_PATH")]
    pub input: PathBuf,

    /// Output directory for prepared columns
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Discovery mode: report the inferred profile then exit (no output written)
    #[arg(long)]
    pub discovery_only: bool,

    /// Keep the `-` missing-value sentinel in non-numeric fields instead of zero-filling
    #[arg(long)]
    pub keep_missing: bool,

    /// Fail on short records and unparseable numeric values instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> PrepConfig {
        let policy = if self.keep_missing {
            MissingPolicy::KeepSentinel
        } else {
            MissingPolicy::ZeroFill
        };
        PrepConfig::default()
            .with_missing_policy(policy)
            .with_lenient(!self.strict)
    }

    /// Output root for one input file. With several inputs the given
    /// output acts as a parent directory keyed by file stem.
    fn output_root(&self, input: &std::path::Path, multiple: bool) -> Option<PathBuf> {
        let output = self.output.as_ref()?;
        if multiple {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            Some(output.join(stem.as_ref()))
        } else {
            Some(output.clone())
        }
    }
}

/// Run the CLI against one file or every dataset under a directory.
pub fn run(args: Args) -> anyhow::Result<()> {
    use colored::*;

    let inputs = input_discovery::discover_inputs(&args.input)?;
    let config = args.to_config();
    let multiple = inputs.len() > 1;

    let mut failures = 0usize;
    for input in &inputs {
        match run_one(&args, input, &config, multiple) {
            Ok(()) => {}
            Err(error) if multiple => {
                failures += 1;
                eprintln!(
                    "{} {}: {:#}",
                    "Failed".bright_red().bold(),
                    input.display(),
                    error
                );
            }
            Err(error) => return Err(error),
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} inputs failed", failures, inputs.len());
    }
    Ok(())
}

fn run_one(
    args: &Args,
    input: &std::path::Path,
    config: &PrepConfig,
    multiple: bool,
) -> anyhow::Result<()> {
    let output = args.output_root(input, multiple);
    let processor =
        DatasetProcessor::new(input.to_path_buf(), output)?.with_config(config.clone());

    if args.discovery_only {
        report_profile(&processor.discover()?);
        return Ok(());
    }

    let mut processor = processor;
    processor.process()?;
    Ok(())
}


/// Input discovery over files and directory trees.
pub mod input_discovery {
    use anyhow::{Context, Result};
    use std::path::{Path, PathBuf};

    use crate::constants::DATASET_EXTENSIONS;

    /// Resolve an input path into concrete dataset files.
    ///
    /// A file is taken as-is; a directory is walked for files carrying
    /// a dataset extension, sorted for deterministic ordering.
    pub fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>> {
        if input.is_file() {
            return Ok(vec![input.to_path_buf()]);
        }
        if !input.is_dir() {
            anyhow::bail!("input path does not exist: {}", input.display());
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(input) {
            let entry = entry.context("Failed to walk input directory")?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_dataset = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DATASET_EXTENSIONS.contains(&ext));
            if is_dataset {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();

        if files.is_empty() {
            anyhow::bail!(
                "no dataset files (*.{}) found under {}",
                DATASET_EXTENSIONS.join(", *."),
                input.display()
            );
        }
        Ok(files)
    }

}
