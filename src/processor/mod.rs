//! Dataset processing engine.
//!
//! Orchestrates the full preparation workflow: ingestion, delimiter
//! inference, sanitization, type consensus, formatting, column parsing,
//! and output writing.

pub mod writer;

#[cfg(test)]
pub mod tests;

use self::writer::OutputWriter;

use crate::config::PrepConfig;
use crate::dataset::{numeric_columns, parse_columns, profile_dataset};
use crate::delimiter::infer_delimiter;
use crate::error::{PrepError, Result};
use crate::format::format_records;
use crate::models::{DatasetProfile, ProcessingStats};
use crate::sanitize::sanitize_record;
use crate::scan::count_fields;
use crate::stats::{summarize, ColumnSummary};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main processor for one dataset file.
#[derive(Debug)]
pub struct DatasetProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: PrepConfig,
}

impl DatasetProcessor {
    /// Create a processor for `input_path`, defaulting the output root
    /// to a `prepared/<stem>` directory beside the input.
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>) -> Result<Self> {
        if !input_path.exists() {
            return Err(PrepError::InputNotFound { path: input_path });
        }

        let stem = input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let output_path = output_path.unwrap_or_else(|| {
            input_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("prepared")
                .join(&stem)
        });

        Ok(Self {
            input_path,
            output_path,
            config: PrepConfig::default(),
        })
    }

    /// Configure the processor.
    pub fn with_config(mut self, config: PrepConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Profile the dataset without writing any output.
    pub fn discover(&self) -> Result<DatasetProfile> {
        let lines = self.read_lines()?;
        let delimiter = self.infer_delimiter(&lines)?;
        let sanitized: Vec<String> = lines
            .iter()
            .map(|line| sanitize_record(line, delimiter))
            .collect();
        Ok(profile_dataset(&sanitized, delimiter))
    }

    /// Main processing entry point.
    pub fn process(&mut self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        println!("{}", "Starting dataset preparation".bright_green().bold());
        println!(
            "  {} {}",
            "Input:".bright_cyan(),
            self.input_path.display()
        );
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            self.output_path.display()
        );

        // Step 1: ingest
        let lines = self.read_lines()?;
        println!(
            "\n  {} {} records",
            "Read".bright_green(),
            lines.len().to_string().bright_white().bold()
        );

        // Step 2: infer the field delimiter from a sample
        let delimiter = self.infer_delimiter(&lines)?;
        println!(
            "  {} {:?}",
            "Delimiter:".bright_cyan(),
            delimiter.to_string().bright_white().bold()
        );

        // Step 3: sanitize every record
        println!("\n{}", "Sanitizing records...".bright_yellow());
        let progress = progress_bar(lines.len() as u64, "sanitizing");
        let sanitized: Vec<String> = lines
            .iter()
            .map(|line| {
                progress.inc(1);
                sanitize_record(line, delimiter)
            })
            .collect();
        progress.finish_and_clear();

        // Step 4: profile (field count, consensus types, units)
        let profile = profile_dataset(&sanitized, delimiter);
        println!(
            "  {} {} fields, {} plottable",
            "Profiled".bright_green(),
            profile.field_count.to_string().bright_white().bold(),
            profile.plottable_count().to_string().bright_white().bold()
        );

        let short_records = sanitized
            .iter()
            .skip(1)
            .filter(|record| count_fields(record, &[delimiter]) < profile.field_count)
            .count();
        if short_records > 0 {
            warn!(short_records, "dataset contains short records");
        }

        // Step 5: format data records against the consensus scheme
        let scheme: Vec<_> = profile.descriptors.iter().map(|d| d.field_type).collect();
        let mut formatted = Vec::with_capacity(sanitized.len());
        formatted.push(sanitized[0].clone());
        formatted.extend(format_records(
            sanitized.iter().skip(1).map(String::as_str),
            &scheme,
            delimiter,
            self.config.missing_policy,
        ));

        // Step 6: parse into columns and project the plottable fields
        let dataset = parse_columns(&formatted, &profile, self.config.lenient)?;
        let numeric = numeric_columns(&dataset, self.config.lenient)?;

        let summaries = self.summarize_columns(&numeric)?;

        // Step 7: write outputs
        println!("\n{}", "Writing output files...".bright_yellow());
        let output_writer = OutputWriter::new(self.output_path.clone());
        output_writer.prepare(self.config.write_plottable)?;
        output_writer.write_columns(&dataset.columns)?;
        if self.config.write_plottable {
            output_writer.write_numeric_series(&numeric)?;
        }
        output_writer.write_summary(&summaries)?;

        let total_time = start_time.elapsed().as_millis();
        let stats = ProcessingStats {
            records_processed: profile.record_count,
            fields_per_record: profile.field_count,
            plottable_fields: profile.plottable_count(),
            short_records,
            output_path: self.output_path.clone(),
            processing_time_ms: total_time,
        };
        self.print_summary(&stats);
        info!(?stats, "dataset prepared");
        Ok(stats)
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.input_path)?;
        let lines: Vec<String> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();
        if lines.is_empty() {
            return Err(PrepError::EmptyInput {
                path: self.input_path.clone(),
            });
        }
        debug!(count = lines.len(), "read dataset lines");
        Ok(lines)
    }

    fn infer_delimiter(&self, lines: &[String]) -> Result<char> {
        let sample = lines
            .iter()
            .take(self.config.sample_size)
            .map(String::as_str);
        infer_delimiter(sample).ok_or_else(|| PrepError::NoDelimiterFound {
            path: self.input_path.clone(),
        })
    }

    fn summarize_columns(
        &self,
        numeric: &[crate::models::NumericColumn],
    ) -> Result<Vec<ColumnSummary>> {
        let mut summaries = Vec::with_capacity(numeric.len());
        for column in numeric {
            match summarize(&column.name, &column.values) {
                Ok(summary) => summaries.push(summary),
                Err(error) if self.config.lenient => {
                    warn!(field = %column.name, %error, "skipping column summary");
                }
                Err(error) => return Err(error),
            }
        }
        Ok(summaries)
    }

    fn print_summary(&self, stats: &ProcessingStats) {
        println!("\n{}", "Preparation Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Records:".bright_cyan(),
            stats.records_processed.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Fields per record:".bright_cyan(),
            stats.fields_per_record.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Plottable fields:".bright_cyan(),
            stats.plottable_fields.to_string().bright_white().bold()
        );
        if stats.short_records > 0 {
            println!(
                "  {} {}",
                "Short records:".bright_red(),
                stats.short_records.to_string().bright_red().bold()
            );
        }
    }
}

/// Report an inferred profile to the terminal (discovery mode).
pub fn report_profile(profile: &DatasetProfile) {
    println!("{}", "Dataset profile".bright_green().bold());
    println!(
        "  {} {:?}",
        "Delimiter:".bright_cyan(),
        profile.delimiter.to_string()
    );
    println!(
        "  {} {}",
        "Fields:".bright_cyan(),
        profile.field_count.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        profile.record_count.to_string().bright_white()
    );
    println!();
    for descriptor in &profile.descriptors {
        let unit = descriptor
            .unit
            .as_deref()
            .map(|u| format!(" [{}]", u))
            .unwrap_or_default();
        println!(
            "  {} {}{}",
            format!("{}", descriptor.field_type).bright_yellow(),
            descriptor.name.bright_white(),
            unit.bright_black()
        );
    }
}

fn progress_bar(total: u64, operation: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(operation.to_string());
    pb
}
