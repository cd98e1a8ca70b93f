//! Output stage: per-field column files, the plottable projection, and
//! the numeric summary report.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Column, NumericColumn};
use crate::stats::ColumnSummary;

/// Directory under the output root holding numeric series files.
pub const PLOTTABLE_DIR: &str = "plottable";

/// Writes prepared dataset artifacts under one output root.
#[derive(Debug)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory tree.
    pub fn prepare(&self, with_plottable: bool) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        if with_plottable {
            fs::create_dir_all(self.root.join(PLOTTABLE_DIR))?;
        }
        debug!(root = %self.root.display(), "prepared output directories");
        Ok(())
    }

    /// Write one text file per column, values in record order.
    pub fn write_columns(&self, columns: &[Column]) -> Result<usize> {
        for (index, column) in columns.iter().enumerate() {
            let path = self.root.join(column_file_name(index, &column.descriptor.name));
            let mut writer = BufWriter::new(File::create(&path)?);
            if let Some(unit) = &column.descriptor.unit {
                writeln!(writer, "# {} [{}]", column.descriptor.name, unit)?;
            } else {
                writeln!(writer, "# {}", column.descriptor.name)?;
            }
            for value in &column.values {
                writeln!(writer, "{}", value)?;
            }
            writer.flush()?;
        }
        info!(count = columns.len(), "wrote column files");
        Ok(columns.len())
    }

    /// Write one numeric series file per plottable column.
    pub fn write_numeric_series(&self, columns: &[NumericColumn]) -> Result<usize> {
        let dir = self.root.join(PLOTTABLE_DIR);
        for (index, column) in columns.iter().enumerate() {
            let path = dir.join(column_file_name(index, &column.name));
            let mut writer = BufWriter::new(File::create(&path)?);
            for value in &column.values {
                writeln!(writer, "{}", value)?;
            }
            writer.flush()?;
        }
        info!(count = columns.len(), "wrote plottable series files");
        Ok(columns.len())
    }

    /// Write the per-column numeric summary report.
    pub fn write_summary(&self, summaries: &[ColumnSummary]) -> Result<()> {
        let path = self.root.join("summary.txt");
        let mut writer = BufWriter::new(File::create(&path)?);
        for summary in summaries {
            writeln!(writer, "{}", summary.name)?;
            writeln!(writer, "  count:   {}", summary.count)?;
            writeln!(writer, "  mean:    {}", summary.mean)?;
            writeln!(writer, "  std dev: {}", summary.std_dev)?;
            writeln!(writer, "  min:     {}", summary.min)?;
            writeln!(writer, "  max:     {}", summary.max)?;
            writeln!(writer, "  iqr:     {}", summary.iqr)?;
            writeln!(writer, "  bins:    {}", summary.bin_count)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Column file name: record-order index plus the sanitized field name.
fn column_file_name(index: usize, name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() {
        "field".to_string()
    } else {
        safe
    };
    format!("{:02}_{}.txt", index, safe)
}
