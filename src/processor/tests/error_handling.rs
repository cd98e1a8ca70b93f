//! Failure-path tests for the processing engine.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use crate::config::PrepConfig;
use crate::error::PrepError;
use crate::processor::DatasetProcessor;

#[test]
fn test_missing_input() {
    let result = DatasetProcessor::new(PathBuf::from("/nonexistent/data.csv"), None);
    assert!(matches!(result, Err(PrepError::InputNotFound { .. })));
}

#[test]
fn test_empty_input() {
    let file = NamedTempFile::new().unwrap();
    let output = TempDir::new().unwrap();

    let mut processor = DatasetProcessor::new(
        file.path().to_path_buf(),
        Some(output.path().join("prepared")),
    )
    .unwrap();
    assert!(matches!(
        processor.process(),
        Err(PrepError::EmptyInput { .. })
    ));
}

#[test]
fn test_blank_lines_count_as_empty() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\n   \n\t\n").unwrap();
    file.flush().unwrap();
    let output = TempDir::new().unwrap();

    let mut processor = DatasetProcessor::new(
        file.path().to_path_buf(),
        Some(output.path().join("prepared")),
    )
    .unwrap();
    assert!(matches!(
        processor.process(),
        Err(PrepError::EmptyInput { .. })
    ));
}

#[test]
fn test_no_delimiter_found() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "alpha\n123\nbeta\n").unwrap();
    file.flush().unwrap();
    let output = TempDir::new().unwrap();

    let mut processor = DatasetProcessor::new(
        file.path().to_path_buf(),
        Some(output.path().join("prepared")),
    )
    .unwrap();
    assert!(matches!(
        processor.process(),
        Err(PrepError::NoDelimiterFound { .. })
    ));
}

#[test]
fn test_strict_mode_rejects_nan_column() {
    // "nan" parses as a numeric field, so it survives formatting and
    // only surfaces when the column summary enforces a total order.
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "v,w\n1,a\nnan,b\n").unwrap();
    file.flush().unwrap();
    let output = TempDir::new().unwrap();

    let config = PrepConfig::default().with_lenient(false);
    let mut processor = DatasetProcessor::new(
        file.path().to_path_buf(),
        Some(output.path().join("prepared")),
    )
    .unwrap()
    .with_config(config);
    assert!(matches!(
        processor.process(),
        Err(PrepError::UnparseableNumeric { .. })
    ));
}

#[test]
fn test_lenient_mode_skips_nan_summary() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "v,w\n1,a\nnan,b\n").unwrap();
    file.flush().unwrap();
    let output = TempDir::new().unwrap();

    let mut processor = DatasetProcessor::new(
        file.path().to_path_buf(),
        Some(output.path().join("prepared")),
    )
    .unwrap();
    let stats = processor.process().unwrap();
    assert_eq!(stats.records_processed, 2);
}
