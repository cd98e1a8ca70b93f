//! Core data models for dataset profiling and column storage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Consensus classification of a dataset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Numeric,
    NonNumeric,
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Numeric)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Numeric => write!(f, "numeric"),
            FieldType::NonNumeric => write!(f, "non-numeric"),
        }
    }
}

/// A single parsed field value.
///
/// Replaces the bare `"-"` string convention at API boundaries; the
/// sentinel itself only appears in on-disk text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Missing,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// Metadata for one dataset field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name with any `name:type` annotation stripped.
    pub name: String,
    /// Measurement unit recovered from the header, if any.
    pub unit: Option<String>,
    /// Dataset-wide consensus type.
    pub field_type: FieldType,
}

/// One column of the parsed dataset, in record order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub descriptor: FieldDescriptor,
    pub values: Vec<String>,
}

/// Numeric projection of a plottable column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    pub unit: Option<String>,
    pub values: Vec<f64>,
}

/// Inferred shape of a dataset: dialect plus per-field descriptors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub delimiter: char,
    pub field_count: usize,
    /// Data records, excluding the header line.
    pub record_count: usize,
    pub descriptors: Vec<FieldDescriptor>,
}

impl DatasetProfile {
    /// True where the consensus type is numeric (plottable).
    pub fn plottable_mask(&self) -> Vec<bool> {
        self.descriptors
            .iter()
            .map(|d| d.field_type.is_numeric())
            .collect()
    }

    pub fn plottable_count(&self) -> usize {
        self.descriptors
            .iter()
            .filter(|d| d.field_type.is_numeric())
            .count()
    }
}

/// A fully parsed dataset in column-major form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub profile: DatasetProfile,
    pub columns: Vec<Column>,
}

/// Statistics returned after processing a dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub records_processed: usize,
    pub fields_per_record: usize,
    pub plottable_fields: usize,
    pub short_records: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, field_type: FieldType) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            unit: None,
            field_type,
        }
    }

    #[test]
    fn test_plottable_mask() {
        let profile = DatasetProfile {
            delimiter: ',',
            field_count: 3,
            record_count: 0,
            descriptors: vec![
                descriptor("time", FieldType::Numeric),
                descriptor("site", FieldType::NonNumeric),
                descriptor("value", FieldType::Numeric),
            ],
        };
        assert_eq!(profile.plottable_mask(), vec![true, false, true]);
        assert_eq!(profile.plottable_count(), 2);
    }

    #[test]
    fn test_value_missing() {
        assert!(Value::Missing.is_missing());
        assert!(!Value::Number(0.0).is_missing());
        assert!(!Value::Text("x".into()).is_missing());
    }
}
