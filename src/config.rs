//! Configuration for dataset preparation.

use serde::{Deserialize, Serialize};

/// How the missing-value sentinel `-` is rendered in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Write `0.0` for missing values in every field. Legacy-compatible
    /// default, including for non-numeric fields.
    ZeroFill,
    /// Keep the `-` sentinel in non-numeric fields; numeric fields are
    /// still zero-filled so downstream parsing stays total.
    KeepSentinel,
}

/// Tunable processing behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Missing-value rendering policy.
    pub missing_policy: MissingPolicy,
    /// Pad short records with empty slots and warn, rather than fail.
    pub lenient: bool,
    /// Maximum number of lines sampled for delimiter inference.
    pub sample_size: usize,
    /// Write the plottable (numeric) projection alongside parsed columns.
    pub write_plottable: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            missing_policy: MissingPolicy::ZeroFill,
            lenient: true,
            sample_size: 100,
            write_plottable: true,
        }
    }
}

impl PrepConfig {
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_write_plottable(mut self, write_plottable: bool) -> Self {
        self.write_plottable = write_plottable;
        self
    }
}
