//! Static catalogs and shared constants.
//!
//! Date/time format patterns and measurement unit symbols are fixed
//! catalogs consulted during inference; they are plain const data, never
//! mutated at runtime.

/// Ordered date/time patterns tried during temporal canonicalization.
///
/// A value must match one of these in full to be treated as a date/time
/// field. 12-hour patterns come first, then 24-hour patterns in
/// year-first and day-first orderings, each with and without seconds.
pub const DATE_TIME_FORMATS: [&str; 12] = [
    // 12-hour formats, slash and dash separators
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %I:%M:%S %p",
    "%m-%d-%Y %I:%M %p",
    // 24-hour formats, year-month-day ordering
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    // 24-hour formats, day-month-year ordering
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

/// Unit symbols recognized when extracting units from field suffixes.
pub const UNIT_SYMBOLS: [&str; 45] = [
    // SI base units
    "m", "kg", "s", "A", "K", "mol", "cd",
    // prefixed units
    "mm", "cm", "km", "ms", "us", "ns", "MHz", "GHz", "kJ", "mW", "kW",
    // compound units
    "m/s", "m/s^2", "kg/m^3", "W/m^2", "A/m^2", "mol/m^3", "cd/m^2",
    // named derived units
    "Ohm", "Pa", "N", "J", "Hz", "W", "V", "F", "C", "T", "H", "lx", "Bq",
    "Gy", "Sv", "kat",
    // rate units
    "km/h", "mph", "g/cm^3", "l/min",
];

/// Sentinel and placeholder tokens shared across the pipeline.
pub mod sentinels {
    /// On-disk marker for a missing value.
    pub const MISSING: &str = "-";

    /// Token inserted between adjacent delimiters during repair.
    pub const PLACEHOLDER: &str = "0";

    /// Replacement written for missing or mismatched numeric fields.
    pub const NUMERIC_FILL: &str = "0.0";
}

/// File extensions considered dataset candidates during discovery.
pub const DATASET_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Check whether a suffix is a recognized unit symbol.
pub fn is_known_unit(symbol: &str) -> bool {
    UNIT_SYMBOLS.contains(&symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(DATE_TIME_FORMATS.len(), 12);
        assert_eq!(UNIT_SYMBOLS.len(), 45);
    }

    #[test]
    fn test_known_units() {
        assert!(is_known_unit("m/s^2"));
        assert!(is_known_unit("Pa"));
        assert!(!is_known_unit("parsecs"));
        assert!(!is_known_unit(""));
    }
}
