//! Column-major dataset parsing and the plottable projection.

use tracing::{debug, warn};

use crate::constants::is_known_unit;
use crate::delimiter::infer_secondary_delimiter;
use crate::error::{PrepError, Result};
use crate::models::{Column, Dataset, DatasetProfile, FieldDescriptor, NumericColumn};
use crate::scan::TokenCursor;
use crate::typing::consensus_types;
use crate::units::extract_units;

/// Split header fields into names and optional unit annotations.
///
/// A `name:annotation` pair is split on the secondary delimiter; the
/// annotation becomes the field's unit when it is a catalog symbol,
/// otherwise it is treated as a type tag and discarded.
pub fn parse_header(
    header: &str,
    delimiter: char,
    secondary: Option<char>,
) -> Vec<(String, Option<String>)> {
    let delimiters = [delimiter];
    TokenCursor::new(header, &delimiters)
        .map(|field| {
            let (name, annotation) = match secondary.and_then(|s| field.split_once(s)) {
                Some((name, annotation)) => (name, Some(annotation)),
                None => (field, None),
            };
            let unit = annotation
                .filter(|a| is_known_unit(a))
                .map(|a| a.to_string());
            (name.to_string(), unit)
        })
        .collect()
}

/// Derive the dataset profile from sanitized lines: field count from
/// the header, consensus types from the data records, units from the
/// header annotations.
pub fn profile_dataset(lines: &[String], delimiter: char) -> DatasetProfile {
    let header = lines.first().map(String::as_str).unwrap_or("");
    let records = lines.get(1..).unwrap_or(&[]);

    let secondary = infer_secondary_delimiter([header], delimiter);
    let names = parse_header(header, delimiter, secondary);
    let field_count = names.len();

    // Units missing from the header may still ride on the first data
    // record, as in "9.8m/s^2".
    let record_units = records
        .first()
        .map(|record| extract_units(record, delimiter))
        .unwrap_or_default();

    let scheme = consensus_types(records.iter().map(String::as_str), delimiter, field_count);
    let descriptors = names
        .into_iter()
        .zip(scheme)
        .enumerate()
        .map(|(index, ((name, unit), field_type))| FieldDescriptor {
            name,
            unit: unit.or_else(|| record_units.get(index).and_then(|(_, unit)| unit.clone())),
            field_type,
        })
        .collect();

    debug!(field_count, records = records.len(), "profiled dataset");
    DatasetProfile {
        delimiter,
        field_count,
        record_count: records.len(),
        descriptors,
    }
}

/// Parse formatted records into an owned column-major table.
///
/// A record yielding fewer tokens than the profile's field count leaves
/// its remaining slots empty. Under `lenient` that is a warning; strict
/// mode fails with the offending line number.
pub fn parse_columns(
    lines: &[String],
    profile: &DatasetProfile,
    lenient: bool,
) -> Result<Dataset> {
    let delimiters = [profile.delimiter];
    let mut columns: Vec<Column> = profile
        .descriptors
        .iter()
        .map(|descriptor| Column {
            descriptor: descriptor.clone(),
            values: Vec::with_capacity(profile.record_count),
        })
        .collect();

    for (index, record) in lines.iter().skip(1).enumerate() {
        let tokens: Vec<&str> = TokenCursor::new(record, &delimiters).collect();
        if tokens.len() < profile.field_count {
            if lenient {
                warn!(
                    line = index + 2,
                    expected = profile.field_count,
                    found = tokens.len(),
                    "short record, padding remaining slots"
                );
            } else {
                return Err(PrepError::ShortRecord {
                    line: index + 2,
                    expected: profile.field_count,
                    found: tokens.len(),
                });
            }
        }
        for (column, slot) in columns.iter_mut().zip(0..profile.field_count) {
            column
                .values
                .push(tokens.get(slot).copied().unwrap_or("").to_string());
        }
    }

    Ok(Dataset {
        profile: profile.clone(),
        columns,
    })
}

/// Numeric projection of the plottable columns.
///
/// Formatted numeric columns should parse in full; anything that does
/// not is zero-filled under `lenient` and an error in strict mode.
pub fn numeric_columns(dataset: &Dataset, lenient: bool) -> Result<Vec<NumericColumn>> {
    let mut projected = Vec::with_capacity(dataset.profile.plottable_count());
    for column in &dataset.columns {
        if !column.descriptor.field_type.is_numeric() {
            continue;
        }
        let mut values = Vec::with_capacity(column.values.len());
        for value in &column.values {
            match value.parse::<f64>() {
                Ok(number) => values.push(number),
                Err(_) => {
                    if lenient {
                        warn!(
                            field = %column.descriptor.name,
                            value = %value,
                            "unparseable numeric value zero-filled"
                        );
                        values.push(0.0);
                    } else {
                        return Err(PrepError::UnparseableNumeric {
                            field: column.descriptor.name.clone(),
                            value: value.clone(),
                        });
                    }
                }
            }
        }
        projected.push(NumericColumn {
            name: column.descriptor.name.clone(),
            unit: column.descriptor.unit.clone(),
            values,
        });
    }
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_header_annotations() {
        let parsed = parse_header("time:numeric,volt:V,site", ',', Some(':'));
        assert_eq!(
            parsed,
            vec![
                ("time".to_string(), None),
                ("volt".to_string(), Some("V".to_string())),
                ("site".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_profile_dataset() {
        let data = lines(&["time,site,value", "60,alpha,1.5", "120,beta,2.5"]);
        let profile = profile_dataset(&data, ',');
        assert_eq!(profile.field_count, 3);
        assert_eq!(profile.record_count, 2);
        assert_eq!(
            profile
                .descriptors
                .iter()
                .map(|d| d.field_type)
                .collect::<Vec<_>>(),
            vec![
                FieldType::Numeric,
                FieldType::NonNumeric,
                FieldType::Numeric
            ]
        );
    }

    #[test]
    fn test_profile_units_from_first_record() {
        let data = lines(&["t,accel", "1,9.8m/s^2", "2,9.6m/s^2"]);
        let profile = profile_dataset(&data, ',');
        assert_eq!(profile.descriptors[1].unit.as_deref(), Some("m/s^2"));
    }

    #[test]
    fn test_parse_columns_column_major() {
        let data = lines(&["time,site", "60,alpha", "120,beta"]);
        let profile = profile_dataset(&data, ',');
        let dataset = parse_columns(&data, &profile, true).unwrap();
        assert_eq!(dataset.columns[0].values, vec!["60", "120"]);
        assert_eq!(dataset.columns[1].values, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_slot_shifts_trailing_fields() {
        // An empty slot left by a dropped non-numeric mismatch is
        // skipped by tokenization: trailing fields land one column to
        // the left and the last slot stays unset. Accepted lossy
        // behavior for mismatched fields.
        let data = lines(&["t,site,v", "1,alpha,2.5", "9,,3"]);
        let profile = profile_dataset(&data, ',');
        let dataset = parse_columns(&data, &profile, true).unwrap();
        assert_eq!(dataset.columns[1].values, vec!["alpha", "3"]);
        assert_eq!(dataset.columns[2].values, vec!["2.5", ""]);
    }

    #[test]
    fn test_parse_columns_short_record_strict() {
        let data = lines(&["a,b", "1,2", "3"]);
        let profile = profile_dataset(&data, ',');
        let err = parse_columns(&data, &profile, false).unwrap_err();
        assert!(matches!(
            err,
            PrepError::ShortRecord {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_parse_columns_short_record_lenient() {
        let data = lines(&["a,b", "1,2", "3"]);
        let profile = profile_dataset(&data, ',');
        let dataset = parse_columns(&data, &profile, true).unwrap();
        assert_eq!(dataset.columns[1].values, vec!["2", ""]);
    }

    #[test]
    fn test_numeric_projection() {
        let data = lines(&["t,site,v", "1,alpha,2.5", "2,beta,3.5"]);
        let profile = profile_dataset(&data, ',');
        let dataset = parse_columns(&data, &profile, true).unwrap();
        let numeric = numeric_columns(&dataset, true).unwrap();
        assert_eq!(numeric.len(), 2);
        assert_eq!(numeric[0].values, vec![1.0, 2.0]);
        assert_eq!(numeric[1].values, vec![2.5, 3.5]);
    }

    #[test]
    fn test_numeric_projection_strict_error() {
        let data = lines(&["t,v", "1,2", "3,oops"]);
        let mut profile = profile_dataset(&data, ',');
        // Force the second column numeric despite the bad value.
        profile.descriptors[1].field_type = FieldType::Numeric;
        let dataset = parse_columns(&data, &profile, true).unwrap();
        assert!(matches!(
            numeric_columns(&dataset, false),
            Err(PrepError::UnparseableNumeric { .. })
        ));
    }
}
