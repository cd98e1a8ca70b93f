//! Sorting and descriptive statistics over numeric columns.
//!
//! Sorts require NaN-free input so ordering is total; callers validate
//! with [`ensure_finite_order`] first.

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

const SIGN_BIT: u64 = 1 << 63;

/// Reject NaN values before sorting or binning.
pub fn ensure_finite_order(name: &str, values: &[f64]) -> Result<()> {
    for value in values {
        if value.is_nan() {
            return Err(PrepError::UnparseableNumeric {
                field: name.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Stable top-down merge sort.
pub fn merge_sort(values: &mut [f64]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    let mut scratch = values.to_vec();
    merge_sort_into(values, &mut scratch);
}

fn merge_sort_into(values: &mut [f64], scratch: &mut [f64]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    merge_sort_into(&mut values[..mid], &mut scratch[..mid]);
    merge_sort_into(&mut values[mid..], &mut scratch[mid..]);

    let (mut left, mut right) = (0, mid);
    for slot in scratch.iter_mut().take(len) {
        if right >= len || (left < mid && values[left] <= values[right]) {
            *slot = values[left];
            left += 1;
        } else {
            *slot = values[right];
            right += 1;
        }
    }
    values.copy_from_slice(&scratch[..len]);
}

// Order-preserving bijection from f64 bits to u64: negatives flip all
// bits, non-negatives flip the sign bit. Unsigned order of the keys is
// then the numeric order of the doubles.
fn sort_key(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits & SIGN_BIT != 0 { !bits } else { bits | SIGN_BIT }
}

fn from_sort_key(key: u64) -> f64 {
    let bits = if key & SIGN_BIT != 0 {
        key & !SIGN_BIT
    } else {
        !key
    };
    f64::from_bits(bits)
}

/// LSD radix sort over the IEEE-754 bit patterns, one byte per pass.
pub fn radix_sort(values: &mut [f64]) {
    if values.len() < 2 {
        return;
    }
    let mut keys: Vec<u64> = values.iter().map(|&v| sort_key(v)).collect();
    let mut buffer = vec![0u64; keys.len()];

    for pass in 0..8 {
        let shift = pass * 8;
        let mut counts = [0usize; 256];
        for &key in &keys {
            counts[((key >> shift) & 0xff) as usize] += 1;
        }
        let mut offsets = [0usize; 256];
        let mut total = 0;
        for (offset, &count) in offsets.iter_mut().zip(&counts) {
            *offset = total;
            total += count;
        }
        for &key in &keys {
            let bucket = ((key >> shift) & 0xff) as usize;
            buffer[offsets[bucket]] = key;
            offsets[bucket] += 1;
        }
        std::mem::swap(&mut keys, &mut buffer);
    }

    for (value, &key) in values.iter_mut().zip(&keys) {
        *value = from_sort_key(key);
    }
}

fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Linearly interpolated percentile over sorted values, p in [0, 100].
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    let weight = rank - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * weight
}

/// Interquartile range via the median-of-halves method: the median
/// itself is excluded from both halves when the count is odd.
pub fn interquartile_range(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n < 2 {
        return 0.0;
    }
    let lower = &sorted[..n / 2];
    let upper = &sorted[n.div_ceil(2)..];
    median_of(upper) - median_of(lower)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation.
pub fn std_deviation(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// Histogram binning derived with the Freedman-Diaconis rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBinning {
    pub bin_count: usize,
    pub bin_width: f64,
    pub min: f64,
    pub max: f64,
}

/// Freedman-Diaconis binning over sorted values. Degenerate spreads
/// (constant data, zero IQR) collapse to a single bin.
pub fn histogram_binning(sorted: &[f64]) -> Option<HistogramBinning> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let min = sorted[0];
    let max = sorted[n - 1];
    let iqr = interquartile_range(sorted);
    let width = 2.0 * iqr / (n as f64).cbrt();
    if width <= 0.0 || max == min {
        return Some(HistogramBinning {
            bin_count: 1,
            bin_width: (max - min).max(1.0),
            min,
            max,
        });
    }
    let bin_count = ((max - min) / width).ceil() as usize;
    Some(HistogramBinning {
        bin_count: bin_count.max(1),
        bin_width: width,
        min,
        max,
    })
}

/// Descriptive summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub iqr: f64,
    pub bin_count: usize,
}

/// Summarize a numeric column. Sorts a copy of the values; NaN input
/// is rejected before ordering.
pub fn summarize(name: &str, values: &[f64]) -> Result<ColumnSummary> {
    ensure_finite_order(name, values)?;
    let mut sorted = values.to_vec();
    radix_sort(&mut sorted);
    let binning = histogram_binning(&sorted);
    Ok(ColumnSummary {
        name: name.to_string(),
        count: sorted.len(),
        mean: mean(&sorted),
        std_dev: std_deviation(&sorted),
        min: sorted.first().copied().unwrap_or(0.0),
        max: sorted.last().copied().unwrap_or(0.0),
        iqr: interquartile_range(&sorted),
        bin_count: binning.map(|b| b.bin_count).unwrap_or(0),
    })
}

/// Bin counts for sorted values under the given binning.
pub fn histogram(sorted: &[f64], binning: &HistogramBinning) -> Vec<usize> {
    let mut bins = vec![0usize; binning.bin_count];
    for &value in sorted {
        let index = ((value - binning.min) / binning.bin_width) as usize;
        let index = index.min(binning.bin_count - 1);
        bins[index] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort() {
        let mut values = vec![3.0, -1.5, 2.2, 0.0, -1.5];
        merge_sort(&mut values);
        assert_eq!(values, vec![-1.5, -1.5, 0.0, 2.2, 3.0]);
    }

    #[test]
    fn test_radix_sort_matches_numeric_order() {
        let mut values = vec![3.0, -1.5, 2.2, 0.0, -1.5];
        radix_sort(&mut values);
        assert_eq!(values, vec![-1.5, -1.5, 0.0, 2.2, 3.0]);
    }

    #[test]
    fn test_radix_sort_negatives_and_zero() {
        let mut values = vec![-0.0, 1e-300, -1e300, 1e300, -2.5];
        radix_sort(&mut values);
        assert_eq!(values, vec![-1e300, -2.5, -0.0, 1e-300, 1e300]);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        for v in [-3.5, -0.0, 0.0, 42.0, f64::MIN, f64::MAX] {
            let back = from_sort_key(sort_key(v));
            assert_eq!(back.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_ensure_finite_order() {
        assert!(ensure_finite_order("v", &[1.0, 2.0]).is_ok());
        assert!(matches!(
            ensure_finite_order("v", &[1.0, f64::NAN]),
            Err(PrepError::UnparseableNumeric { .. })
        ));
    }

    #[test]
    fn test_quartiles_even() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(interquartile_range(&sorted), 2.0);
    }

    #[test]
    fn test_quartiles_odd_excludes_median() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // halves are [1,2] and [4,5]
        assert_eq!(interquartile_range(&sorted), 3.0);
    }

    #[test]
    fn test_percentile() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&sorted, 0.0), 10.0);
        assert_eq!(percentile(&sorted, 100.0), 40.0);
        assert_eq!(percentile(&sorted, 50.0), 25.0);
    }

    #[test]
    fn test_mean_and_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        let sd = std_deviation(&values);
        assert!((sd - 2.138089935).abs() < 1e-6);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize("v", &[3.0, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.iqr, 2.0);
        assert!(summary.bin_count >= 1);
    }

    #[test]
    fn test_histogram_binning_constant_data() {
        let sorted = [5.0, 5.0, 5.0];
        let binning = histogram_binning(&sorted).unwrap();
        assert_eq!(binning.bin_count, 1);
        assert_eq!(histogram(&sorted, &binning), vec![3]);
    }

    #[test]
    fn test_histogram_counts_cover_all_values() {
        let mut values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        merge_sort(&mut values);
        let binning = histogram_binning(&values).unwrap();
        let bins = histogram(&values, &binning);
        assert_eq!(bins.iter().sum::<usize>(), values.len());
    }
}
