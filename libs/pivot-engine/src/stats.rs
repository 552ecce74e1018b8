//! Sample statistics used by wire detection.

use config::constants::IQR_MIN_SAMPLES;

/// Median of an already sorted slice; `None` when empty.
pub fn median_sorted(sorted: &[u32]) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(f64::from(sorted[n / 2])),
        _ => Some((f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0),
    }
}

/// Sorts `samples` and drops values outside `[q1 - 1.5·iqr, q3 + 1.5·iqr]`.
///
/// Quartiles are the medians of the lower and upper halves, excluding the
/// middle sample for odd counts. Fewer than four samples are returned
/// sorted but unfiltered.
///
/// # Example
///
/// ```rust
/// use pivot_engine::stats::exclude_outliers_iqr;
///
/// assert_eq!(exclude_outliers_iqr(vec![4, 3, 40, 3, 4, 3]), vec![3, 3, 3, 4, 4]);
/// assert_eq!(exclude_outliers_iqr(vec![9, 1]), vec![1, 9]);
/// ```
pub fn exclude_outliers_iqr(mut samples: Vec<u32>) -> Vec<u32> {
    samples.sort_unstable();
    let n = samples.len();
    if n < IQR_MIN_SAMPLES {
        return samples;
    }

    let (Some(q1), Some(q3)) = (
        median_sorted(&samples[..n / 2]),
        median_sorted(&samples[(n + 1) / 2..]),
    ) else {
        return samples;
    };
    let iqr = q3 - q1;
    let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    samples.retain(|&v| (lower..=upper).contains(&f64::from(v)));
    samples
}

/// Arithmetic mean; zero for an empty slice.
pub fn mean(samples: &[u32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|&v| f64::from(v)).sum::<f64>() / samples.len() as f64
}
