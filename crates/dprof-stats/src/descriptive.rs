//! Scalar statistics over a slice of non-null values.
//!
//! Every function returns `NaN` when the statistic is undefined for the input
//! (empty slice, or fewer than two values for sample variance).

use dprof_model::NumericStats;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n - 1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    sum_sq / (values.len() - 1) as f64
}

pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Quantile of already sorted values using linear interpolation between the
/// two nearest ranks (`pos = q * (n - 1)`).
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}

/// All numeric statistics for one column in a single pass over a sorted copy.
pub fn numeric_stats(values: &[f64]) -> NumericStats {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted.first().copied().unwrap_or(f64::NAN);
    let max = sorted.last().copied().unwrap_or(f64::NAN);
    let var = variance(&sorted);
    NumericStats {
        mean: mean(&sorted),
        median: quantile_sorted(&sorted, 0.5),
        std: var.sqrt(),
        var,
        range: max - min,
        p0: min,
        p25: quantile_sorted(&sorted, 0.25),
        p50: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        p100: max,
    }
}

/// Rounds half to even at the given number of decimals; `NaN` passes through.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
