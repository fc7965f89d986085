//! Small numeric helpers shared by the selection stages.
//!
//! Moments come from `statrs`; the standardization here intentionally
//! divides by the population variance rather than the standard deviation,
//! because the selection threshold downstream is calibrated to that scale.
use statrs::statistics::Statistics;

/// Standardize values as `(v - mean) / population_variance`.
///
/// Note the normalizer: variance, not standard deviation. Substituting the
/// standard deviation would change the numeric scale the selection threshold
/// operates on. An all-equal input has zero variance and standardizes to
/// all zeros instead of dividing by zero.
pub fn standardize_by_variance(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mean = values.iter().mean();
    let var = values.iter().population_variance();
    if var == 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|&v| (v - mean) / var).collect()
}

/// Mean of the absolute values.
pub fn mean_absolute(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}
