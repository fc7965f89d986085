//! Entropy-gain scoring and thresholded subset selection.
//!
//! Information gain measures how much observing a feature's category reduces
//! uncertainty about a label; symmetric uncertainty normalizes the gain by
//! the two marginal entropies so scores are comparable across features.
//! Gains are summed across labels into one score per feature, and the final
//! subset keeps features whose standardized score magnitude falls below the
//! mean magnitude.
use ndarray::Array2;

use crate::config::SelectionConfig;
use crate::data_handling::Dataset;
use crate::discretize::{build_discretizer, discretize_features};
use crate::entropy::{
    conditional_entropy, entropies, feature_distributions, label_distributions,
};
use crate::stats::{mean_absolute, standardize_by_variance};

/// Information gain and symmetric uncertainty for every (label, feature) pair.
///
/// # Arguments
///
/// * `label_entropies` - `H(label_k)` per label
/// * `cond` - `H(label_k | feature_i)` table, shape (n_labels, n_features)
/// * `feature_entropies` - `H(feature_i)` per feature
///
/// # Returns
///
/// A tuple containing:
/// - The gain table `H(label_k) - H(label_k | feature_i)`.
/// - The uncertainty table `2 * gain / (H(feature_i) + H(label_k))`, defined
///   as 0 when both marginal entropies are 0.
/// - The aggregated score per feature, summed across all labels.
pub fn gain_and_uncertainty(
    label_entropies: &[f64],
    cond: &Array2<f64>,
    feature_entropies: &[f64],
) -> (Array2<f64>, Array2<f64>, Vec<f64>) {
    let (n_labels, n_features) = cond.dim();

    let mut gain = Array2::zeros((n_labels, n_features));
    let mut uncertainty = Array2::zeros((n_labels, n_features));
    for k in 0..n_labels {
        for i in 0..n_features {
            let g = label_entropies[k] - cond[(k, i)];
            gain[(k, i)] = g;

            let denom = feature_entropies[i] + label_entropies[k];
            uncertainty[(k, i)] = if denom == 0.0 { 0.0 } else { 2.0 * g / denom };
        }
    }

    let aggregated: Vec<f64> = (0..n_features)
        .map(|i| (0..n_labels).map(|k| gain[(k, i)]).sum())
        .collect();

    (gain, uncertainty, aggregated)
}

/// Threshold the aggregated scores into a selected index set.
///
/// Scores are standardized by `(s - mean) / population_variance`, the
/// threshold is the mean absolute standardized score, and every feature with
/// `|z| < threshold` is kept, in ascending index order. This retains
/// moderately-scored features and drops both extremes; callers wanting a
/// conventional top-k ranking should sort on the aggregated scores instead.
///
/// # Returns
///
/// A tuple containing the selected indices, the standardized scores, and the
/// threshold value.
pub fn select(scores: &[f64]) -> (Vec<usize>, Vec<f64>, f64) {
    let z_scores = standardize_by_variance(scores);
    let threshold = mean_absolute(&z_scores);

    let selected = z_scores
        .iter()
        .enumerate()
        .filter(|(_, z)| z.abs() < threshold)
        .map(|(i, _)| i)
        .collect();

    (selected, z_scores, threshold)
}

/// Everything a selection run produces: the selected index set plus the
/// intermediate tables, kept for diagnostics and downstream inspection.
#[derive(Debug, Clone)]
pub struct SelectionReport {
    /// Selected feature indices, ascending, a subset of [0, n_features).
    pub selected: Vec<usize>,
    /// `H(feature_i)` per feature.
    pub feature_entropies: Vec<f64>,
    /// `H(label_k)` per label.
    pub label_entropies: Vec<f64>,
    /// `H(label_k | feature_i)`, shape (n_labels, n_features).
    pub conditional_entropy: Array2<f64>,
    /// Information gain per (label, feature) pair.
    pub gain: Array2<f64>,
    /// Symmetric uncertainty per (label, feature) pair.
    pub uncertainty: Array2<f64>,
    /// Gain summed across labels, one score per feature.
    pub aggregated_gain: Vec<f64>,
    /// Standardized aggregated gains.
    pub z_scores: Vec<f64>,
    /// Mean absolute standardized gain, the selection cut-off.
    pub threshold: f64,
}

/// A struct for selecting features by aggregated entropy gain.
///
/// Runs the full pipeline over a validated `Dataset`: discretization,
/// distribution and entropy estimation, the conditional-entropy table, gain
/// aggregation, and the threshold selection.
pub struct EntropyGainSelector {
    config: SelectionConfig,
}

impl EntropyGainSelector {
    /// Creates a new selector with the given configuration.
    pub fn new(config: SelectionConfig) -> Self {
        EntropyGainSelector { config }
    }

    /// Fits the selector and returns the full selection report.
    ///
    /// The dataset has already been validated on construction, so every
    /// stage here runs to completion; degenerate inputs (constant features,
    /// single-class labels) flow through as low-information scores rather
    /// than failing.
    pub fn fit(&self, data: &Dataset) -> SelectionReport {
        let discretizer = build_discretizer(&self.config);
        log::info!(
            "Discretizing {} feature columns with {}",
            data.n_features(),
            discretizer.name()
        );
        let categories = discretize_features(&data.x, discretizer.as_ref());

        let feature_dists = feature_distributions(&categories);
        let feature_entropies = entropies(&feature_dists);

        let label_dists = label_distributions(&data.y);
        let label_entropies = entropies(&label_dists);

        log::debug!(
            "Computing conditional entropy for {} labels x {} features",
            data.n_labels(),
            data.n_features()
        );
        let cond = conditional_entropy(&feature_dists, &categories, &data.y);

        let (gain, uncertainty, aggregated_gain) =
            gain_and_uncertainty(&label_entropies, &cond, &feature_entropies);

        let (selected, z_scores, threshold) = select(&aggregated_gain);
        log::info!(
            "Selected {} of {} features (threshold {:.4})",
            selected.len(),
            data.n_features(),
            threshold
        );

        SelectionReport {
            selected,
            feature_entropies,
            label_entropies,
            conditional_entropy: cond,
            gain,
            uncertainty,
            aggregated_gain,
            z_scores,
            threshold,
        }
    }
}
