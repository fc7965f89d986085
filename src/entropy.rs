//! Empirical distributions, Shannon entropy, and conditional entropy.
//!
//! Distributions are maps from an observed category id to its empirical
//! probability. Categories that never occur are simply absent, so every
//! stored probability is strictly positive and `entropy` never has to guard
//! against `ln(0)`. The conditional-entropy table is the densest part of the
//! pipeline: for each (label, feature) pair it joins the feature's category
//! sequence with the label's binary sequence and accumulates the joint
//! entropy contributions per category.
use std::collections::HashMap;

use ndarray::Array2;
use rayon::prelude::*;

/// Count occurrences per distinct category and divide by the total count.
///
/// The returned map holds only categories that actually occur, each with a
/// probability in (0, 1]; the values sum to 1.
pub fn estimate_distribution(labeling: &[i32]) -> HashMap<i32, f64> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &category in labeling {
        *counts.entry(category).or_insert(0) += 1;
    }

    let n = labeling.len() as f64;
    counts
        .into_iter()
        .map(|(category, count)| (category, count as f64 / n))
        .collect()
}

/// Shannon entropy `H = -Σ p ln p` of an empirical distribution.
///
/// Non-negative; exactly 0 when the distribution is degenerate (a single
/// category with probability 1). No `ln(0)` branch is needed because the
/// distribution never stores zero-probability entries.
pub fn entropy(dist: &HashMap<i32, f64>) -> f64 {
    let mut ent = 0.0;
    for &p in dist.values() {
        ent -= p * p.ln();
    }
    ent
}

/// One empirical distribution per feature category labeling.
pub fn feature_distributions(categories: &[Vec<i32>]) -> Vec<HashMap<i32, f64>> {
    categories
        .iter()
        .map(|labeling| estimate_distribution(labeling))
        .collect()
}

/// One empirical distribution per label column, over binarized values.
pub fn label_distributions(y: &Array2<i32>) -> Vec<HashMap<i32, f64>> {
    (0..y.ncols())
        .map(|k| {
            let binarized: Vec<i32> = y.column(k).iter().map(|&v| (v != 0) as i32).collect();
            estimate_distribution(&binarized)
        })
        .collect()
}

/// Entropy of each distribution in a list.
pub fn entropies(dists: &[HashMap<i32, f64>]) -> Vec<f64> {
    dists.iter().map(entropy).collect()
}

/// Per-category occurrence counts for one (feature, label) join.
#[derive(Default)]
struct CategoryCount {
    total: usize,
    ones: usize,
}

/// Conditional entropy `H(label_k | feature_i)` for every label/feature pair.
///
/// # Arguments
///
/// * `feature_dists` - Unconditional category distribution of each feature
/// * `categories` - Category labeling of each feature, one id per instance
/// * `y` - Binary label matrix, shape (n_instances, n_labels)
///
/// # Returns
///
/// A table of shape (n_labels, n_features). Entries are always finite:
/// degenerate conditional probabilities (exactly 0 or 1) contribute the
/// `0 * ln 0` limit of zero instead of being evaluated.
pub fn conditional_entropy(
    feature_dists: &[HashMap<i32, f64>],
    categories: &[Vec<i32>],
    y: &Array2<i32>,
) -> Array2<f64> {
    let n_labels = y.ncols();
    let n_features = categories.len();

    let rows: Vec<Vec<f64>> = (0..n_labels)
        .into_par_iter()
        .map(|k| {
            let label: Vec<bool> = y.column(k).iter().map(|&v| v != 0).collect();
            (0..n_features)
                .map(|i| conditional_entropy_single(&feature_dists[i], &categories[i], &label))
                .collect()
        })
        .collect();

    Array2::from_shape_vec((n_labels, n_features), rows.concat())
        .expect("conditional entropy table: shape mismatch")
}

/// Conditional entropy of one label given one feature's categories.
fn conditional_entropy_single(
    dist: &HashMap<i32, f64>,
    categories: &[i32],
    label: &[bool],
) -> f64 {
    // Joint counts keyed by category id: total occurrences and occurrences
    // with label 1, gathered in one zipped scan.
    let mut counts: HashMap<i32, CategoryCount> = HashMap::new();
    for (&category, &is_positive) in categories.iter().zip(label) {
        let entry = counts.entry(category).or_default();
        entry.total += 1;
        if is_positive {
            entry.ones += 1;
        }
    }

    let mut joint = 0.0;
    for (category, count) in &counts {
        let p1 = count.ones as f64 / count.total as f64;
        let p0 = 1.0 - p1;
        let p_category = dist[category];

        // A conditional probability of exactly 0 contributes exactly 0 (the
        // 0*ln(0) limit); ln is only ever evaluated on positive input.
        if p1 > 0.0 {
            joint -= p1 * p_category * p1.ln();
        }
        if p0 > 0.0 {
            joint -= p0 * p_category * p0.ln();
        }
    }
    joint
}
