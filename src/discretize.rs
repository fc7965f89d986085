//! One-dimensional discretization of continuous feature columns.
//!
//! Each feature column is clustered independently on the real line with a
//! density-based procedure: dense value ranges become categories, sparse
//! values are assigned the shared noise category. Only partition membership
//! matters downstream, so category ids carry no ordering.
use ndarray::Array2;
use rayon::prelude::*;

use crate::config::{DiscretizerKind, SelectionConfig};

/// Reserved category id for instances that belong to no dense region.
pub const NOISE_CATEGORY: i32 = -1;

/// Internal marker for instances not yet visited by the clustering loop.
const UNLABELED: i32 = -2;

/// Contract for mapping one feature column to a category labeling.
///
/// Implementations must return exactly one category id per instance, using
/// `NOISE_CATEGORY` for instances outside every dense region. The pipeline
/// depends only on this contract, so alternative discretization schemes can
/// be swapped in behind the trait.
pub trait Discretizer: Send + Sync {
    fn discretize(&self, column: &[f64]) -> Vec<i32>;

    /// Optional human readable name for the discretizer
    fn name(&self) -> &str {
        "discretizer"
    }
}

/// Density-based clustering on the real line with a fixed neighborhood
/// radius and minimum-points threshold.
///
/// Clusters are numbered 0, 1, 2, ... in order of discovery; noise points
/// get `NOISE_CATEGORY`. A constant column collapses to a single cluster
/// (or to all-noise when the column is shorter than `min_samples`), which is
/// a valid low-information labeling rather than an error.
pub struct DbscanDiscretizer {
    eps: f64,
    min_samples: usize,
}

impl DbscanDiscretizer {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        DbscanDiscretizer { eps, min_samples }
    }

    /// Indices of all values within `eps` of `column[i]`, including `i` itself.
    fn region_query(&self, column: &[f64], i: usize) -> Vec<usize> {
        let center = column[i];
        column
            .iter()
            .enumerate()
            .filter(|(_, &v)| (v - center).abs() <= self.eps)
            .map(|(j, _)| j)
            .collect()
    }

    /// Expand a cluster from a core point, adopting reachable neighbors.
    fn expand_cluster(
        &self,
        column: &[f64],
        labels: &mut [i32],
        point: usize,
        neighbors: &mut Vec<usize>,
        cluster_id: i32,
    ) {
        labels[point] = cluster_id;

        let mut i = 0;
        while i < neighbors.len() {
            let neighbor = neighbors[i];

            if labels[neighbor] == UNLABELED {
                labels[neighbor] = cluster_id;

                // Core neighbors contribute their own neighborhoods to the
                // expansion frontier.
                let neighbor_neighbors = self.region_query(column, neighbor);
                if neighbor_neighbors.len() >= self.min_samples {
                    for &nn in &neighbor_neighbors {
                        if !neighbors.contains(&nn) {
                            neighbors.push(nn);
                        }
                    }
                }
            } else if labels[neighbor] == NOISE_CATEGORY {
                // Border point: previously-marked noise joins the cluster.
                labels[neighbor] = cluster_id;
            }

            i += 1;
        }
    }
}

impl Discretizer for DbscanDiscretizer {
    fn discretize(&self, column: &[f64]) -> Vec<i32> {
        let mut labels = vec![UNLABELED; column.len()];
        let mut cluster_id = 0;

        for i in 0..column.len() {
            if labels[i] != UNLABELED {
                continue;
            }

            let mut neighbors = self.region_query(column, i);

            if neighbors.len() < self.min_samples {
                labels[i] = NOISE_CATEGORY;
                continue;
            }

            self.expand_cluster(column, &mut labels, i, &mut neighbors, cluster_id);
            cluster_id += 1;
        }

        labels
    }

    fn name(&self) -> &str {
        "dbscan"
    }
}

/// Build a boxed discretizer from a `SelectionConfig`.
pub fn build_discretizer(config: &SelectionConfig) -> Box<dyn Discretizer> {
    match config.discretizer {
        DiscretizerKind::Dbscan { eps, min_samples } => {
            Box::new(DbscanDiscretizer::new(eps, min_samples))
        }
    }
}

/// Discretize every feature column of `x` independently.
///
/// Returns one category labeling per feature, in column order. The
/// per-column runs share no state, so they execute as a rayon fork-join
/// with results collected once all columns are done.
pub fn discretize_features(x: &Array2<f64>, discretizer: &dyn Discretizer) -> Vec<Vec<i32>> {
    (0..x.ncols())
        .into_par_iter()
        .map(|j| {
            let column = x.column(j).to_vec();
            discretizer.discretize(&column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn separates_two_dense_groups_and_noise() {
        let column = vec![1.0, 1.1, 1.2, 5.0, 5.1, 5.2, 10.0];
        let discretizer = DbscanDiscretizer::new(0.5, 2);
        let labels = discretizer.discretize(&column);

        assert_eq!(labels.len(), column.len());
        // First group shares one cluster, second group another.
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
        // The isolated point is noise.
        assert_eq!(labels[6], NOISE_CATEGORY);
    }

    #[test]
    fn constant_column_collapses_to_single_cluster() {
        let column = vec![5.0; 8];
        let discretizer = DbscanDiscretizer::new(0.5, 5);
        let labels = discretizer.discretize(&column);
        assert!(labels.iter().all(|&c| c == 0), "labels = {:?}", labels);
    }

    #[test]
    fn column_below_min_samples_is_all_noise() {
        let column = vec![1.0, 2.0, 3.0];
        let discretizer = DbscanDiscretizer::new(0.1, 5);
        let labels = discretizer.discretize(&column);
        assert!(labels.iter().all(|&c| c == NOISE_CATEGORY));
    }

    #[test]
    fn discretize_features_runs_per_column() {
        let x = array![
            [1.0, 10.0],
            [1.0, 10.0],
            [1.0, 20.0],
            [2.0, 20.0],
            [2.0, 30.0],
            [2.0, 30.0],
        ];
        let discretizer = DbscanDiscretizer::new(0.5, 2);
        let categories = discretize_features(&x, &discretizer);

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].len(), 6);
        // Column 0 splits cleanly into two categories.
        assert_eq!(categories[0][0], categories[0][1]);
        assert_ne!(categories[0][0], categories[0][3]);
    }

    #[test]
    fn factory_builds_configured_discretizer() {
        let config = crate::config::SelectionConfig::default();
        let discretizer = build_discretizer(&config);
        assert_eq!(discretizer.name(), "dbscan");
    }
}
