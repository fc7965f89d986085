//! Data structures and helpers for in-memory multi-label datasets.
//!
//! This module defines `Dataset`, the validated entry point of the pipeline,
//! and the column-projection helpers used to carry a selected feature subset
//! over to a downstream classifier's train and evaluation matrices.
use ndarray::{Array2, Axis};

use crate::error::SelectionError;

/// A rectangular multi-label dataset: one row per instance.
///
/// `x` holds continuous feature values, `y` holds binary label values.
/// Label columns are read through `!= 0`, so any nonzero value counts as a
/// positive label occurrence.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array2<i32>,
}

impl Dataset {
    /// Validate and wrap a feature matrix and a label matrix.
    ///
    /// This is the single validation point of the pipeline: shape and
    /// emptiness problems are reported here, never mid-computation.
    ///
    /// # Arguments
    ///
    /// * `x` - Feature matrix, shape (n_instances, n_features)
    /// * `y` - Binary label matrix, shape (n_instances, n_labels)
    ///
    /// # Returns
    ///
    /// A `Dataset`, or a `SelectionError` describing the first violation.
    pub fn new(x: Array2<f64>, y: Array2<i32>) -> Result<Dataset, SelectionError> {
        if x.nrows() == 0 {
            return Err(SelectionError::EmptyInput { what: "instances" });
        }
        if x.ncols() == 0 {
            return Err(SelectionError::EmptyInput { what: "features" });
        }
        if y.ncols() == 0 {
            return Err(SelectionError::EmptyInput { what: "labels" });
        }
        if x.nrows() != y.nrows() {
            return Err(SelectionError::ShapeMismatch {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            });
        }
        Ok(Dataset { x, y })
    }

    pub fn n_instances(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn n_labels(&self) -> usize {
        self.y.ncols()
    }

    pub fn log_input_data_summary(&self) {
        println!("----- Input Data Summary -----");
        println!(
            "Info: {} instances with {} feature columns",
            self.n_instances(),
            self.n_features()
        );
        println!("Info: {} label columns", self.n_labels());
        println!("-------------------------------");
    }

    /// Project the dataset onto a subset of feature columns.
    ///
    /// The label matrix is carried over unchanged; indices must lie in
    /// `[0, n_features)`.
    pub fn select_features(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: project_columns(&self.x, indices),
            y: self.y.clone(),
        }
    }
}

/// Project a bare feature matrix onto the given columns, preserving order.
///
/// Used to slice both the training matrix and the evaluation matrix with the
/// same selected index set.
pub fn project_columns(x: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    x.select(Axis(1), indices)
}
