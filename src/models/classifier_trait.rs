use ndarray::Array2;

use crate::data_handling::{project_columns, Dataset};

/// A small trait abstraction for the downstream multi-label classifier.
/// The core pipeline only emits a feature index set; any supervised model
/// that trains on a feature matrix plus a multi-label target matrix can
/// consume it by implementing this contract.
pub trait MultiLabelClassifier {
    /// Fit the model on a feature matrix and a binary label matrix
    /// (rows are instances in both).
    fn fit(&mut self, x: &Array2<f64>, y: &Array2<i32>) -> anyhow::Result<()>;

    /// Predict a binary label matrix for new instances.
    fn predict(&self, x: &Array2<f64>) -> anyhow::Result<Array2<i32>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Train on the selected columns of `train` and predict on the same columns
/// of `eval_x`.
///
/// Both matrices are projected through the same index set so the classifier
/// sees a consistent feature space. The classifier is an explicit parameter
/// rather than shared state, so callers can evaluate several label subsets
/// or models side by side.
pub fn fit_predict_selected(
    classifier: &mut dyn MultiLabelClassifier,
    train: &Dataset,
    eval_x: &Array2<f64>,
    selected: &[usize],
) -> anyhow::Result<Array2<i32>> {
    let train_x = project_columns(&train.x, selected);
    let eval_projected = project_columns(eval_x, selected);

    log::info!(
        "Fitting {} on {} selected features",
        classifier.name(),
        selected.len()
    );
    classifier.fit(&train_x, &train.y)?;
    classifier.predict(&eval_projected)
}
