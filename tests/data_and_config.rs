//! Integration tests for dataset validation and config types.

use entrosel::config::{DiscretizerKind, SelectionConfig};
use entrosel::data_handling::{project_columns, Dataset};
use entrosel::error::SelectionError;
use ndarray::{array, Array2};

// ---------------------------------------------------------------------------
// Dataset validation
// ---------------------------------------------------------------------------

#[test]
fn dataset_accepts_aligned_matrices() {
    let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let y = array![[1, 0], [0, 1], [1, 1]];
    let data = Dataset::new(x, y).unwrap();
    assert_eq!(data.n_instances(), 3);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.n_labels(), 2);
}

#[test]
fn dataset_shape_mismatch_is_reported_at_entry() {
    let x = Array2::<f64>::zeros((5, 2));
    let y = Array2::<i32>::zeros((4, 2));
    let err = Dataset::new(x, y).unwrap_err();
    assert!(matches!(err, SelectionError::ShapeMismatch { x_rows: 5, y_rows: 4 }));
    assert!(err.to_string().contains("5"));
    assert!(err.to_string().contains("4"));
}

#[test]
fn dataset_empty_inputs_fail_fast() {
    let err = Dataset::new(Array2::zeros((0, 3)), Array2::zeros((0, 2))).unwrap_err();
    assert!(matches!(err, SelectionError::EmptyInput { .. }));

    let err = Dataset::new(Array2::zeros((3, 0)), Array2::zeros((3, 2))).unwrap_err();
    assert!(matches!(err, SelectionError::EmptyInput { .. }));

    let err = Dataset::new(Array2::zeros((3, 3)), Array2::zeros((3, 0))).unwrap_err();
    assert!(matches!(err, SelectionError::EmptyInput { .. }));
}

#[test]
fn feature_projection_preserves_order_and_labels() {
    let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let y = array![[1], [0]];
    let data = Dataset::new(x, y).unwrap();

    let projected = data.select_features(&[0, 2]);
    assert_eq!(projected.x, array![[1.0, 3.0], [4.0, 6.0]]);
    assert_eq!(projected.y, data.y);

    let bare = project_columns(&data.x, &[1]);
    assert_eq!(bare, array![[2.0], [5.0]]);
}

// ---------------------------------------------------------------------------
// Config / DiscretizerKind
// ---------------------------------------------------------------------------

#[test]
fn discretizer_default_is_dbscan() {
    let kind = DiscretizerKind::default();
    let DiscretizerKind::Dbscan { eps, min_samples } = kind;
    assert!((eps - 0.5).abs() < 1e-12);
    assert_eq!(min_samples, 5);
}

#[test]
fn discretizer_from_str_dbscan() {
    let kind: DiscretizerKind = "DBSCAN".parse().unwrap();
    let DiscretizerKind::Dbscan { min_samples, .. } = kind;
    assert_eq!(min_samples, 5);
}

#[test]
fn discretizer_from_str_unknown_errors() {
    let result: Result<DiscretizerKind, _> = "kmeans".parse();
    assert!(result.is_err());
}

#[test]
fn selection_config_serializes_to_json() {
    let cfg = SelectionConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("Dbscan"));
    assert!(json.contains("eps"));
}

#[test]
fn selection_config_round_trips_json() {
    let cfg = SelectionConfig::new(DiscretizerKind::Dbscan {
        eps: 0.25,
        min_samples: 3,
    });
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: SelectionConfig = serde_json::from_str(&json).unwrap();
    let DiscretizerKind::Dbscan { eps, min_samples } = cfg2.discretizer;
    assert!((eps - 0.25).abs() < 1e-12);
    assert_eq!(min_samples, 3);
}
