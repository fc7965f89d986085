use std::error::Error;
use std::fmt;

/// Custom error type for dataset validation failures.
///
/// Validation runs once, at `Dataset::new`. Every later pipeline stage is
/// infallible: distributions never store zero-probability entries and the
/// conditional-entropy computation special-cases degenerate probabilities,
/// so no numeric error can surface mid-computation.
#[derive(Debug)]
pub enum SelectionError {
    /// Feature and label matrices disagree on the instance count.
    ShapeMismatch { x_rows: usize, y_rows: usize },
    /// Zero instances, features, or labels; the pipeline has no meaningful output.
    EmptyInput { what: &'static str },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::ShapeMismatch { x_rows, y_rows } => write!(
                f,
                "Feature matrix has {} instances but label matrix has {}",
                x_rows, y_rows
            ),
            SelectionError::EmptyInput { what } => {
                write!(f, "Input contains no {}", what)
            }
        }
    }
}

impl Error for SelectionError {}
