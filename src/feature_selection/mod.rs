//! Feature selection utilities.
//!
//! This module contains the entropy-gain ranking pipeline: per-pair
//! information gain and symmetric uncertainty, per-feature aggregation
//! across labels, and the standardized-score threshold selection.
pub mod entropy_gain;
