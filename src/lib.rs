//! entrosel: entropy-based feature selection for multi-label classification.
//!
//! This crate scores continuous features by how much they reduce uncertainty
//! about a set of binary labels. Each feature column is discretized with
//! one-dimensional density-based clustering, empirical distributions and
//! Shannon entropies are estimated, and a conditional-entropy table yields an
//! information-gain ranking that drives the final subset selection.
//!
//! The design favors small, testable modules: the discretizer sits behind a
//! trait so alternative clustering schemes can be swapped in, and the
//! downstream classifier is an external collaborator reached through the
//! `models` seam rather than a dependency of the core pipeline.
pub mod config;
pub mod data_handling;
pub mod discretize;
pub mod entropy;
pub mod error;
pub mod feature_selection;
pub mod models;
pub mod stats;
