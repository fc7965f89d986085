use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for a selection run.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SelectionConfig {
    #[serde(flatten)]
    pub discretizer: DiscretizerKind,
}

/// Supported discretizers and their hyper-parameters.
///
/// The pipeline only depends on the discretizer contract (one category per
/// instance, noise marked with a reserved id), so additional variants can be
/// added without touching the scoring stages.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum DiscretizerKind {
    Dbscan { eps: f64, min_samples: usize },
}

impl Default for DiscretizerKind {
    fn default() -> Self {
        DiscretizerKind::Dbscan {
            eps: 0.5,
            min_samples: 5,
        }
    }
}

impl FromStr for DiscretizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dbscan" => Ok(DiscretizerKind::Dbscan {
                eps: 0.5,
                min_samples: 5,
            }),
            _ => Err(format!("Unknown discretizer: {}", s)),
        }
    }
}

impl SelectionConfig {
    pub fn new(discretizer: DiscretizerKind) -> Self {
        Self { discretizer }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            discretizer: DiscretizerKind::default(),
        }
    }
}
