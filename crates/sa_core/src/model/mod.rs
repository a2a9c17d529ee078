//! Predictive model boundary.
//!
//! The engine never trains or inspects a model; it only asks for a baseline
//! make probability over a fixed-shape [`FeatureVector`]. Implementations must
//! be `Send + Sync` so one loaded model can serve every call.

mod features;
mod logistic;

pub use features::{feature_names, FeatureVector, CATEGORICAL_GROUPS, FEATURE_COUNT, NUMERIC_FEATURES};
pub use logistic::{LogisticModel, ModelArtifact};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(String),

    #[error("Feature mismatch: {0}")]
    FeatureMismatch(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

pub trait ShotModel: Send + Sync {
    /// Baseline make probability in [0, 1], before defensive adjustment.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    fn name(&self) -> &str {
        "shot_model"
    }
}

/// Returns the same probability for every shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProbabilityModel {
    probability: f64,
}

impl FixedProbabilityModel {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl ShotModel for FixedProbabilityModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
