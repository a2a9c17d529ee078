//! Logistic regression shot model loaded from a JSON artifact.
//!
//! ```json
//! { "feature_list": ["SHOT_DISTANCE", ...], "intercept": -0.1, "weights": [-0.04, ...] }
//! ```
//!
//! Weights are matched to columns by name; columns absent from the artifact
//! get weight zero.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::features::{feature_names, FeatureVector};
use super::{ModelError, ShotModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_list: Vec<String>,
    pub intercept: f64,
    pub weights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    intercept: f64,
    /// Aligned with [`feature_names`] order.
    weights: Vec<f64>,
}

impl LogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.feature_list.len() != artifact.weights.len() {
            return Err(ModelError::FeatureMismatch(format!(
                "{} feature names but {} weights",
                artifact.feature_list.len(),
                artifact.weights.len()
            )));
        }
        if !artifact.intercept.is_finite() || artifact.weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Parse("non-finite coefficient".to_string()));
        }

        let names = feature_names();
        let mut weights = vec![0.0; names.len()];
        let mut seen = vec![false; names.len()];
        for (name, weight) in artifact.feature_list.iter().zip(&artifact.weights) {
            let idx = names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| ModelError::FeatureMismatch(format!("unknown feature '{}'", name)))?;
            if seen[idx] {
                return Err(ModelError::FeatureMismatch(format!("duplicate feature '{}'", name)));
            }
            seen[idx] = true;
            weights[idx] = *weight;
        }

        let unused = seen.iter().filter(|s| !**s).count();
        if unused > 0 {
            debug!("{} feature columns have no weight in the artifact", unused);
        }

        Ok(Self { intercept: artifact.intercept, weights })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| ModelError::Parse(e.to_string()))?;
        Self::from_artifact(artifact)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let model = Self::from_json_str(&raw)?;
        info!("Loaded logistic shot model from {} ({} weights)", path.display(), model.weights.len());
        Ok(model)
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl ShotModel for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::FeatureMismatch(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }
        let logit = self.intercept
            + self.weights.iter().zip(features.values()).map(|(w, x)| w * x).sum::<f64>();
        let p = sigmoid(logit);
        if !p.is_finite() {
            return Err(ModelError::Inference(format!("non-finite output for logit {}", logit)));
        }
        Ok(p)
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
