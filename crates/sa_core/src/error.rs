use thiserror::Error;

use crate::model::ModelError;

/// Failures reported by an advisory call.
///
/// None of these are retried internally; the caller decides how to surface them.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Invalid context: {field} = {value} ({reason})")]
    InvalidContext {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    #[error("Breakdown does not reconcile: expected {expected:.4} pp, got {actual:.4} pp")]
    InternalInconsistency { expected: f64, actual: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AdvisoryError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        AdvisoryError::InvalidContext { field, value: value.to_string(), reason }
    }

    /// Stable error code for the JSON boundary.
    pub fn code(&self) -> &'static str {
        match self {
            AdvisoryError::InvalidContext { .. } => "INVALID_CONTEXT",
            AdvisoryError::ModelUnavailable(_) => "MODEL_UNAVAILABLE",
            AdvisoryError::InternalInconsistency { .. } => "INTERNAL_INCONSISTENCY",
            AdvisoryError::InvalidConfig(_) => "INVALID_CONFIG",
            AdvisoryError::Serialization(_) => "SERIALIZATION",
        }
    }

    /// Caller-side errors (bad input) as opposed to engine or model faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AdvisoryError::InvalidContext { .. } | AdvisoryError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for AdvisoryError {
    fn from(err: serde_json::Error) -> Self {
        AdvisoryError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_context_message_names_field() {
        let err = AdvisoryError::invalid("quarter", 0, "must be >= 1");
        assert_eq!(err.to_string(), "Invalid context: quarter = 0 (must be >= 1)");
        assert_eq!(err.code(), "INVALID_CONTEXT");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_model_error_converts() {
        let err: AdvisoryError = ModelError::Inference("no output".to_string()).into();
        assert_eq!(err.code(), "MODEL_UNAVAILABLE");
        assert!(!err.is_client_error());
    }
}
