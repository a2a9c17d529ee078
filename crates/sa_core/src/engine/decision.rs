use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    #[serde(alias = "TAKE SHOT")]
    TakeShot,
    Pass,
}

impl Decision {
    pub fn is_take(&self) -> bool {
        matches!(self, Decision::TakeShot)
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Decision::Pass)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::TakeShot => write!(f, "TAKE SHOT"),
            Decision::Pass => write!(f, "PASS"),
        }
    }
}

/// Compare the adjusted probability against the bar.
///
/// Exact equality shoots. Confidence is the distance from the margin.
pub fn decide(make_probability: f64, threshold: f64) -> (Decision, f64) {
    let decision = if make_probability >= threshold { Decision::TakeShot } else { Decision::Pass };
    (decision, (make_probability - threshold).abs())
}
