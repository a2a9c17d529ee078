use schemars::JsonSchema;
use serde::Serialize;

use crate::context::ContestLevel;
use crate::engine::action::RecommendedAction;
use crate::engine::action_confidence::ActionConfidence;
use crate::engine::breakdown::ShotQualityBreakdown;
use crate::engine::decision::Decision;
use crate::engine::feedback::CoachFeedback;
use crate::engine::pressure::DefenderImpactDetails;
use crate::engine::threshold::FiredRule;

/// Outcome of one advisory call.
///
/// `defender_impact_details` is set only when a defender distance was given;
/// the three action fields are set only for [`Decision::Pass`].
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct AdvisoryResult {
    pub decision: Decision,
    /// Adjusted make probability
    pub make_probability: f64,
    /// Model probability before the defensive adjustment
    pub baseline_probability: f64,
    pub threshold: f64,
    /// |make_probability - threshold|
    pub confidence: f64,
    pub contest_level: ContestLevel,
    pub explanation: Vec<String>,
    pub shot_quality_breakdown: ShotQualityBreakdown,
    pub threshold_rules: Vec<FiredRule>,
    pub defender_impact_details: Option<DefenderImpactDetails>,
    pub recommended_action: Option<RecommendedAction>,
    pub action_reasoning: Option<String>,
    pub action_confidence: Option<ActionConfidence>,
    /// Player cue, coach talk-through and teaching point
    pub coach_feedback: CoachFeedback,
}

impl AdvisoryResult {
    /// One-line summary, e.g. `PASS (28.4% vs 55.0%) - Swing the ball`.
    pub fn summary(&self) -> String {
        let head = format!(
            "{} ({:.1}% vs {:.1}%)",
            self.decision,
            self.make_probability * 100.0,
            self.threshold * 100.0
        );
        match self.recommended_action {
            Some(action) => format!("{} - {}", head, action),
            None => head,
        }
    }
}
