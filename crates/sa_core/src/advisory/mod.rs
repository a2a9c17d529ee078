//! Advisory pipeline.
//!
//! ```text
//! ShotContext ──► validate ──► model.predict ──► pressure ──► adjust
//!                                                   │            │
//!                              threshold rules ─────┴──► decide ─┴─► explain
//!                                                                │
//!                                                  PASS ──► action + confidence
//!                                                                │
//!                                                       coach feedback
//! ```
//!
//! [`evaluate`] is the pure core: given a config, a context and the model's
//! baseline probability it always returns the same result. [`ShotAdvisor`]
//! adds the model call in front of it.

mod result;

#[cfg(test)]
mod snapshot_tests;

pub use crate::engine::pressure::DefenderImpactDetails;
pub use result::AdvisoryResult;

use std::sync::Arc;

use crate::config::AdvisoryConfig;
use crate::context::ShotContext;
use crate::engine::action::{recommend_action, ActionInput};
use crate::engine::action_confidence::compute_action_confidence;
use crate::engine::breakdown::{adjust_probability, compute_breakdown};
use crate::engine::decision::decide;
use crate::engine::explanation::{build_explanation, ExplanationInput};
use crate::engine::feedback::{build_feedback, FeedbackInput};
use crate::engine::pressure::defender_impact;
use crate::engine::threshold::compute_threshold;
use crate::error::Result;
use crate::model::{FeatureVector, ModelError, ShotModel};

/// Model probabilities must be finite and inside [0, 1].
fn check_probability(p: f64) -> std::result::Result<f64, ModelError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(ModelError::Inference(format!("probability {} is outside [0, 1]", p)))
    }
}

/// Run the full decision pipeline for one shot.
///
/// The config is validated on every call; an inconsistent config is
/// `InvalidConfig`, never a panic.
pub fn evaluate(
    config: &AdvisoryConfig,
    ctx: &ShotContext,
    baseline_probability: f64,
) -> Result<AdvisoryResult> {
    config.validate()?;
    ctx.validate()?;
    let baseline_probability = check_probability(baseline_probability)?;

    let contest = ctx.contest_level();
    let impact = defender_impact(&config.pressure, ctx.defender_distance, contest);
    let make_probability = adjust_probability(baseline_probability, impact.impact_factor);

    let threshold = compute_threshold(&config.threshold, ctx);
    let (decision, confidence) = decide(make_probability, threshold.threshold);

    let breakdown =
        compute_breakdown(&config.breakdown, ctx, baseline_probability, make_probability);
    breakdown.reconcile(make_probability, config.breakdown.tolerance_pp)?;

    let explanation = build_explanation(&ExplanationInput {
        ctx,
        make_probability,
        threshold: &threshold,
        impact: &impact,
        late_clock_seconds: config.threshold.late_clock_seconds,
    });

    let (recommended_action, action_reasoning, action_confidence) = if decision.is_pass() {
        let input = ActionInput {
            ctx,
            contest,
            make_probability,
            threshold: threshold.threshold,
            late_clock_seconds: config.threshold.late_clock_seconds,
        };
        let rec = recommend_action(&config.actions, &input);
        let conf = compute_action_confidence(ctx, contest, make_probability, threshold.threshold);
        (Some(rec.action), Some(rec.reasoning), Some(conf))
    } else {
        (None, None, None)
    };

    let coach_feedback = build_feedback(&FeedbackInput {
        ctx,
        contest: ctx.defender_distance.map(|_| contest),
        decision,
        make_probability,
        threshold: threshold.threshold,
        late_clock_seconds: config.threshold.late_clock_seconds,
        recommended_action,
    });

    Ok(AdvisoryResult {
        decision,
        make_probability,
        baseline_probability,
        threshold: threshold.threshold,
        confidence,
        contest_level: contest,
        explanation,
        shot_quality_breakdown: breakdown,
        threshold_rules: threshold.fired,
        defender_impact_details: ctx.defender_distance.map(|_| impact),
        recommended_action,
        action_reasoning,
        action_confidence,
        coach_feedback,
    })
}

/// A model plus the tuning used to judge its output.
///
/// Cheap to clone and safe to share across threads; holds no mutable state.
#[derive(Clone)]
pub struct ShotAdvisor {
    config: AdvisoryConfig,
    model: Arc<dyn ShotModel>,
}

impl ShotAdvisor {
    pub fn new(model: Arc<dyn ShotModel>) -> Self {
        Self { config: AdvisoryConfig::default(), model }
    }

    pub fn with_config(config: AdvisoryConfig, model: Arc<dyn ShotModel>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, model })
    }

    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn advise(&self, ctx: &ShotContext) -> Result<AdvisoryResult> {
        ctx.validate()?;
        let features = FeatureVector::from_context(ctx);
        let baseline = self.model.predict(&features)?;
        evaluate(&self.config, ctx, baseline)
    }
}

impl std::fmt::Debug for ShotAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotAdvisor")
            .field("config", &self.config)
            .field("model", &self.model.name())
            .finish()
    }
}
