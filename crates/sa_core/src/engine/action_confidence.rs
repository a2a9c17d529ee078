//! How sure the engine is that passing (and the chosen action) is right.
//!
//! Rule-based: a base score from the probability gap, adjusted by contest,
//! clock, shot difficulty and clutch factors, then clamped to [0.15, 0.95].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::{ContestLevel, CourtZone, ShotContext, ShotType};

pub const MIN_CONFIDENCE: f64 = 0.15;
pub const MAX_CONFIDENCE: f64 = 0.95;

const DEEP_THREE_FT: f64 = 27.0;
const LONG_MID_RANGE_FT: f64 = 15.0;
const LONG_ABOVE_BREAK_FT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum ConfidenceLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            ConfidenceLevel::VeryHigh
        } else if score >= 0.60 {
            ConfidenceLevel::High
        } else if score >= 0.45 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Moderate => "Moderate",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One adjustment that moved the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFactor {
    TightContest,
    ContestedShot,
    LateClockPressure,
    ModerateTimePressure,
    DeepThreeAttempt,
    InefficientMidrange,
    DifficultAngle,
    ClutchSituation,
}

impl ConfidenceFactor {
    pub fn adjustment(&self) -> f64 {
        match self {
            ConfidenceFactor::TightContest => 0.10,
            ConfidenceFactor::ContestedShot => 0.05,
            ConfidenceFactor::LateClockPressure => -0.10,
            ConfidenceFactor::ModerateTimePressure => -0.05,
            ConfidenceFactor::DeepThreeAttempt => 0.08,
            ConfidenceFactor::InefficientMidrange => 0.06,
            ConfidenceFactor::DifficultAngle => 0.07,
            ConfidenceFactor::ClutchSituation => -0.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActionConfidence {
    /// Rounded to two decimals.
    pub score: f64,
    pub level: ConfidenceLevel,
    pub reasoning: String,
    pub factors: Vec<ConfidenceFactor>,
}

fn base_from_gap(gap: f64) -> (f64, &'static str) {
    if gap >= 0.15 {
        (0.85, "The shot is well below the efficiency threshold")
    } else if gap >= 0.10 {
        (0.70, "The shot is clearly below the efficiency threshold")
    } else if gap >= 0.05 {
        (0.55, "The shot is moderately below the efficiency threshold")
    } else {
        (0.40, "The shot is marginally below the efficiency threshold")
    }
}

fn collect_factors(ctx: &ShotContext, contest: ContestLevel) -> Vec<ConfidenceFactor> {
    let mut factors = Vec::new();
    let remaining = ctx.seconds_remaining();

    match contest {
        ContestLevel::Tight => factors.push(ConfidenceFactor::TightContest),
        ContestLevel::Contested => factors.push(ConfidenceFactor::ContestedShot),
        _ => {}
    }

    if remaining <= 5 {
        factors.push(ConfidenceFactor::LateClockPressure);
    } else if remaining <= 10 {
        factors.push(ConfidenceFactor::ModerateTimePressure);
    }

    let d = ctx.shot_distance;
    match (ctx.shot_type, ctx.zone) {
        (ShotType::ThreePoint, _) if d >= DEEP_THREE_FT => {
            factors.push(ConfidenceFactor::DeepThreeAttempt)
        }
        (ShotType::TwoPoint, CourtZone::MidRange) if d >= LONG_MID_RANGE_FT => {
            factors.push(ConfidenceFactor::InefficientMidrange)
        }
        (ShotType::ThreePoint, CourtZone::AboveBreakThree) if d >= LONG_ABOVE_BREAK_FT => {
            factors.push(ConfidenceFactor::DifficultAngle)
        }
        _ => {}
    }

    if ctx.quarter >= 4 && remaining <= 120 {
        factors.push(ConfidenceFactor::ClutchSituation);
    }

    factors
}

fn reasoning(lead: &str, factors: &[ConfidenceFactor]) -> String {
    let has = |f: ConfidenceFactor| factors.contains(&f);
    let mut parts = vec![lead];

    if has(ConfidenceFactor::TightContest) {
        parts.push("tightly contested");
    } else if has(ConfidenceFactor::ContestedShot) {
        parts.push("actively contested");
    }

    if has(ConfidenceFactor::DeepThreeAttempt) {
        parts.push("from deep 3-point range");
    } else if has(ConfidenceFactor::InefficientMidrange) {
        parts.push("from inefficient mid-range area");
    } else if has(ConfidenceFactor::DifficultAngle) {
        parts.push("from a difficult angle");
    }

    if has(ConfidenceFactor::LateClockPressure) {
        parts.push("though shot clock pressure limits alternatives");
    } else if has(ConfidenceFactor::ClutchSituation) {
        parts.push("in a clutch situation with uncertainty");
    }

    match parts.split_last() {
        Some((last, head)) if !head.is_empty() => format!("{}, and {}.", head.join(", "), last),
        _ => format!("{}, making this a clear passing decision.", lead),
    }
}

/// Confidence in a PASS recommendation.
pub fn compute_action_confidence(
    ctx: &ShotContext,
    contest: ContestLevel,
    make_probability: f64,
    threshold: f64,
) -> ActionConfidence {
    let (base, lead) = base_from_gap((make_probability - threshold).abs());
    let factors = collect_factors(ctx, contest);
    let raw = base + factors.iter().map(ConfidenceFactor::adjustment).sum::<f64>();
    let score = (raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) * 100.0).round() / 100.0;

    ActionConfidence {
        score,
        level: ConfidenceLevel::from_score(score),
        reasoning: reasoning(lead, &factors),
        factors,
    }
}
