//! Defensive pressure model.
//!
//! Combines a continuous distance decay with a discrete contest multiplier:
//!
//! - decay = 1 - max_penalty * e^(-decay_rate * d), floored at `decay_floor`
//! - impact = decay * multiplier(contest), clamped to (0, 1]
//!
//! Multiplicative application keeps the adjusted probability inside [0, 1].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::contest::{contest_descriptor, distance_descriptor};
use crate::config::PressureConfig;
use crate::context::ContestLevel;

/// Smallest impact factor handed out; the factor never reaches zero.
const MIN_IMPACT: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefenderImpactDetails {
    pub distance_decay: f64,
    pub contest_multiplier: f64,
    pub impact_factor: f64,
    /// (impact_factor - 1) * 100; never positive
    pub percentage_adjustment: f64,
}

impl DefenderImpactDetails {
    /// No defender placed: no suppression at all.
    pub const NEUTRAL: DefenderImpactDetails = DefenderImpactDetails {
        distance_decay: 1.0,
        contest_multiplier: 1.0,
        impact_factor: 1.0,
        percentage_adjustment: 0.0,
    };
}

pub fn distance_decay(config: &PressureConfig, defender_distance: Option<f64>) -> f64 {
    match defender_distance {
        Some(d) if d >= 0.0 => {
            let decay = 1.0 - config.max_penalty * (-config.decay_rate * d).exp();
            decay.clamp(config.decay_floor, 1.0)
        }
        _ => 1.0,
    }
}

/// Impact of the nearest defender. `None` distance yields [`DefenderImpactDetails::NEUTRAL`].
pub fn defender_impact(
    config: &PressureConfig,
    defender_distance: Option<f64>,
    contest: ContestLevel,
) -> DefenderImpactDetails {
    if defender_distance.is_none() {
        return DefenderImpactDetails::NEUTRAL;
    }
    let decay = distance_decay(config, defender_distance);
    let multiplier = config.multiplier(contest);
    let impact = (decay * multiplier).clamp(MIN_IMPACT, 1.0);

    DefenderImpactDetails {
        distance_decay: decay,
        contest_multiplier: multiplier,
        impact_factor: impact,
        percentage_adjustment: (impact - 1.0) * 100.0,
    }
}

/// "Defender at 2.5 ft (tight closeout) with active hand contest adjusts probability by -33.0%"
pub fn describe_impact(
    defender_distance: f64,
    contest: ContestLevel,
    impact: &DefenderImpactDetails,
) -> String {
    format!(
        "Defender at {:.1} ft ({}) with {} adjusts probability by {:+.1}%",
        defender_distance,
        distance_descriptor(defender_distance),
        contest_descriptor(contest),
        impact.percentage_adjustment
    )
}
