//! Defender impact tuning (distance decay + contest multipliers).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::ContestLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PressureConfig {
    /// Reduction at 0 ft (hand in face)
    pub max_penalty: f64,
    /// Exponential decay rate per foot
    pub decay_rate: f64,
    /// Lowest distance decay value
    pub decay_floor: f64,

    pub tight_multiplier: f64,
    pub contested_multiplier: f64,
    pub open_multiplier: f64,
    pub wide_open_multiplier: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            max_penalty: 0.35,
            decay_rate: 0.25,
            decay_floor: 0.65,

            tight_multiplier: 0.85,
            contested_multiplier: 0.92,
            open_multiplier: 0.97,
            wide_open_multiplier: 1.00,
        }
    }
}

impl PressureConfig {
    pub fn multiplier(&self, level: ContestLevel) -> f64 {
        match level {
            ContestLevel::Tight => self.tight_multiplier,
            ContestLevel::Contested => self.contested_multiplier,
            ContestLevel::Open => self.open_multiplier,
            ContestLevel::WideOpen => self.wide_open_multiplier,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.max_penalty) {
            return Err(format!("pressure.max_penalty {} outside [0, 1)", self.max_penalty));
        }
        if !(self.decay_rate.is_finite() && self.decay_rate > 0.0) {
            return Err(format!("pressure.decay_rate {} must be > 0", self.decay_rate));
        }
        if !(self.decay_floor > 0.0 && self.decay_floor <= 1.0) {
            return Err(format!("pressure.decay_floor {} outside (0, 1]", self.decay_floor));
        }
        let multipliers = [
            self.tight_multiplier,
            self.contested_multiplier,
            self.open_multiplier,
            self.wide_open_multiplier,
        ];
        if multipliers.iter().any(|m| !(*m > 0.0 && *m <= 1.0)) {
            return Err("contest multipliers must lie in (0, 1]".to_string());
        }
        // Closer buckets must never suppress less than farther ones.
        if multipliers.windows(2).any(|w| w[0] > w[1]) {
            return Err("contest multipliers must be non-decreasing from TIGHT to WIDE_OPEN".to_string());
        }
        Ok(())
    }
}
