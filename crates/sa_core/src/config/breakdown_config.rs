use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Framing values of the shot quality breakdown, as probabilities.
///
/// `location_quality` is not configured: it carries the balance so the
/// informational components net to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BreakdownConfig {
    pub three_point_value: f64,
    pub two_point_value: f64,
    /// Q4+ with under two minutes
    pub clutch_time_value: f64,
    /// Final minute of any period
    pub final_minute_value: f64,
    /// First half with more than six minutes left
    pub early_game_value: f64,
    /// Reconciliation tolerance in percentage points
    pub tolerance_pp: f64,
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            three_point_value: 0.08,
            two_point_value: -0.02,
            clutch_time_value: -0.08,
            final_minute_value: -0.05,
            early_game_value: 0.03,
            tolerance_pp: 1e-3,
        }
    }
}

impl BreakdownConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let values = [
            self.three_point_value,
            self.two_point_value,
            self.clutch_time_value,
            self.final_minute_value,
            self.early_game_value,
        ];
        if values.iter().any(|v| !v.is_finite() || v.abs() > 1.0) {
            return Err("breakdown framing values must be finite and inside [-1, 1]".to_string());
        }
        if !(self.tolerance_pp.is_finite() && self.tolerance_pp > 0.0) {
            return Err(format!("breakdown.tolerance_pp {} must be > 0", self.tolerance_pp));
        }
        Ok(())
    }
}
