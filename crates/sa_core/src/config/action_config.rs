use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Clock windows and gaps used by the PASS action table.
///
/// The critical-clock window is `threshold.late_clock_seconds`, shared with
/// the late-clock threshold rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ActionConfig {
    /// At or below (and above late clock): moderately low clock
    pub use_clock_seconds: u32,
    /// Probability gap that counts as "far below" the threshold
    pub reset_gap: f64,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self { use_clock_seconds: 14, reset_gap: 0.10 }
    }
}

impl ActionConfig {
    pub(crate) fn validate(&self, late_clock_seconds: u32) -> Result<(), String> {
        if self.use_clock_seconds < late_clock_seconds {
            return Err(format!(
                "actions.use_clock_seconds {} below threshold.late_clock_seconds {}",
                self.use_clock_seconds, late_clock_seconds
            ));
        }
        if !(0.0..=1.0).contains(&self.reset_gap) {
            return Err(format!("actions.reset_gap {} outside [0, 1]", self.reset_gap));
        }
        Ok(())
    }
}
