//! Dynamic threshold tuning.
//!
//! Every delta is applied once against `base`; rule groups can be switched
//! off individually.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Starting make-probability bar (0.0 - 1.0)
    pub base: f64,

    // === Shot type ===
    pub shot_type_rule: bool,
    pub three_point_delta: f64,
    pub two_point_delta: f64,

    // === Zone ===
    pub zone_rule: bool,
    pub restricted_area_delta: f64,
    pub paint_delta: f64,
    pub mid_range_delta: f64,
    pub three_zone_delta: f64,

    // === Clock ===
    pub clock_rule: bool,
    /// Seconds left in the period at or below which the clock rule fires
    pub late_clock_seconds: u32,
    pub late_clock_delta: f64,

    // === Period ===
    pub period_rule: bool,
    pub overtime_delta: f64,

    // === Clamp ===
    pub min_threshold: f64,
    pub max_threshold: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base: 0.45,

            shot_type_rule: true,
            three_point_delta: -0.05,
            two_point_delta: 0.05,

            zone_rule: true,
            restricted_area_delta: -0.10,
            paint_delta: -0.05,
            mid_range_delta: 0.05,
            three_zone_delta: -0.05,

            clock_rule: true,
            late_clock_seconds: 5,
            late_clock_delta: -0.15,

            period_rule: true,
            overtime_delta: -0.02,

            min_threshold: 0.05,
            max_threshold: 0.95,
        }
    }
}

impl ThresholdConfig {
    /// Higher bar everywhere, softer late-clock relief.
    pub fn selective() -> Self {
        Self { base: 0.50, late_clock_delta: -0.10, ..Self::default() }
    }

    /// Lower bar, stronger push toward threes and late-clock attempts.
    pub fn green_light() -> Self {
        Self {
            base: 0.40,
            three_point_delta: -0.07,
            late_clock_delta: -0.20,
            overtime_delta: -0.03,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.base) {
            return Err(format!("threshold.base {} outside [0, 1]", self.base));
        }
        if !(0.0..=1.0).contains(&self.min_threshold)
            || !(0.0..=1.0).contains(&self.max_threshold)
            || self.min_threshold > self.max_threshold
        {
            return Err(format!(
                "threshold clamp [{}, {}] must be an ordered range inside [0, 1]",
                self.min_threshold, self.max_threshold
            ));
        }
        // A three must never face a higher bar than an otherwise identical two.
        if self.three_point_delta > self.two_point_delta {
            return Err(format!(
                "three_point_delta {} must not exceed two_point_delta {}",
                self.three_point_delta, self.two_point_delta
            ));
        }
        let deltas = [
            self.three_point_delta,
            self.two_point_delta,
            self.restricted_area_delta,
            self.paint_delta,
            self.mid_range_delta,
            self.three_zone_delta,
            self.late_clock_delta,
            self.overtime_delta,
        ];
        if deltas.iter().any(|d| !d.is_finite()) {
            return Err("threshold deltas must be finite".to_string());
        }
        Ok(())
    }
}
