//! Probability adjuster and shot quality breakdown.
//!
//! Only defensive pressure moves the probability; threshold deltas move the
//! bar. The breakdown is a presentational decomposition in percentage points:
//!
//! ```text
//! baseline            raw model probability
//! shot_type_value     two/three framing value
//! time_context        clock/period framing value
//! location_quality    -(shot_type_value + time_context)
//! defensive_pressure  adjusted - model probability
//! ```
//!
//! The three framing components net to zero, so `baseline` plus the
//! adjustments always adds up to the adjusted probability.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::BreakdownConfig;
use crate::context::{ShotContext, ShotType};
use crate::error::{AdvisoryError, Result};

const CLUTCH_QUARTER: u8 = 4;
const CLUTCH_SECONDS: u32 = 120;
const FINAL_MINUTE_SECONDS: u32 = 60;
const EARLY_GAME_LAST_QUARTER: u8 = 2;
const EARLY_GAME_SECONDS: u32 = 360;

/// Signed percentage-point contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShotQualityBreakdown {
    pub baseline: f64,
    pub location_quality: f64,
    pub shot_type_value: f64,
    pub time_context: f64,
    pub defensive_pressure: f64,
}

impl ShotQualityBreakdown {
    pub fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("baseline", self.baseline),
            ("location_quality", self.location_quality),
            ("shot_type_value", self.shot_type_value),
            ("time_context", self.time_context),
            ("defensive_pressure", self.defensive_pressure),
        ]
    }

    /// Net of the informational framing components; zero by construction.
    pub fn framing_total(&self) -> f64 {
        self.location_quality + self.shot_type_value + self.time_context
    }

    /// Sum of all components, in percentage points.
    pub fn total(&self) -> f64 {
        self.components().iter().map(|(_, v)| v).sum()
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.components().iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// Self-check: components must reproduce `make_probability`.
    pub fn reconcile(&self, make_probability: f64, tolerance_pp: f64) -> Result<()> {
        let expected = make_probability * 100.0;
        let actual = self.total();
        if (expected - actual).abs() > tolerance_pp {
            return Err(AdvisoryError::InternalInconsistency { expected, actual });
        }
        Ok(())
    }

    /// Display rows such as `("Defensive Pressure", "-12.4%")`.
    pub fn format_for_display(&self) -> Vec<(&'static str, String)> {
        self.components()
            .iter()
            .map(|(key, value)| {
                let name = match *key {
                    "baseline" => "Model Baseline",
                    "location_quality" => "Location Quality",
                    "shot_type_value" => "Shot Type Value",
                    "time_context" => "Time Context",
                    _ => "Defensive Pressure",
                };
                (name, format!("{:+.1}%", value))
            })
            .collect()
    }
}

/// Baseline times the defensive impact factor, clamped to [0, 1].
pub fn adjust_probability(baseline_probability: f64, impact_factor: f64) -> f64 {
    (baseline_probability * impact_factor).clamp(0.0, 1.0)
}

pub fn shot_type_value(config: &BreakdownConfig, shot_type: ShotType) -> f64 {
    match shot_type {
        ShotType::ThreePoint => config.three_point_value,
        ShotType::TwoPoint => config.two_point_value,
    }
}

pub fn time_context_value(config: &BreakdownConfig, ctx: &ShotContext) -> f64 {
    let remaining = ctx.seconds_remaining();
    if ctx.quarter >= CLUTCH_QUARTER && remaining < CLUTCH_SECONDS {
        config.clutch_time_value
    } else if remaining < FINAL_MINUTE_SECONDS {
        config.final_minute_value
    } else if ctx.quarter <= EARLY_GAME_LAST_QUARTER && remaining > EARLY_GAME_SECONDS {
        config.early_game_value
    } else {
        0.0
    }
}

pub fn compute_breakdown(
    config: &BreakdownConfig,
    ctx: &ShotContext,
    model_probability: f64,
    adjusted_probability: f64,
) -> ShotQualityBreakdown {
    let shot_type = shot_type_value(config, ctx.shot_type) * 100.0;
    let time = time_context_value(config, ctx) * 100.0;
    let model_pp = model_probability * 100.0;

    ShotQualityBreakdown {
        baseline: model_pp,
        location_quality: -(shot_type + time),
        shot_type_value: shot_type,
        time_context: time,
        defensive_pressure: adjusted_probability * 100.0 - model_pp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::{base_context, mid_range_context};

    #[test]
    fn test_adjust_probability_is_multiplicative() {
        assert!((adjust_probability(0.40, 0.5) - 0.20).abs() < 1e-12);
        assert_eq!(adjust_probability(0.40, 1.0), 0.40);
        assert_eq!(adjust_probability(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_breakdown_reconciles() {
        let cfg = BreakdownConfig::default();
        let ctx = mid_range_context();
        let adjusted = adjust_probability(0.42, 0.67);
        let breakdown = compute_breakdown(&cfg, &ctx, 0.42, adjusted);
        assert!(breakdown.reconcile(adjusted, cfg.tolerance_pp).is_ok());
        assert!(breakdown.defensive_pressure < 0.0);
        assert!((breakdown.baseline - 42.0).abs() < 1e-9);
        assert!((breakdown.shot_type_value + 2.0).abs() < 1e-9);
        assert!((breakdown.baseline + breakdown.defensive_pressure - adjusted * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_is_model_probability_and_framing_nets_to_zero() {
        let cfg = BreakdownConfig::default();
        let mut ctx = base_context();
        ctx.quarter = 4;
        ctx.mins_left = 1;
        ctx.secs_left = 30;
        for model in [0.05, 0.31, 0.40, 0.77] {
            let breakdown = compute_breakdown(&cfg, &ctx, model, model);
            assert!((breakdown.baseline - model * 100.0).abs() < 1e-9);
            assert!((breakdown.shot_type_value - 8.0).abs() < 1e-9);
            assert!((breakdown.time_context + 8.0).abs() < 1e-9);
            assert!(breakdown.framing_total().abs() < 1e-9);
            assert!(breakdown.reconcile(model, cfg.tolerance_pp).is_ok());
        }
    }

    #[test]
    fn test_no_defender_contributes_zero() {
        let cfg = BreakdownConfig::default();
        let breakdown = compute_breakdown(&cfg, &base_context(), 0.40, 0.40);
        assert_eq!(breakdown.defensive_pressure, 0.0);
    }

    #[test]
    fn test_reconcile_detects_drift() {
        let breakdown = ShotQualityBreakdown {
            baseline: 45.0,
            location_quality: 0.0,
            shot_type_value: 0.0,
            time_context: 0.0,
            defensive_pressure: 0.0,
        };
        match breakdown.reconcile(0.40, 1e-3) {
            Err(AdvisoryError::InternalInconsistency { expected, actual }) => {
                assert!((expected - 40.0).abs() < 1e-9);
                assert!((actual - 45.0).abs() < 1e-9);
            }
            other => panic!("expected InternalInconsistency, got {:?}", other),
        }
    }

    #[test]
    fn test_time_context_windows() {
        let cfg = BreakdownConfig::default();
        let mut ctx = base_context();

        ctx.quarter = 4;
        ctx.mins_left = 1;
        ctx.secs_left = 30;
        assert_eq!(time_context_value(&cfg, &ctx), cfg.clutch_time_value);

        ctx.quarter = 3;
        ctx.mins_left = 0;
        ctx.secs_left = 45;
        assert_eq!(time_context_value(&cfg, &ctx), cfg.final_minute_value);

        ctx.quarter = 1;
        ctx.mins_left = 9;
        assert_eq!(time_context_value(&cfg, &ctx), cfg.early_game_value);

        ctx.quarter = 3;
        assert_eq!(time_context_value(&cfg, &ctx), 0.0);
    }

    #[test]
    fn test_map_keys_and_display() {
        let cfg = BreakdownConfig::default();
        let breakdown = compute_breakdown(&cfg, &base_context(), 0.40, 0.30);
        let keys: Vec<String> = breakdown.to_map().into_keys().collect();
        assert_eq!(
            keys,
            vec!["baseline", "defensive_pressure", "location_quality", "shot_type_value", "time_context"]
        );
        let rows = breakdown.format_for_display();
        assert_eq!(rows[0], ("Model Baseline", "+40.0%".to_string()));
        assert_eq!(rows[4], ("Defensive Pressure", "-10.0%".to_string()));
    }
}
