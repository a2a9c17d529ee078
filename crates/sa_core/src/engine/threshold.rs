//! Dynamic threshold calculator.
//!
//! The threshold is `base + sum(deltas)` over an ordered rule table, clamped
//! to `[min_threshold, max_threshold]`. The sum is snapped to a 1e-6 grid
//! first, so a bar documented as 0.30 is exactly `0.30`. Each rule is a declarative
//! (predicate, delta, label) entry; table order fixes both evaluation order
//! and explanation order.

use schemars::JsonSchema;
use serde::Serialize;

use crate::config::ThresholdConfig;
use crate::context::{CourtZone, ShotContext, ShotType};

/// Grid steps per unit of probability.
const THRESHOLD_GRID: f64 = 1e6;

fn snap(value: f64) -> f64 {
    (value * THRESHOLD_GRID).round() / THRESHOLD_GRID
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    ShotType,
    Zone,
    Clock,
    Period,
}

impl RuleGroup {
    fn enabled(&self, config: &ThresholdConfig) -> bool {
        match self {
            RuleGroup::ShotType => config.shot_type_rule,
            RuleGroup::Zone => config.zone_rule,
            RuleGroup::Clock => config.clock_rule,
            RuleGroup::Period => config.period_rule,
        }
    }
}

pub struct ThresholdRule {
    pub id: &'static str,
    pub group: RuleGroup,
    pub applies: fn(&ShotContext, &ThresholdConfig) -> bool,
    pub delta: fn(&ThresholdConfig) -> f64,
    pub label: &'static str,
}

pub static THRESHOLD_RULES: [ThresholdRule; 8] = [
    ThresholdRule {
        id: "three_point",
        group: RuleGroup::ShotType,
        applies: |ctx, _| ctx.shot_type == ShotType::ThreePoint,
        delta: |cfg| cfg.three_point_delta,
        label: "3-point shots are valuable - lower threshold applied",
    },
    ThresholdRule {
        id: "two_point",
        group: RuleGroup::ShotType,
        applies: |ctx, _| ctx.shot_type == ShotType::TwoPoint,
        delta: |cfg| cfg.two_point_delta,
        label: "2-point shots require higher efficiency",
    },
    ThresholdRule {
        id: "restricted_area",
        group: RuleGroup::Zone,
        applies: |ctx, _| ctx.zone == CourtZone::RestrictedArea,
        delta: |cfg| cfg.restricted_area_delta,
        label: "High-value shot location near the basket",
    },
    ThresholdRule {
        id: "paint",
        group: RuleGroup::Zone,
        applies: |ctx, _| ctx.zone == CourtZone::PaintNonRa,
        delta: |cfg| cfg.paint_delta,
        label: "Paint touch - high-value location near the basket",
    },
    ThresholdRule {
        id: "mid_range",
        group: RuleGroup::Zone,
        applies: |ctx, _| ctx.zone == CourtZone::MidRange,
        delta: |cfg| cfg.mid_range_delta,
        label: "Mid-range shots are less efficient - higher bar",
    },
    ThresholdRule {
        id: "three_zone",
        group: RuleGroup::Zone,
        applies: |ctx, _| ctx.zone.is_three_point(),
        delta: |cfg| cfg.three_zone_delta,
        label: "3-point zone - efficient shot if open",
    },
    ThresholdRule {
        id: "late_clock",
        group: RuleGroup::Clock,
        applies: |ctx, cfg| ctx.seconds_remaining() <= cfg.late_clock_seconds,
        delta: |cfg| cfg.late_clock_delta,
        label: "Late clock situation - take available shots",
    },
    ThresholdRule {
        id: "overtime",
        group: RuleGroup::Period,
        applies: |ctx, _| ctx.is_overtime(),
        delta: |cfg| cfg.overtime_delta,
        label: "Overtime - fewer possessions left, shot volume matters",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FiredRule {
    pub id: &'static str,
    pub group: RuleGroup,
    pub delta: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ThresholdEvaluation {
    pub base: f64,
    pub threshold: f64,
    /// Rules that moved the bar, in table order
    pub fired: Vec<FiredRule>,
}

impl ThresholdEvaluation {
    pub fn fired_group(&self, group: RuleGroup) -> bool {
        self.fired.iter().any(|r| r.group == group)
    }
}

pub fn compute_threshold(config: &ThresholdConfig, ctx: &ShotContext) -> ThresholdEvaluation {
    let fired: Vec<FiredRule> = THRESHOLD_RULES
        .iter()
        .filter(|rule| rule.group.enabled(config) && (rule.applies)(ctx, config))
        .map(|rule| FiredRule {
            id: rule.id,
            group: rule.group,
            delta: (rule.delta)(config),
            label: rule.label,
        })
        .filter(|rule| rule.delta != 0.0)
        .collect();

    let raw = snap(config.base + fired.iter().map(|r| r.delta).sum::<f64>());
    ThresholdEvaluation {
        base: config.base,
        threshold: raw.clamp(config.min_threshold, config.max_threshold),
        fired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::{base_context, mid_range_context};

    fn ids(eval: &ThresholdEvaluation) -> Vec<&'static str> {
        eval.fired.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_above_break_three() {
        let eval = compute_threshold(&ThresholdConfig::default(), &base_context());
        assert!((eval.threshold - 0.35).abs() < 1e-9);
        assert_eq!(ids(&eval), vec!["three_point", "three_zone"]);
    }

    #[test]
    fn test_mid_range_two_raises_bar() {
        let eval = compute_threshold(&ThresholdConfig::default(), &mid_range_context());
        assert!((eval.threshold - 0.55).abs() < 1e-9);
        assert_eq!(ids(&eval), vec!["two_point", "mid_range"]);
    }

    #[test]
    fn test_restricted_area_and_paint() {
        let mut ctx = mid_range_context();
        ctx.zone = CourtZone::RestrictedArea;
        let eval = compute_threshold(&ThresholdConfig::default(), &ctx);
        assert!((eval.threshold - 0.40).abs() < 1e-9);

        ctx.zone = CourtZone::PaintNonRa;
        let eval = compute_threshold(&ThresholdConfig::default(), &ctx);
        assert!((eval.threshold - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_late_clock_fires_at_five_seconds() {
        let mut ctx = base_context();
        ctx.mins_left = 0;
        ctx.secs_left = 5;
        let eval = compute_threshold(&ThresholdConfig::default(), &ctx);
        assert!(eval.fired_group(RuleGroup::Clock));
        assert!((eval.threshold - 0.20).abs() < 1e-9);

        ctx.secs_left = 6;
        let eval = compute_threshold(&ThresholdConfig::default(), &ctx);
        assert!(!eval.fired_group(RuleGroup::Clock));
    }

    #[test]
    fn test_overtime_small_reduction() {
        let mut ctx = base_context();
        ctx.quarter = 5;
        let eval = compute_threshold(&ThresholdConfig::default(), &ctx);
        assert!((eval.threshold - 0.33).abs() < 1e-9);
        assert_eq!(eval.fired.last().map(|r| r.id), Some("overtime"));
    }

    #[test]
    fn test_disabled_groups_do_not_fire() {
        let cfg = ThresholdConfig { shot_type_rule: false, zone_rule: false, ..Default::default() };
        let eval = compute_threshold(&cfg, &base_context());
        assert!(eval.fired.is_empty());
        assert!((eval.threshold - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let cfg = ThresholdConfig {
            three_point_delta: -0.30,
            three_zone_delta: -0.30,
            two_point_delta: 0.60,
            ..Default::default()
        };
        let mut ctx = base_context();
        ctx.mins_left = 0;
        ctx.secs_left = 1;
        assert!((compute_threshold(&cfg, &ctx).threshold - 0.05).abs() < 1e-12);

        let mut ctx = mid_range_context();
        ctx.zone = CourtZone::MidRange;
        assert!((compute_threshold(&cfg, &ctx).threshold - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_lands_exactly_on_documented_bar() {
        // Bars in hundredths: base 45, two +5 / three -5, zone, late clock -15, overtime -2.
        fn zone_cents(zone: CourtZone) -> i32 {
            match zone {
                CourtZone::RestrictedArea => -10,
                CourtZone::PaintNonRa => -5,
                CourtZone::MidRange => 5,
                _ => -5,
            }
        }

        let cfg = ThresholdConfig::default();
        for zone in CourtZone::ALL {
            for shot_type in [ShotType::TwoPoint, ShotType::ThreePoint] {
                for secs_left in [3u8, 30] {
                    for quarter in [2u8, 5] {
                        let mut ctx = base_context();
                        ctx.zone = zone;
                        ctx.shot_type = shot_type;
                        ctx.mins_left = 0;
                        ctx.secs_left = secs_left;
                        ctx.quarter = quarter;

                        let cents = 45
                            + if shot_type == ShotType::ThreePoint { -5 } else { 5 }
                            + zone_cents(zone)
                            + if secs_left <= 5 { -15 } else { 0 }
                            + if quarter >= 5 { -2 } else { 0 };
                        let expected = f64::from(cents) / 100.0;

                        let eval = compute_threshold(&cfg, &ctx);
                        assert_eq!(
                            eval.threshold, expected,
                            "{:?}/{:?}/{}s/Q{}", zone, shot_type, secs_left, quarter
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_three_never_above_two() {
        for zone in CourtZone::ALL {
            let mut three = base_context();
            three.zone = zone;
            let mut two = three.clone();
            two.shot_type = ShotType::TwoPoint;
            let cfg = ThresholdConfig::default();
            assert!(compute_threshold(&cfg, &three).threshold <= compute_threshold(&cfg, &two).threshold);
        }
    }
}
