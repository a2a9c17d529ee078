//! Human-readable reasons behind a decision.
//!
//! Line order is fixed: probability vs bar, fired threshold rules (table
//! order), defender sentence, distance note, clock note, late-game note.

use super::contest::classify_contest;
use super::pressure::{describe_impact, DefenderImpactDetails};
use super::threshold::ThresholdEvaluation;
use crate::context::ShotContext;

pub const LONG_RANGE_FT: f64 = 25.0;
pub const CLOSE_RANGE_FT: f64 = 5.0;
pub const CLOCK_NOTE_SECONDS: u32 = 10;
pub const LATE_GAME_QUARTER: u8 = 4;

pub struct ExplanationInput<'a> {
    pub ctx: &'a ShotContext,
    pub make_probability: f64,
    pub threshold: &'a ThresholdEvaluation,
    pub impact: &'a DefenderImpactDetails,
    /// Seconds at or below which the late-clock rule owns the clock message.
    pub late_clock_seconds: u32,
}

pub fn comparison_sentence(make_probability: f64, threshold: f64) -> String {
    let verb = if make_probability > threshold {
        "exceeds"
    } else if make_probability == threshold {
        "meets"
    } else {
        "below"
    };
    format!(
        "Shot make probability ({:.1}%) {} threshold ({:.1}%)",
        make_probability * 100.0,
        verb,
        threshold * 100.0
    )
}

pub fn build_explanation(input: &ExplanationInput) -> Vec<String> {
    let ctx = input.ctx;
    let mut lines = vec![comparison_sentence(input.make_probability, input.threshold.threshold)];

    lines.extend(input.threshold.fired.iter().map(|rule| rule.label.to_string()));

    if let Some(d) = ctx.defender_distance {
        lines.push(describe_impact(d, classify_contest(Some(d)), input.impact));
    }

    if ctx.shot_distance >= LONG_RANGE_FT {
        lines.push(format!(
            "Long-range shot ({:.0} ft) - lower expected efficiency",
            ctx.shot_distance
        ));
    } else if ctx.shot_distance <= CLOSE_RANGE_FT {
        lines.push(format!(
            "Close-range shot ({:.0} ft) - high-value opportunity",
            ctx.shot_distance
        ));
    }

    let remaining = ctx.seconds_remaining();
    if remaining > input.late_clock_seconds && remaining <= CLOCK_NOTE_SECONDS {
        lines.push("Clock winding down - consider shot quality".to_string());
    }

    if ctx.quarter >= LATE_GAME_QUARTER {
        lines.push("Late game - shot selection becomes critical".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PressureConfig, ThresholdConfig};
    use crate::context::fixtures::{base_context, mid_range_context};
    use crate::engine::pressure::defender_impact;
    use crate::engine::threshold::compute_threshold;

    fn explain(ctx: &ShotContext, p: f64) -> Vec<String> {
        let threshold = compute_threshold(&ThresholdConfig::default(), ctx);
        let impact = defender_impact(
            &PressureConfig::default(),
            ctx.defender_distance,
            classify_contest(ctx.defender_distance),
        );
        build_explanation(&ExplanationInput {
            ctx,
            make_probability: p,
            threshold: &threshold,
            impact: &impact,
            late_clock_seconds: 5,
        })
    }

    #[test]
    fn test_comparison_verbs() {
        assert_eq!(
            comparison_sentence(0.40, 0.35),
            "Shot make probability (40.0%) exceeds threshold (35.0%)"
        );
        assert_eq!(
            comparison_sentence(0.35, 0.35),
            "Shot make probability (35.0%) meets threshold (35.0%)"
        );
        assert!(comparison_sentence(0.20, 0.55).contains(") below threshold"));
    }

    #[test]
    fn test_open_three_lines() {
        let lines = explain(&base_context(), 0.40);
        assert_eq!(
            lines,
            vec![
                "Shot make probability (40.0%) exceeds threshold (35.0%)",
                "3-point shots are valuable - lower threshold applied",
                "3-point zone - efficient shot if open",
            ]
        );
    }

    #[test]
    fn test_defender_sentence_follows_rules() {
        let mut ctx = mid_range_context();
        ctx.defender_distance = Some(2.0);
        let lines = explain(&ctx, 0.28);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("2-point"));
        assert!(lines[2].starts_with("Mid-range"));
        assert!(lines[3].starts_with("Defender at 2.0 ft (tight closeout)"));
    }

    #[test]
    fn test_distance_notes() {
        let mut ctx = base_context();
        ctx.shot_distance = 27.0;
        assert!(explain(&ctx, 0.30).iter().any(|l| l == "Long-range shot (27 ft) - lower expected efficiency"));

        let mut ctx = mid_range_context();
        ctx.shot_distance = 3.0;
        assert!(explain(&ctx, 0.60).iter().any(|l| l == "Close-range shot (3 ft) - high-value opportunity"));
    }

    #[test]
    fn test_clock_note_window() {
        let mut ctx = base_context();
        ctx.mins_left = 0;
        ctx.secs_left = 8;
        let lines = explain(&ctx, 0.40);
        assert!(lines.iter().any(|l| l.starts_with("Clock winding down")));

        // At 5 s the late-clock rule speaks instead.
        ctx.secs_left = 5;
        let lines = explain(&ctx, 0.40);
        assert!(!lines.iter().any(|l| l.starts_with("Clock winding down")));
        assert!(lines.iter().any(|l| l.starts_with("Late clock situation")));
    }

    #[test]
    fn test_late_game_note_is_last() {
        let mut ctx = base_context();
        ctx.quarter = 4;
        ctx.mins_left = 0;
        ctx.secs_left = 9;
        let lines = explain(&ctx, 0.40);
        assert_eq!(lines.last().map(String::as_str), Some("Late game - shot selection becomes critical"));
        assert_eq!(lines[lines.len() - 2], "Clock winding down - consider shot quality");
    }
}
