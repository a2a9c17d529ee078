//! Plain-text rendering for terminal output.

use sa_core::engine::contest::classify_contest;
use sa_core::engine::pressure::defender_impact;
use sa_core::{AdvisoryConfig, AdvisoryResult, ContestLevel};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

/// How much of the result to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FeedbackView {
    /// Decision and a one-line cue
    Player,
    /// Full breakdown plus the coach talk-through
    #[default]
    Coach,
}

/// Representative defender distances, in feet.
pub const TABLE_DISTANCES: [f64; 12] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 15.0, 20.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureRow {
    pub distance_ft: f64,
    pub contest_level: ContestLevel,
    pub distance_decay: f64,
    pub contest_multiplier: f64,
    pub impact_factor: f64,
    pub adjusted_probability: f64,
}

pub fn pressure_rows(config: &AdvisoryConfig, baseline: f64) -> Vec<PressureRow> {
    TABLE_DISTANCES
        .iter()
        .map(|&d| {
            let contest = classify_contest(Some(d));
            let impact = defender_impact(&config.pressure, Some(d), contest);
            PressureRow {
                distance_ft: d,
                contest_level: contest,
                distance_decay: impact.distance_decay,
                contest_multiplier: impact.contest_multiplier,
                impact_factor: impact.impact_factor,
                adjusted_probability: (baseline * impact.impact_factor).clamp(0.0, 1.0),
            }
        })
        .collect()
}

pub fn render_pressure_table(rows: &[PressureRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8}  {:<10}  {:>6}  {:>6}  {:>7}  {:>8}",
        "dist_ft", "contest", "decay", "mult", "impact", "adjusted"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>8.1}  {:<10}  {:>6.3}  {:>6.2}  {:>7.3}  {:>7.1}%",
            row.distance_ft,
            row.contest_level.as_str(),
            row.distance_decay,
            row.contest_multiplier,
            row.impact_factor,
            row.adjusted_probability * 100.0
        );
    }
    out
}

pub fn render_result(result: &AdvisoryResult, view: FeedbackView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Decision:    {}", result.decision);
    if view == FeedbackView::Player {
        for cue in &result.coach_feedback.player {
            let _ = writeln!(out, "{}", cue);
        }
        return out;
    }

    let _ = writeln!(
        out,
        "Probability: {:.1}% (model {:.1}%) vs threshold {:.1}%",
        result.make_probability * 100.0,
        result.baseline_probability * 100.0,
        result.threshold * 100.0
    );
    let _ = writeln!(out, "Confidence:  {:.3}", result.confidence);
    let _ = writeln!(out, "Contest:     {}", result.contest_level.as_str());

    let _ = writeln!(out, "\nWhy:");
    for line in &result.explanation {
        let _ = writeln!(out, "  - {}", line);
    }

    let _ = writeln!(out, "\nShot quality breakdown:");
    for (name, value) in result.shot_quality_breakdown.format_for_display() {
        let _ = writeln!(out, "  {:<20} {:>7}", name, value);
    }

    if let (Some(action), Some(reasoning)) = (&result.recommended_action, &result.action_reasoning) {
        let _ = writeln!(out, "\nRecommended action: {}", action);
        let _ = writeln!(out, "  {}", reasoning);
        if let Some(conf) = &result.action_confidence {
            let _ = writeln!(out, "  Confidence: {} ({:.2}) - {}", conf.level, conf.score, conf.reasoning);
        }
    }

    let feedback = &result.coach_feedback;
    match feedback.pass_reason {
        Some(reason) => {
            let _ = writeln!(out, "\nCoach ({}):", reason.as_str());
        }
        None => {
            let _ = writeln!(out, "\nCoach:");
        }
    }
    for line in &feedback.coach {
        let _ = writeln!(out, "  - {}", line);
    }
    let _ = writeln!(out, "  Insight: {}", feedback.coaching_insight);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sa_core::{evaluate, CourtZone, Position, ShotContext, ShotType};

    fn tight_mid_range() -> ShotContext {
        ShotContext {
            shot_distance: 18.0,
            loc_x: 12.0,
            loc_y: 13.4,
            shot_type: ShotType::TwoPoint,
            zone: CourtZone::MidRange,
            quarter: 2,
            mins_left: 8,
            secs_left: 0,
            position: Position::ShootingGuard,
            defender_distance: Some(2.0),
        }
    }

    #[test]
    fn test_pressure_rows_are_monotonic() {
        let rows = pressure_rows(&AdvisoryConfig::default(), 0.45);
        assert_eq!(rows.len(), TABLE_DISTANCES.len());
        assert!(rows.windows(2).all(|w| w[0].impact_factor <= w[1].impact_factor));
        assert_eq!(rows[0].contest_level, ContestLevel::Tight);
        assert_eq!(rows.last().map(|r| r.contest_level), Some(ContestLevel::WideOpen));
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let rows = pressure_rows(&AdvisoryConfig::default(), 0.45);
        let text = render_pressure_table(&rows);
        assert_eq!(text.lines().count(), rows.len() + 1);
        assert!(text.lines().next().unwrap().contains("impact"));
    }

    #[test]
    fn test_render_pass_includes_action() {
        let result = evaluate(&AdvisoryConfig::default(), &tight_mid_range(), 0.42).unwrap();
        let text = render_result(&result, FeedbackView::Coach);
        assert!(text.starts_with("Decision:    PASS"));
        assert!(text.contains("Recommended action: Swing the ball"));
        assert!(text.contains("Defensive Pressure"));
        assert!(text.contains("Coach (tight_defense):"));
        assert!(text.contains("  Insight: Encourage one more pass"));
    }

    #[test]
    fn test_player_view_is_short() {
        let result = evaluate(&AdvisoryConfig::default(), &tight_mid_range(), 0.42).unwrap();
        let text = render_result(&result, FeedbackView::Player);
        assert_eq!(text, "Decision:    PASS\nDefender's hand is in your face. Move the ball.\n");
    }

    #[test]
    fn test_render_take_has_no_action() {
        let mut ctx = tight_mid_range();
        ctx.defender_distance = None;
        let result = evaluate(&AdvisoryConfig::default(), &ctx, 0.60).unwrap();
        let text = render_result(&result, FeedbackView::Coach);
        assert!(text.starts_with("Decision:    TAKE SHOT"));
        assert!(!text.contains("Recommended action"));
    }
}
