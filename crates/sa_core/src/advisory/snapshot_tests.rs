//! Snapshot tests for user-facing explanation text.
//!
//! Explanation strings reach the UI verbatim, so wording changes should show
//! up as snapshot diffs.

use super::*;
use crate::context::fixtures::base_context;
use insta::assert_json_snapshot;

#[test]
fn test_scenario_a_explanation_snapshot() {
    let mut ctx = base_context();
    ctx.quarter = 4;
    ctx.mins_left = 0;
    ctx.secs_left = 18;
    let result = evaluate(&AdvisoryConfig::default(), &ctx, 0.40).unwrap();
    assert_json_snapshot!("scenario_a_explanation", result.explanation);
}

#[test]
fn test_tight_corner_three_pass_snapshot() {
    let mut ctx = base_context();
    ctx.shot_distance = 22.5;
    ctx.loc_x = -22.0;
    ctx.loc_y = 4.0;
    ctx.zone = crate::context::CourtZone::CornerThreeLeft;
    ctx.defender_distance = Some(1.5);
    let result = evaluate(&AdvisoryConfig::default(), &ctx, 0.36).unwrap();
    assert_json_snapshot!("tight_corner_three_pass", (&result.recommended_action, &result.action_reasoning));
}
