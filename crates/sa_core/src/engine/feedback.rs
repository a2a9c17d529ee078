//! Coach-style feedback in two registers.
//!
//! `player` is one short cue, `coach` is the fuller talk-through, and
//! `coaching_insight` is a single teaching point. For PASS the primary
//! reason comes from an ordered table (first match wins).
//!
//! Phrasing variants are picked from the shot itself (distance and clock),
//! so the same input always reads the same.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::action::RecommendedAction;
use super::decision::Decision;
use crate::context::{ContestLevel, CourtZone, ShotContext};

const TIGHT_DEFENDER_FT: f64 = 3.0;
const CONTESTED_THREE_FT: f64 = 6.0;
const POOR_LOCATION_MIN_FT: f64 = 8.0;
const LOW_PERCENTAGE_GAP: f64 = 0.08;
const EARLY_CLOCK_SECONDS: u32 = 20;
const EARLY_CLOCK_LAST_QUARTER: u8 = 3;
const DEEP_THREE_FT: f64 = 27.0;
const LONG_TWO_FT: f64 = 15.0;
const CLOSE_RANGE_FT: f64 = 5.0;
const SOME_CLOCK_SECONDS: u32 = 8;
const FAR_SHOT_FT: f64 = 20.0;
const LATE_GAME_QUARTER: u8 = 4;
const MAX_CONTEXT_NOTES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PassReason {
    TightDefense,
    ContestedThree,
    LateClockPressure,
    PoorLocation,
    LowPercentageArea,
    EarlyClockRush,
    MarginalDecision,
}

impl PassReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassReason::TightDefense => "tight_defense",
            PassReason::ContestedThree => "contested_three",
            PassReason::LateClockPressure => "late_clock_pressure",
            PassReason::PoorLocation => "poor_location",
            PassReason::LowPercentageArea => "low_percentage_area",
            PassReason::EarlyClockRush => "early_clock_rush",
            PassReason::MarginalDecision => "marginal_decision",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CoachFeedback {
    /// Set only for PASS
    pub pass_reason: Option<PassReason>,
    pub player: Vec<String>,
    pub coach: Vec<String>,
    pub coaching_insight: String,
}

#[derive(Debug, Clone, Copy)]
pub struct FeedbackInput<'a> {
    pub ctx: &'a ShotContext,
    /// `None` when no defender was placed
    pub contest: Option<ContestLevel>,
    pub decision: Decision,
    pub make_probability: f64,
    pub threshold: f64,
    pub late_clock_seconds: u32,
    pub recommended_action: Option<RecommendedAction>,
}

impl FeedbackInput<'_> {
    fn seconds(&self) -> u32 {
        self.ctx.seconds_remaining()
    }

    fn late_clock(&self) -> bool {
        self.seconds() <= self.late_clock_seconds
    }

    fn margin(&self) -> f64 {
        (self.make_probability - self.threshold).abs()
    }

    fn defender_within(&self, feet: f64) -> bool {
        self.ctx.defender_distance.is_some_and(|d| d <= feet)
    }

    fn pressured(&self) -> bool {
        self.contest.is_some_and(|c| c.is_pressured())
    }

    /// Same shot, same phrasing.
    fn variant(&self, len: usize) -> usize {
        let seed = (self.ctx.shot_distance * 10.0).round() as usize + self.seconds() as usize;
        seed % len.max(1)
    }

    fn pick<'t>(&self, options: &'t [&'t str]) -> &'t str {
        options[self.variant(options.len())]
    }
}

/// Main coaching sentence, split around the context notes.
type Template = (&'static str, &'static str);

pub struct PassReasonRule {
    pub reason: PassReason,
    pub applies: fn(&FeedbackInput) -> bool,
    pub templates: &'static [Template],
}

pub static PASS_REASON_RULES: [PassReasonRule; 6] = [
    PassReasonRule {
        reason: PassReason::TightDefense,
        applies: |f| f.contest == Some(ContestLevel::Tight) || f.defender_within(TIGHT_DEFENDER_FT),
        templates: &[
            (
                "The defender is right on you, making this a tough shot even for elite shooters.",
                "Moving the ball gives the offense a better chance.",
            ),
            ("This is a heavily contested look.", "Trust your teammates to find better spacing."),
            ("That's hand-in-face defense.", "There's a better shot available if we swing it."),
        ],
    },
    PassReasonRule {
        reason: PassReason::ContestedThree,
        applies: |f| f.pressured() && f.ctx.shot_type.is_three() && f.defender_within(CONTESTED_THREE_FT),
        templates: &[
            (
                "This three is contested, and the math doesn't favor taking it.",
                "An extra pass could open up a cleaner look.",
            ),
            ("With a defender closing out, this three becomes low percentage.", "We've got time to find better."),
            ("The closeout makes this three harder than it needs to be.", "Keep attacking."),
        ],
    },
    PassReasonRule {
        reason: PassReason::LateClockPressure,
        applies: |f| f.late_clock(),
        templates: &[
            ("The clock is running down, but this look isn't worth forcing.", "Make the smart play."),
            ("Even in late clock, we need to be disciplined.", "A better decision is available."),
            ("Clock's low, but this isn't the answer.", "Trust your read."),
        ],
    },
    PassReasonRule {
        reason: PassReason::PoorLocation,
        applies: |f| {
            matches!(f.ctx.zone, CourtZone::MidRange | CourtZone::PaintNonRa)
                && f.ctx.shot_distance > POOR_LOCATION_MIN_FT
        },
        templates: &[
            (
                "This spot on the floor has a lower success rate than other options.",
                "Moving closer or finding a three gives us better math.",
            ),
            ("This is one of the tougher zones on the floor.", "We can create something more efficient."),
            ("This isn't where we want to live.", "Get to the rim or kick it out for three."),
        ],
    },
    PassReasonRule {
        reason: PassReason::LowPercentageArea,
        applies: |f| f.make_probability < f.threshold - LOW_PERCENTAGE_GAP,
        templates: &[
            ("The numbers don't favor taking this shot.", "Another action could get us something cleaner."),
            ("This is a low-efficiency look.", "Work for position or reset the offense."),
            ("This area of the floor doesn't produce for us consistently.", "Find a better spot."),
        ],
    },
    PassReasonRule {
        reason: PassReason::EarlyClockRush,
        applies: |f| f.seconds() > EARLY_CLOCK_SECONDS && f.ctx.quarter <= EARLY_CLOCK_LAST_QUARTER,
        templates: &[
            ("There's plenty of time left, no need to settle for this.", "Let's work the possession."),
            ("We're early and can get a better look.", "Be patient with the offense."),
            ("No reason to rush into this shot.", "Let the play develop."),
        ],
    },
];

static MARGINAL_TEMPLATES: [Template; 3] = [
    (
        "This is close, but the odds are just under where we want them.",
        "One more pass could tip the scales.",
    ),
    ("The probability is right on the edge.", "Trust the process and find the extra percent."),
    ("It's a judgment call, and the data says look off this one.", "Good recognition."),
];

pub fn classify_pass_reason(input: &FeedbackInput) -> PassReason {
    PASS_REASON_RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map_or(PassReason::MarginalDecision, |rule| rule.reason)
}

fn templates_for(reason: PassReason) -> &'static [Template] {
    PASS_REASON_RULES
        .iter()
        .find(|rule| rule.reason == reason)
        .map_or(&MARGINAL_TEMPLATES[..], |rule| rule.templates)
}

/// At most two supporting notes, in clock -> period -> defender -> distance order.
fn context_notes(input: &FeedbackInput) -> String {
    let ctx = input.ctx;
    let mut notes = Vec::new();

    if input.seconds() > EARLY_CLOCK_SECONDS {
        notes.push("We've got time to work.");
    } else if input.seconds() > SOME_CLOCK_SECONDS {
        notes.push("There's still time on the clock.");
    } else if input.late_clock() {
        notes.push("Even with the clock winding down, stay composed.");
    }

    if ctx.quarter >= LATE_GAME_QUARTER {
        notes.push("Late in the game, every possession matters.");
    } else if ctx.quarter <= 2 {
        notes.push("It's early in the game, stay patient.");
    }

    match input.contest {
        Some(ContestLevel::Tight) => notes.push("The defender took away your space."),
        Some(ContestLevel::Contested) => notes.push("The defense is in position."),
        _ => {}
    }

    if ctx.shot_distance >= FAR_SHOT_FT {
        notes.push("That's a long shot to settle for.");
    } else if ctx.shot_distance <= POOR_LOCATION_MIN_FT {
        notes.push("You're close, attack the rim instead.");
    }

    notes.truncate(MAX_CONTEXT_NOTES);
    notes.join(" ")
}

fn defender_insight(input: &FeedbackInput) -> Option<String> {
    let d = input.ctx.defender_distance?;
    match input.contest {
        Some(ContestLevel::Tight) if d <= 2.0 => Some(format!(
            "With the defender only {:.1} feet away, you're looking at hand-in-face defense.",
            d
        )),
        Some(ContestLevel::Contested) if d <= 5.0 => {
            Some(format!("The defender at {:.1} feet is in active contest range.", d))
        }
        _ => None,
    }
}

fn quality_insight(input: &FeedbackInput) -> &'static str {
    let gap = input.threshold - input.make_probability;
    if gap >= LOW_PERCENTAGE_GAP {
        input.pick(&[
            "This shot grades well below our quality standards.",
            "The combination of factors makes this a low-value attempt.",
        ])
    } else if gap >= LOW_PERCENTAGE_GAP / 2.0 {
        input.pick(&[
            "This shot is below our target efficiency range.",
            "We can improve our chances with an extra pass or action.",
        ])
    } else {
        input.pick(&[
            "This is close, but we're looking for that extra edge.",
            "It's a borderline call, so lean toward quality.",
        ])
    }
}

fn probability_line(input: &FeedbackInput) -> String {
    let sign = if input.decision.is_take() { "+" } else { "" };
    format!(
        "Shot probability: {:.1}% (threshold: {:.1}%, margin: {}{:.1}%)",
        input.make_probability * 100.0,
        input.threshold * 100.0,
        sign,
        input.margin() * 100.0
    )
}

fn coach_pass_lines(input: &FeedbackInput, reason: PassReason) -> Vec<String> {
    let templates = templates_for(reason);
    let (lead, tail) = templates[input.variant(templates.len())];
    let notes = context_notes(input);

    let mut lines = Vec::with_capacity(4);
    lines.extend(defender_insight(input));
    lines.push(
        [lead, notes.as_str(), tail].iter().filter(|s| !s.is_empty()).copied().collect::<Vec<_>>().join(" "),
    );
    lines.push(quality_insight(input).to_string());
    lines.push(probability_line(input));
    lines
}

fn coach_take_lines(input: &FeedbackInput) -> Vec<String> {
    let ctx = input.ctx;
    let mut lines = Vec::with_capacity(3);

    let opener = if input.contest == Some(ContestLevel::WideOpen) {
        "You're wide open, this is a great look."
    } else if input.margin() >= 0.10 {
        "High-quality shot. Take it with confidence."
    } else {
        "Good look. Let it fly."
    };
    lines.push(opener.to_string());

    if ctx.shot_type.is_three() && ctx.zone.is_corner() {
        lines.push("Corner three is one of our best shots.".to_string());
    } else if ctx.shot_distance <= CLOSE_RANGE_FT {
        lines.push("You're at the rim, finish strong.".to_string());
    }

    lines.push(probability_line(input));
    lines
}

/// Ordered player cues; first match wins.
fn player_cue(input: &FeedbackInput) -> &'static str {
    let ctx = input.ctx;
    if input.decision.is_take() {
        return if matches!(input.contest, Some(ContestLevel::WideOpen | ContestLevel::Open)) {
            "You're open with a clean look. Let it fly."
        } else if ctx.zone.is_corner() {
            "Corner three with good spacing. Take the shot."
        } else if ctx.shot_distance <= CLOSE_RANGE_FT {
            "You're at the rim. Attack strong."
        } else {
            "This is a good shot for you. Be confident."
        };
    }

    match input.contest {
        Some(ContestLevel::Tight) => "Defender's hand is in your face. Move the ball.",
        Some(ContestLevel::Contested) if ctx.zone == CourtZone::MidRange => {
            "Contested long two isn't efficient. Find a better look."
        }
        _ if ctx.shot_type.is_three() && ctx.shot_distance >= DEEP_THREE_FT => {
            "Too deep for a good look. Reset or drive."
        }
        Some(ContestLevel::Contested) => "The defense is on you. Pass to create space.",
        _ if ctx.zone == CourtZone::MidRange && ctx.shot_distance >= LONG_TWO_FT => {
            "Long two isn't your best option. Get closer or kick out."
        }
        _ if input.late_clock() => "Clock's running down. Make a quick decision.",
        _ => "Not your shot right now. Keep the ball moving.",
    }
}

fn coaching_insight(input: &FeedbackInput) -> &'static str {
    let ctx = input.ctx;
    if input.decision.is_take() {
        return if matches!(input.contest, Some(ContestLevel::WideOpen | ContestLevel::Open)) {
            "Great shot selection discipline: open looks in rhythm are how efficient offenses operate."
        } else if ctx.zone.is_corner() {
            "Build corner three opportunities into the offense; they're the most efficient outside shots."
        } else if input.make_probability >= input.threshold + 0.15 {
            "This is exactly the type of high-quality shot we want to generate consistently."
        } else {
            "Confident, on-balance shooting in good locations builds offensive rhythm."
        };
    }

    if input.contest == Some(ContestLevel::Tight) {
        return "Encourage one more pass against tight closeouts; a defender committed to the ball opens passing lanes.";
    }
    if !ctx.shot_type.is_three() && ctx.zone == CourtZone::MidRange {
        return "Work on attacking the rim or creating three-point looks rather than settling for mid-range shots.";
    }
    if ctx.shot_type.is_three() && ctx.shot_distance >= DEEP_THREE_FT {
        return "Coach players to recognize range limits; relocating a few feet closer improves efficiency.";
    }
    match input.recommended_action {
        Some(RecommendedAction::SwingTheBall) => {
            "Encourage ball reversal to improve spacing and create better looks on the weak side."
        }
        Some(RecommendedAction::DriveAndKick | RecommendedAction::AttackTheRim) => {
            "Teach players to attack closeouts, driving to the rim or creating kick-out opportunities."
        }
        Some(RecommendedAction::ResetOffense) => {
            "Emphasize early offense execution to avoid late-clock forced attempts."
        }
        _ if input.pressured() => {
            "Reinforce the principle: when the defense commits, the offense moves the ball."
        }
        _ => "Shot selection discipline is the foundation of efficient offense. Trust the process.",
    }
}

pub fn build_feedback(input: &FeedbackInput) -> CoachFeedback {
    let (pass_reason, coach) = match input.decision {
        Decision::TakeShot => (None, coach_take_lines(input)),
        Decision::Pass => {
            let reason = classify_pass_reason(input);
            (Some(reason), coach_pass_lines(input, reason))
        }
    };
    CoachFeedback {
        pass_reason,
        player: vec![player_cue(input).to_string()],
        coach,
        coaching_insight: coaching_insight(input).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::{base_context, mid_range_context};
    use crate::context::ShotType;
    use crate::engine::contest::classify_contest;

    fn input(ctx: &ShotContext, p: f64, t: f64) -> FeedbackInput<'_> {
        FeedbackInput {
            ctx,
            contest: ctx.defender_distance.map(|d| classify_contest(Some(d))),
            decision: if p >= t { Decision::TakeShot } else { Decision::Pass },
            make_probability: p,
            threshold: t,
            late_clock_seconds: 5,
            recommended_action: None,
        }
    }

    #[test]
    fn test_tight_defense_wins_first() {
        let mut ctx = base_context();
        ctx.defender_distance = Some(1.5);
        ctx.mins_left = 0;
        ctx.secs_left = 3;
        let fb = build_feedback(&input(&ctx, 0.20, 0.35));
        assert_eq!(fb.pass_reason, Some(PassReason::TightDefense));
        assert_eq!(fb.player, vec!["Defender's hand is in your face. Move the ball."]);
        assert!(fb.coach[0].contains("only 1.5 feet away"));
        assert!(fb.coaching_insight.starts_with("Encourage one more pass"));
    }

    #[test]
    fn test_contested_three() {
        let mut ctx = base_context();
        ctx.defender_distance = Some(4.5);
        let fb = build_feedback(&input(&ctx, 0.30, 0.35));
        assert_eq!(fb.pass_reason, Some(PassReason::ContestedThree));
        assert!(fb.coach[0].contains("4.5 feet"));
    }

    #[test]
    fn test_reason_table_order() {
        let mut ctx = base_context();
        ctx.mins_left = 0;
        ctx.secs_left = 4;
        assert_eq!(classify_pass_reason(&input(&ctx, 0.10, 0.20)), PassReason::LateClockPressure);

        let mut ctx = mid_range_context();
        ctx.defender_distance = Some(8.0);
        assert_eq!(classify_pass_reason(&input(&ctx, 0.50, 0.55)), PassReason::PoorLocation);

        let mut ctx = base_context();
        ctx.quarter = 4;
        assert_eq!(classify_pass_reason(&input(&ctx, 0.20, 0.35)), PassReason::LowPercentageArea);

        ctx.quarter = 2;
        assert_eq!(classify_pass_reason(&input(&ctx, 0.32, 0.35)), PassReason::EarlyClockRush);

        ctx.quarter = 4;
        assert_eq!(classify_pass_reason(&input(&ctx, 0.32, 0.35)), PassReason::MarginalDecision);
    }

    #[test]
    fn test_pass_lines_shape() {
        let ctx = base_context();
        let fb = build_feedback(&input(&ctx, 0.30, 0.35));
        assert_eq!(fb.coach.len(), 3);
        assert!(fb.coach[0].contains("We've got time to work."));
        assert_eq!(fb.coach[2], "Shot probability: 30.0% (threshold: 35.0%, margin: 5.0%)");
    }

    #[test]
    fn test_context_notes_capped_at_two() {
        let mut ctx = base_context();
        ctx.quarter = 4;
        ctx.defender_distance = Some(4.0);
        let notes = context_notes(&input(&ctx, 0.30, 0.35));
        assert_eq!(notes, "We've got time to work. Late in the game, every possession matters.");
    }

    #[test]
    fn test_take_feedback() {
        let mut ctx = base_context();
        ctx.zone = CourtZone::CornerThreeLeft;
        ctx.defender_distance = Some(12.0);
        let fb = build_feedback(&input(&ctx, 0.47, 0.35));
        assert_eq!(fb.pass_reason, None);
        assert_eq!(fb.coach[0], "You're wide open, this is a great look.");
        assert_eq!(fb.coach[1], "Corner three is one of our best shots.");
        assert_eq!(fb.coach[2], "Shot probability: 47.0% (threshold: 35.0%, margin: +12.0%)");
        assert_eq!(fb.player, vec!["You're open with a clean look. Let it fly."]);
    }

    #[test]
    fn test_insight_follows_recommended_action() {
        let mut ctx = base_context();
        ctx.shot_type = ShotType::ThreePoint;
        let mut inp = input(&ctx, 0.30, 0.35);
        inp.recommended_action = Some(RecommendedAction::ResetOffense);
        assert!(coaching_insight(&inp).starts_with("Emphasize early offense"));
    }

    #[test]
    fn test_reason_names_match_serde() {
        let json = serde_json::to_string(&PassReason::LateClockPressure).unwrap();
        assert_eq!(json, format!("\"{}\"", PassReason::LateClockPressure.as_str()));
    }

    #[test]
    fn test_feedback_is_deterministic() {
        let mut ctx = mid_range_context();
        ctx.defender_distance = Some(2.5);
        let a = build_feedback(&input(&ctx, 0.28, 0.55));
        let b = build_feedback(&input(&ctx, 0.28, 0.55));
        assert_eq!(a, b);
    }
}
