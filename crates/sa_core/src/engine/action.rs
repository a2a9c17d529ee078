//! Off-ball action recommender for PASS decisions.
//!
//! An ordered table of (predicate, action, reasoning template) entries.
//! First match wins; groups are laid out contest -> clock -> zone, and a
//! fallback guarantees exactly one action per call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ActionConfig;
use crate::context::{ContestLevel, CourtZone, ShotContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RecommendedAction {
    #[serde(rename = "Swing the ball")]
    SwingTheBall,
    #[serde(rename = "Attack the rim")]
    AttackTheRim,
    #[serde(rename = "Reset the offense")]
    ResetOffense,
    #[serde(rename = "Relocate")]
    Relocate,
    #[serde(rename = "Look inside")]
    LookInside,
    #[serde(rename = "Drive and kick")]
    DriveAndKick,
    #[serde(rename = "Use the clock")]
    UseTheClock,
    #[serde(rename = "Take the best available shot")]
    BestAvailable,
}

impl RecommendedAction {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedAction::SwingTheBall => "Swing the ball",
            RecommendedAction::AttackTheRim => "Attack the rim",
            RecommendedAction::ResetOffense => "Reset the offense",
            RecommendedAction::Relocate => "Relocate",
            RecommendedAction::LookInside => "Look inside",
            RecommendedAction::DriveAndKick => "Drive and kick",
            RecommendedAction::UseTheClock => "Use the clock",
            RecommendedAction::BestAvailable => "Take the best available shot",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionGroup {
    Contest,
    Clock,
    Zone,
    Fallback,
}

/// Everything an action rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct ActionInput<'a> {
    pub ctx: &'a ShotContext,
    pub contest: ContestLevel,
    pub make_probability: f64,
    pub threshold: f64,
    /// Critical-clock window, shared with the late-clock threshold rule
    pub late_clock_seconds: u32,
}

impl ActionInput<'_> {
    fn seconds(&self) -> u32 {
        self.ctx.seconds_remaining()
    }

    fn late_clock(&self) -> bool {
        self.seconds() <= self.late_clock_seconds
    }

    fn gap(&self) -> f64 {
        self.threshold - self.make_probability
    }

    fn defender(&self) -> String {
        match self.ctx.defender_distance {
            Some(d) => format!("{:.1} ft away", d),
            None => "close".to_string(),
        }
    }
}

pub struct ActionRule {
    pub id: &'static str,
    pub group: ActionGroup,
    pub applies: fn(&ActionInput, &ActionConfig) -> bool,
    pub action: RecommendedAction,
    pub reasoning: fn(&ActionInput) -> String,
}

pub static ACTION_RULES: [ActionRule; 8] = [
    // --- contest ---
    ActionRule {
        id: "tight_perimeter",
        group: ActionGroup::Contest,
        applies: |a, _| {
            a.contest == ContestLevel::Tight && a.ctx.zone.is_three_point() && !a.late_clock()
        },
        action: RecommendedAction::DriveAndKick,
        reasoning: |a| {
            format!(
                "The defender is tight on you ({}) at the {}. With {}s left, put it on the floor \
                 to collapse the defense and kick to an open shooter.",
                a.defender(),
                a.ctx.zone.label(),
                a.seconds()
            )
        },
    },
    ActionRule {
        id: "pressured_shot",
        group: ActionGroup::Contest,
        applies: |a, _| a.contest.is_pressured(),
        action: RecommendedAction::SwingTheBall,
        reasoning: |a| {
            format!(
                "The defender is {} ({}) on this {}. A quick swing forces a rotation and should \
                 find a better angle on the weak side.",
                if a.contest == ContestLevel::Tight { "locked in" } else { "contesting" },
                a.defender(),
                a.ctx.shot_type.short_label()
            )
        },
    },
    ActionRule {
        id: "open_mid_range",
        group: ActionGroup::Contest,
        applies: |a, _| {
            !a.contest.is_pressured() && a.ctx.zone == CourtZone::MidRange && !a.late_clock()
        },
        action: RecommendedAction::AttackTheRim,
        reasoning: |a| {
            format!(
                "Your defender is giving you space in the mid-range ({}). Attack the rim - a \
                 drive beats a {:.1}% pull-up.",
                a.contest.as_str(),
                a.make_probability * 100.0
            )
        },
    },
    // --- clock ---
    ActionRule {
        id: "critical_clock",
        group: ActionGroup::Clock,
        applies: |a, _| a.late_clock(),
        action: RecommendedAction::BestAvailable,
        reasoning: |a| {
            format!(
                "Only {}s left in the period. If nothing better opens in the next beat, this is \
                 your best available shot.",
                a.seconds()
            )
        },
    },
    ActionRule {
        id: "low_clock",
        group: ActionGroup::Clock,
        applies: |a, cfg| a.seconds() <= cfg.use_clock_seconds,
        action: RecommendedAction::UseTheClock,
        reasoning: |a| {
            format!(
                "{}s left - no need to force a {:.1}% look. Work the ball and use the clock so \
                 the other team gets no time back.",
                a.seconds(),
                a.make_probability * 100.0
            )
        },
    },
    ActionRule {
        id: "far_below_bar",
        group: ActionGroup::Clock,
        applies: |a, cfg| a.gap() >= cfg.reset_gap,
        action: RecommendedAction::ResetOffense,
        reasoning: |a| {
            format!(
                "This shot is {:.1} points under the bar ({:.1}% vs {:.1}%). With {}s left, reset \
                 and run an action for a better look.",
                a.gap() * 100.0,
                a.make_probability * 100.0,
                a.threshold * 100.0,
                a.seconds()
            )
        },
    },
    // --- zone ---
    ActionRule {
        id: "weak_zone",
        group: ActionGroup::Zone,
        applies: |a, _| matches!(a.ctx.zone, CourtZone::MidRange | CourtZone::AboveBreakThree),
        action: RecommendedAction::Relocate,
        reasoning: |a| {
            format!(
                "The {} is not giving you a quality look ({:.1}%). Relocate to a cleaner window \
                 while there is time.",
                a.ctx.zone.label(),
                a.make_probability * 100.0
            )
        },
    },
    ActionRule {
        id: "paint_proxy",
        group: ActionGroup::Zone,
        applies: |a, _| a.ctx.zone.is_corner() || a.ctx.zone == CourtZone::PaintNonRa,
        action: RecommendedAction::LookInside,
        reasoning: |a| {
            format!(
                "From the {}, look inside - a post touch or a cutter in the paint draws help and \
                 opens a better shot.",
                a.ctx.zone.label()
            )
        },
    },
];

pub static FALLBACK_RULE: ActionRule = ActionRule {
    id: "fallback",
    group: ActionGroup::Fallback,
    applies: |_, _| true,
    action: RecommendedAction::SwingTheBall,
    reasoning: |a| {
        format!(
            "The shot is below the bar ({:.1}% vs {:.1}%). Move the ball to find a better look.",
            a.make_probability * 100.0,
            a.threshold * 100.0
        )
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ActionRecommendation {
    pub action: RecommendedAction,
    pub reasoning: String,
    pub rule_id: &'static str,
    pub group: ActionGroup,
}

pub fn recommend_action(config: &ActionConfig, input: &ActionInput) -> ActionRecommendation {
    let rule = ACTION_RULES
        .iter()
        .find(|rule| (rule.applies)(input, config))
        .unwrap_or(&FALLBACK_RULE);

    ActionRecommendation {
        action: rule.action,
        reasoning: (rule.reasoning)(input),
        rule_id: rule.id,
        group: rule.group,
    }
}
