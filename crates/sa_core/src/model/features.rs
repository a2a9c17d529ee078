use serde::Serialize;

use crate::context::geometry::{distance_from_center, shot_angle_deg};
use crate::context::{CourtSide, CourtZone, Position, PositionGroup, ShotContext, ShotType};

pub const NUMERIC_FEATURES: [&str; 9] = [
    "SHOT_DISTANCE",
    "LOC_X",
    "LOC_Y",
    "QUARTER",
    "MINS_LEFT",
    "SECS_LEFT",
    "TIME_REMAINING",
    "SHOT_ANGLE",
    "DISTANCE_FROM_CENTER",
];

/// One-hot groups in encoding order.
pub const CATEGORICAL_GROUPS: [&str; 5] =
    ["SHOT_TYPE", "BASIC_ZONE", "ZONE_NAME", "POSITION", "POSITION_GROUP"];

pub const FEATURE_COUNT: usize = NUMERIC_FEATURES.len()
    + ShotType::ALL.len()
    + CourtZone::ALL.len()
    + CourtSide::ALL.len()
    + Position::ALL.len()
    + PositionGroup::ALL.len();

/// Fixed-shape model input: numeric columns, then `GROUP_category` one-hots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

/// Category labels per one-hot group, in encoding order.
fn categories() -> [(&'static str, Vec<&'static str>); 5] {
    [
        ("SHOT_TYPE", ShotType::ALL.iter().map(ShotType::label).collect()),
        ("BASIC_ZONE", CourtZone::ALL.iter().map(CourtZone::label).collect()),
        ("ZONE_NAME", CourtSide::ALL.iter().map(CourtSide::label).collect()),
        ("POSITION", Position::ALL.iter().map(Position::code).collect()),
        ("POSITION_GROUP", PositionGroup::ALL.iter().map(PositionGroup::code).collect()),
    ]
}

/// Column names of every vector, in order.
pub fn feature_names() -> Vec<String> {
    let mut names: Vec<String> = NUMERIC_FEATURES.iter().map(|n| n.to_string()).collect();
    for (group, labels) in categories() {
        names.extend(labels.iter().map(|label| format!("{}_{}", group, label)));
    }
    names
}

impl FeatureVector {
    pub fn from_context(ctx: &ShotContext) -> Self {
        let mut values = vec![
            ctx.shot_distance,
            ctx.loc_x,
            ctx.loc_y,
            ctx.quarter as f64,
            ctx.mins_left as f64,
            ctx.secs_left as f64,
            ctx.seconds_remaining() as f64,
            shot_angle_deg(ctx.loc_x, ctx.loc_y),
            distance_from_center(ctx.loc_x, ctx.loc_y),
        ];

        let selected = [
            ctx.shot_type.label(),
            ctx.zone.label(),
            ctx.zone.side().label(),
            ctx.position.code(),
            ctx.position.group().code(),
        ];
        for ((_, labels), hot) in categories().iter().zip(selected) {
            values.extend(labels.iter().map(|label| if *label == hot { 1.0 } else { 0.0 }));
        }

        Self { names: feature_names(), values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names.iter().position(|n| n == name).map(|i| self.values[i])
    }
}
