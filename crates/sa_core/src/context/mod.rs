//! Shot context: the per-call input of the advisory engine.
//!
//! Enums serialize as SCREAMING_SNAKE names and also accept the NBA
//! shot-chart labels (`"3PT Field Goal"`, `"Mid-Range"`, ...) so requests
//! built from play-by-play exports deserialize unchanged.

pub mod geometry;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisoryError, Result};

/// Longest period clock the engine accepts (regulation quarter).
pub const MAX_MINUTES_LEFT: u8 = 12;
pub const MAX_SECONDS_LEFT: u8 = 59;

/// First overtime period number.
pub const FIRST_OVERTIME: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ShotType {
    #[serde(rename = "TWO_POINT", alias = "2PT Field Goal")]
    TwoPoint,
    #[serde(rename = "THREE_POINT", alias = "3PT Field Goal")]
    ThreePoint,
}

impl ShotType {
    pub const ALL: [ShotType; 2] = [ShotType::TwoPoint, ShotType::ThreePoint];

    pub fn is_three(&self) -> bool {
        matches!(self, ShotType::ThreePoint)
    }

    /// NBA shot-chart label (also the one-hot category name).
    pub fn label(&self) -> &'static str {
        match self {
            ShotType::TwoPoint => "2PT Field Goal",
            ShotType::ThreePoint => "3PT Field Goal",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            ShotType::TwoPoint => "two-pointer",
            ShotType::ThreePoint => "three-pointer",
        }
    }
}

/// Basic shot zone, basket-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtZone {
    #[serde(alias = "Restricted Area")]
    RestrictedArea,
    #[serde(alias = "In The Paint (Non-RA)")]
    PaintNonRa,
    #[serde(alias = "Mid-Range")]
    MidRange,
    #[serde(alias = "Above the Break 3")]
    AboveBreakThree,
    #[serde(alias = "Left Corner 3")]
    CornerThreeLeft,
    #[serde(alias = "Right Corner 3")]
    CornerThreeRight,
}

impl CourtZone {
    pub const ALL: [CourtZone; 6] = [
        CourtZone::RestrictedArea,
        CourtZone::PaintNonRa,
        CourtZone::MidRange,
        CourtZone::AboveBreakThree,
        CourtZone::CornerThreeLeft,
        CourtZone::CornerThreeRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CourtZone::RestrictedArea => "Restricted Area",
            CourtZone::PaintNonRa => "In The Paint (Non-RA)",
            CourtZone::MidRange => "Mid-Range",
            CourtZone::AboveBreakThree => "Above the Break 3",
            CourtZone::CornerThreeLeft => "Left Corner 3",
            CourtZone::CornerThreeRight => "Right Corner 3",
        }
    }

    pub fn is_three_point(&self) -> bool {
        matches!(
            self,
            CourtZone::AboveBreakThree | CourtZone::CornerThreeLeft | CourtZone::CornerThreeRight
        )
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, CourtZone::CornerThreeLeft | CourtZone::CornerThreeRight)
    }

    /// Restricted area or the rest of the paint.
    pub fn is_paint(&self) -> bool {
        matches!(self, CourtZone::RestrictedArea | CourtZone::PaintNonRa)
    }

    /// Coarse side-of-floor bucket used by the feature encoder.
    pub fn side(&self) -> CourtSide {
        match self {
            CourtZone::CornerThreeLeft => CourtSide::Left,
            CourtZone::CornerThreeRight => CourtSide::Right,
            _ => CourtSide::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourtSide {
    Center,
    Left,
    Right,
}

impl CourtSide {
    pub const ALL: [CourtSide; 3] = [CourtSide::Center, CourtSide::Left, CourtSide::Right];

    pub fn label(&self) -> &'static str {
        match self {
            CourtSide::Center => "Center",
            CourtSide::Left => "Left Side",
            CourtSide::Right => "Right Side",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Position {
    #[default]
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::PointGuard | Position::ShootingGuard => PositionGroup::Guard,
            Position::SmallForward | Position::PowerForward => PositionGroup::Forward,
            Position::Center => PositionGroup::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Guard,
    Forward,
    Center,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 3] =
        [PositionGroup::Guard, PositionGroup::Forward, PositionGroup::Center];

    pub fn code(&self) -> &'static str {
        match self {
            PositionGroup::Guard => "G",
            PositionGroup::Forward => "F",
            PositionGroup::Center => "C",
        }
    }
}

/// Defensive contest bucket, derived from defender distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestLevel {
    Tight,
    Contested,
    Open,
    WideOpen,
}

impl ContestLevel {
    pub const ALL: [ContestLevel; 4] =
        [ContestLevel::Tight, ContestLevel::Contested, ContestLevel::Open, ContestLevel::WideOpen];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContestLevel::Tight => "TIGHT",
            ContestLevel::Contested => "CONTESTED",
            ContestLevel::Open => "OPEN",
            ContestLevel::WideOpen => "WIDE_OPEN",
        }
    }

    /// TIGHT or CONTESTED.
    pub fn is_pressured(&self) -> bool {
        matches!(self, ContestLevel::Tight | ContestLevel::Contested)
    }
}

/// One shot attempt as seen by the advisory engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShotContext {
    /// Distance from the basket in feet.
    pub shot_distance: f64,
    /// Basket-relative court location in feet; negative x is the left side.
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_type: ShotType,
    pub zone: CourtZone,
    /// 1-4 regulation, 5 = first overtime.
    pub quarter: u8,
    pub mins_left: u8,
    pub secs_left: u8,
    #[serde(default)]
    pub position: Position,
    /// `None` means no defender was placed.
    #[serde(default)]
    pub defender_distance: Option<f64>,
}

impl ShotContext {
    /// Rejects any field outside its declared domain.
    pub fn validate(&self) -> Result<()> {
        if !self.shot_distance.is_finite() || self.shot_distance < 0.0 {
            return Err(AdvisoryError::invalid(
                "shot_distance",
                self.shot_distance,
                "must be a finite distance >= 0",
            ));
        }
        if !self.loc_x.is_finite() {
            return Err(AdvisoryError::invalid("loc_x", self.loc_x, "must be finite"));
        }
        if !self.loc_y.is_finite() {
            return Err(AdvisoryError::invalid("loc_y", self.loc_y, "must be finite"));
        }
        if self.quarter < 1 {
            return Err(AdvisoryError::invalid("quarter", self.quarter, "must be >= 1"));
        }
        if self.mins_left > MAX_MINUTES_LEFT {
            return Err(AdvisoryError::invalid("mins_left", self.mins_left, "must be in 0..=12"));
        }
        if self.secs_left > MAX_SECONDS_LEFT {
            return Err(AdvisoryError::invalid("secs_left", self.secs_left, "must be in 0..=59"));
        }
        if let Some(d) = self.defender_distance {
            if !d.is_finite() || d < 0.0 {
                return Err(AdvisoryError::invalid(
                    "defender_distance",
                    d,
                    "must be a finite distance >= 0",
                ));
            }
        }
        Ok(())
    }

    /// Total seconds left in the period.
    pub fn seconds_remaining(&self) -> u32 {
        self.mins_left as u32 * 60 + self.secs_left as u32
    }

    pub fn is_overtime(&self) -> bool {
        self.quarter >= FIRST_OVERTIME
    }

    pub fn contest_level(&self) -> ContestLevel {
        crate::engine::contest::classify_contest(self.defender_distance)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Open above-the-break three, Q2, plenty of clock.
    pub fn base_context() -> ShotContext {
        ShotContext {
            shot_distance: 24.0,
            loc_x: 0.0,
            loc_y: 24.0,
            shot_type: ShotType::ThreePoint,
            zone: CourtZone::AboveBreakThree,
            quarter: 2,
            mins_left: 6,
            secs_left: 30,
            position: Position::PointGuard,
            defender_distance: None,
        }
    }

    pub fn mid_range_context() -> ShotContext {
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
            defender_distance: None,
        }
    }
}
