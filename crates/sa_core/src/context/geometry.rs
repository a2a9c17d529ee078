//! Half-court geometry in basket-relative feet.
//!
//! Used when a request carries only a court location: shot type and zone are
//! inferred the same way the NBA shot chart buckets attempts.

use super::{CourtZone, ShotType};

/// Arc distance at and beyond which a shot is a three.
pub const THREE_POINT_ARC_FT: f64 = 23.0;
/// Corner three line, measured from the basket along x.
pub const CORNER_THREE_X_FT: f64 = 22.0;
/// Corner region ends where the arc begins (14 ft from the baseline).
pub const CORNER_MAX_Y_FT: f64 = 8.75;
pub const RESTRICTED_AREA_FT: f64 = 4.0;
/// Half-width of the 16 ft lane.
pub const PAINT_HALF_WIDTH_FT: f64 = 8.0;
/// Free-throw line, basket-relative.
pub const PAINT_MAX_Y_FT: f64 = 14.0;

fn in_corner(loc_x: f64, loc_y: f64) -> bool {
    loc_x.abs() >= CORNER_THREE_X_FT && loc_y <= CORNER_MAX_Y_FT
}

pub fn infer_shot_type(shot_distance: f64, loc_x: f64, loc_y: f64) -> ShotType {
    if shot_distance >= THREE_POINT_ARC_FT || in_corner(loc_x, loc_y) {
        ShotType::ThreePoint
    } else {
        ShotType::TwoPoint
    }
}

pub fn infer_zone(shot_distance: f64, loc_x: f64, loc_y: f64) -> CourtZone {
    if shot_distance <= RESTRICTED_AREA_FT {
        return CourtZone::RestrictedArea;
    }
    if loc_x.abs() <= PAINT_HALF_WIDTH_FT && loc_y <= PAINT_MAX_Y_FT {
        return CourtZone::PaintNonRa;
    }
    match infer_shot_type(shot_distance, loc_x, loc_y) {
        ShotType::ThreePoint if in_corner(loc_x, loc_y) => {
            if loc_x < 0.0 {
                CourtZone::CornerThreeLeft
            } else {
                CourtZone::CornerThreeRight
            }
        }
        ShotType::ThreePoint => CourtZone::AboveBreakThree,
        ShotType::TwoPoint => CourtZone::MidRange,
    }
}

/// Angle of the shot location in degrees, `atan2(y, x)`.
pub fn shot_angle_deg(loc_x: f64, loc_y: f64) -> f64 {
    loc_y.atan2(loc_x).to_degrees()
}

pub fn distance_from_center(loc_x: f64, loc_y: f64) -> f64 {
    loc_x.hypot(loc_y)
}
