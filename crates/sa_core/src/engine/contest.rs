use crate::context::ContestLevel;

// Upper bounds (inclusive) of each contest bucket, in feet
pub const TIGHT_MAX_FT: f64 = 3.0;
pub const CONTESTED_MAX_FT: f64 = 6.0;
pub const OPEN_MAX_FT: f64 = 10.0;

/// Map defender distance to a contest level.
///
/// No defender observed is OPEN, not WIDE_OPEN: an unknown defense is treated
/// as neutral rather than favorable.
pub fn classify_contest(defender_distance: Option<f64>) -> ContestLevel {
    match defender_distance {
        None => ContestLevel::Open,
        Some(d) if d <= TIGHT_MAX_FT => ContestLevel::Tight,
        Some(d) if d <= CONTESTED_MAX_FT => ContestLevel::Contested,
        Some(d) if d <= OPEN_MAX_FT => ContestLevel::Open,
        Some(_) => ContestLevel::WideOpen,
    }
}

/// Spacing description used in defender explanations.
pub fn distance_descriptor(defender_distance: f64) -> &'static str {
    match classify_contest(Some(defender_distance)) {
        ContestLevel::Tight => "tight closeout",
        ContestLevel::Contested => "contested",
        ContestLevel::Open => "open look",
        ContestLevel::WideOpen => "wide-open",
    }
}

pub fn contest_descriptor(level: ContestLevel) -> &'static str {
    match level {
        ContestLevel::Tight => "active hand contest",
        ContestLevel::Contested => "moderate pressure",
        ContestLevel::Open => "late rotation",
        ContestLevel::WideOpen => "no real contest",
    }
}
