//! # sa_core - Shot Advisory Decision Engine
//!
//! Turns a baseline make probability plus shot context into a TAKE/PASS
//! decision with a confidence score, a probability breakdown, an ordered
//! explanation and, for PASS, a recommended off-ball action.
//!
//! ## Features
//! - Pure, synchronous evaluation (same input = same output)
//! - Declarative threshold and action rule tables
//! - Narrow `ShotModel` boundary for the predictive model
//! - JSON API for the serving layer
//!
//! ```rust
//! use sa_core::{evaluate, AdvisoryConfig, CourtZone, Position, ShotContext, ShotType};
//!
//! let ctx = ShotContext {
//!     shot_distance: 24.0,
//!     loc_x: 0.0,
//!     loc_y: 24.0,
//!     shot_type: ShotType::ThreePoint,
//!     zone: CourtZone::AboveBreakThree,
//!     quarter: 4,
//!     mins_left: 0,
//!     secs_left: 18,
//!     position: Position::PointGuard,
//!     defender_distance: None,
//! };
//! let result = evaluate(&AdvisoryConfig::default(), &ctx, 0.40).unwrap();
//! assert!(result.decision.is_take());
//! ```

// Rule tables index config fields through fn pointers; keep the signatures uniform.
#![allow(clippy::type_complexity)]

pub mod advisory;
pub mod api;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod model;

pub use advisory::{evaluate, AdvisoryResult, DefenderImpactDetails, ShotAdvisor};
pub use api::{advise_json, AdvisoryRequest};
pub use config::AdvisoryConfig;
pub use context::{ContestLevel, CourtZone, Position, ShotContext, ShotType};
pub use engine::action::RecommendedAction;
pub use engine::action_confidence::{ActionConfidence, ConfidenceLevel};
pub use engine::breakdown::ShotQualityBreakdown;
pub use engine::decision::Decision;
pub use engine::feedback::{CoachFeedback, PassReason};
pub use error::{AdvisoryError, Result};
pub use model::{FeatureVector, FixedProbabilityModel, LogisticModel, ModelError, ShotModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
