//! Pure decision components.
//!
//! Each stage is a free function over its config slice and the shot context;
//! `advisory::evaluate` wires them together. Nothing in here logs or touches
//! shared state.

pub mod action;
pub mod action_confidence;
pub mod breakdown;
pub mod contest;
pub mod decision;
pub mod explanation;
pub mod feedback;
pub mod pressure;
pub mod threshold;
