//! # Advisory Configuration
//!
//! All tuning constants of the engine live here instead of inside the rules.
//!
//! ## Presets
//!
//! | Profile | Description |
//! |---------|-------------|
//! | `default` | Balanced bar, the reference tuning |
//! | `selective` | Higher bar, fewer marginal attempts |
//! | `green_light` | Lower bar, more threes and late-clock shots |
//!
//! ## Usage
//!
//! ```rust
//! use sa_core::config::AdvisoryConfig;
//!
//! let config = AdvisoryConfig::default();
//! let selective = AdvisoryConfig::selective();
//!
//! // Partial YAML overrides the defaults field by field
//! let tuned = AdvisoryConfig::from_yaml_str("threshold:\n  base: 0.5\n").unwrap();
//! assert_eq!(tuned.threshold.base, 0.5);
//! ```
//!
//! ## Environment Variables
//!
//! - `SA_ADVISORY_PROFILE`: Select preset (selective, green_light, default)

mod action_config;
mod breakdown_config;
mod pressure_config;
mod threshold_config;

pub use action_config::ActionConfig;
pub use breakdown_config::BreakdownConfig;
pub use pressure_config::PressureConfig;
pub use threshold_config::ThresholdConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AdvisoryError, Result};

pub const PROFILE_ENV_VAR: &str = "SA_ADVISORY_PROFILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub threshold: ThresholdConfig,
    pub pressure: PressureConfig,
    pub breakdown: BreakdownConfig,
    pub actions: ActionConfig,
}

impl AdvisoryConfig {
    pub fn selective() -> Self {
        Self { threshold: ThresholdConfig::selective(), ..Self::default() }
    }

    pub fn green_light() -> Self {
        let mut cfg = Self { threshold: ThresholdConfig::green_light(), ..Self::default() };
        cfg.pressure.tight_multiplier = 0.88;
        cfg.actions.reset_gap = 0.12;
        cfg
    }

    /// Preset by name; `None` for an unknown profile.
    pub fn from_profile(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "default" | "realistic" => Some(Self::default()),
            "selective" => Some(Self::selective()),
            "green_light" | "green-light" => Some(Self::green_light()),
            _ => None,
        }
    }

    /// Load from `SA_ADVISORY_PROFILE` or use default
    pub fn from_env_or_default() -> Self {
        env::var(PROFILE_ENV_VAR)
            .ok()
            .and_then(|name| Self::from_profile(&name))
            .unwrap_or_default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)
            .map_err(|e| AdvisoryError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.threshold
            .validate()
            .and_then(|_| self.pressure.validate())
            .and_then(|_| self.breakdown.validate())
            .and_then(|_| self.actions.validate(self.threshold.late_clock_seconds))
            .map_err(AdvisoryError::InvalidConfig)
    }
}

// ========== Tests ==========
