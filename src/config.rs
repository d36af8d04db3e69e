//! Session configuration loaded from JSON.
//!
//! ```rust
//! use gm_interface::config::InterfaceConfig;
//! use gm_interface::params::Variant;
//!
//! let config = InterfaceConfig::from_json(
//!     r#"{ "variant": "CADILLAC CT6 SUPERCRUISE 2018", "follow_level": 3 }"#,
//! ).unwrap();
//!
//! assert_eq!(config.variant().unwrap(), Variant::CadillacCt6);
//! assert_eq!(config.initial_persisted().unwrap().follow_level.get(), 3);
//! ```

use crate::core::{FollowLevel, PersistedCycleState};
use crate::interface::{CarInterface, Controller, DEFAULT_MAX_HUD_SET_SPEED};
use crate::params::{ParamTable, ParamsError, Variant};
use crate::translate::VehicleModel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse failed: {0}")]
    Parse(String),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("Follow level {0} outside 1..=3")]
    FollowLevel(u8),

    #[error("Max HUD set speed must be positive, got {0}")]
    MaxHudSetSpeed(f64),
}

fn default_follow_level() -> u8 {
    FollowLevel::default().get()
}

fn default_max_hud_set_speed() -> f64 {
    DEFAULT_MAX_HUD_SET_SPEED
}

/// Per-session settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Fingerprint string of the vehicle variant.
    pub variant: String,
    #[serde(default = "default_follow_level")]
    pub follow_level: u8,
    #[serde(default = "default_max_hud_set_speed")]
    pub max_hud_set_speed: f64,
    /// Relay harness fitted between the car and the stock camera.
    #[serde(default)]
    pub has_relay: bool,
}

impl InterfaceConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant: variant.name().to_string(),
            follow_level: default_follow_level(),
            max_hud_set_speed: default_max_hud_set_speed(),
            has_relay: false,
        }
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.variant()?;
        FollowLevel::new(self.follow_level).ok_or(ConfigError::FollowLevel(self.follow_level))?;
        if self.max_hud_set_speed.is_nan() || self.max_hud_set_speed <= 0.0 {
            return Err(ConfigError::MaxHudSetSpeed(self.max_hud_set_speed));
        }
        Ok(())
    }

    pub fn variant(&self) -> Result<Variant, ConfigError> {
        Ok(self.variant.parse()?)
    }

    pub fn params(&self) -> Result<ParamTable, ConfigError> {
        Ok(self.variant()?.params_with(self.has_relay))
    }

    /// Persisted state a fresh session starts from.
    pub fn initial_persisted(&self) -> Result<PersistedCycleState, ConfigError> {
        let level =
            FollowLevel::new(self.follow_level).ok_or(ConfigError::FollowLevel(self.follow_level))?;
        Ok(PersistedCycleState::default().with_follow_level(level))
    }

    pub fn build_interface<M, C>(&self, model: M, controller: C) -> Result<CarInterface<M, C>, ConfigError>
    where
        M: VehicleModel,
        C: Controller,
    {
        self.validate()?;
        Ok(CarInterface::new(self.params()?, model, controller)
            .with_max_hud_set_speed(self.max_hud_set_speed))
    }
}
