//! Follow configuration: speed, acceleration, dead zone and follow point.

use crate::constants::*;
use glam::Vec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse follow config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// How the camera closes the gap to its target each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPolicy {
    /// Snap straight to the target
    Teleport,
    /// Move a fixed distance per frame
    ConstantSpeed { speed: f32 },
    /// Ease in up to `speed`, then brake so the camera stops on the target
    Accelerated { speed: f32, acceleration: f32 },
}

/// Follow behavior configuration.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// World units per frame; zero teleports
    pub speed: f32,
    /// World units per frame squared; ignored when `speed` is zero
    pub acceleration: Option<f32>,
    /// Dead-zone radius around the follow point (world space)
    pub radius: Option<f32>,
    /// Canvas-space anchor; `None` keeps the target at the screen center
    pub follow_point: Option<Vec2>,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            speed: FOLLOW_DEFAULT_SPEED,
            acceleration: None,
            radius: None,
            follow_point: None,
        }
    }
}

impl FollowConfig {
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_follow_point(mut self, point: Vec2) -> Self {
        self.follow_point = Some(point);
        self
    }

    /// Parse a config from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FollowConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Parsed follow config: {:?}", config);
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject negative or non-finite numbers
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("speed", self.speed)?;
        if let Some(acceleration) = self.acceleration {
            check_non_negative("acceleration", acceleration)?;
        }
        if let Some(radius) = self.radius {
            check_non_negative("radius", radius)?;
        }
        if let Some(point) = self.follow_point {
            if !point.is_finite() {
                return Err(ConfigError::NotFinite { field: "follow_point" });
            }
        }
        Ok(())
    }

    /// Dead-zone radius if the dead zone is enabled
    pub fn dead_zone(&self) -> Option<f32> {
        self.radius.filter(|&r| r > FOLLOW_RADIUS_DISABLED)
    }

    pub fn policy(&self) -> MotionPolicy {
        if self.speed == 0.0 {
            return MotionPolicy::Teleport;
        }
        match self.acceleration {
            Some(acceleration) if acceleration != 0.0 => MotionPolicy::Accelerated {
                speed: self.speed,
                acceleration,
            },
            _ => MotionPolicy::ConstantSpeed { speed: self.speed },
        }
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
