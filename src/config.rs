/*
 * Flock Configuration Module
 *
 * This module defines the FlockConfig struct that contains all the
 * tunable parameters for the flock simulation, together with validation
 * and loading from the collection's JSON configuration file. The config
 * is passed explicitly into every constructor; there is no global state.
 *
 * Note that alert_distance and formation_distance are compared against
 * squared distances in the update rules, so they are squared thresholds.
 */

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

// Errors surfaced by configuration loading and by constructors that
// receive a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

// Tunable parameters for the flock simulation. Values are fixed for the
// lifetime of a flock; slider edits in the UI take effect on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    // Exclusive upper bound for the boid count sampled at session start
    pub max_boids: usize,
    // Initial velocity sampling bounds: min x, min y, max x, max y
    pub velocity_limits: [f32; 4],
    // Pull towards the flock centroid
    pub cohesion_strength: f32,
    // Squared distance below which boids push each other apart
    pub alert_distance: f32,
    // Squared distance below which boids match velocities
    pub formation_distance: f32,
    pub formation_strength: f32,
    // Carried tunable; the goal force reuses cohesion_strength
    pub goal_strength: f32,
    // Overall velocity scale applied at the position update
    pub velocity_coefficient: f32,
    // Simulation ticks per second
    pub update_frequency: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            max_boids: 20,
            velocity_limits: [-40.0, -40.0, 40.0, 40.0],
            cohesion_strength: 0.01,
            alert_distance: 100.0,
            formation_distance: 10_000.0,
            formation_strength: 0.125,
            goal_strength: 0.01,
            velocity_coefficient: 0.05,
            update_frequency: 30.0,
        }
    }
}

impl FlockConfig {
    // Load the configuration from a JSON file, falling back to the
    // defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;

        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The session sampler draws from 2..max_boids
        if self.max_boids < 3 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "max_boids must be at least 3, got {}",
                self.max_boids
            )));
        }

        let [min_x, min_y, max_x, max_y] = self.velocity_limits;
        if min_x > max_x || min_y > max_y {
            return Err(ConfigError::InvalidConfiguration(format!(
                "velocity_limits lower bounds exceed upper bounds: {:?}",
                self.velocity_limits
            )));
        }

        if self.update_frequency <= 0.0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "update_frequency must be positive, got {}",
                self.update_frequency
            )));
        }

        let non_negative = [
            ("cohesion_strength", self.cohesion_strength),
            ("alert_distance", self.alert_distance),
            ("formation_distance", self.formation_distance),
            ("formation_strength", self.formation_strength),
            ("goal_strength", self.goal_strength),
            ("velocity_coefficient", self.velocity_coefficient),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn max_boids_range() -> RangeInclusive<usize> {
        3..=100
    }

    pub fn strength_range() -> RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn alert_distance_range() -> RangeInclusive<f32> {
        0.0..=2_500.0
    }

    pub fn formation_distance_range() -> RangeInclusive<f32> {
        0.0..=40_000.0
    }

    pub fn velocity_coefficient_range() -> RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn update_frequency_range() -> RangeInclusive<f32> {
        1.0..=120.0
    }
}
