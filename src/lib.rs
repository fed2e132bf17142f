/*
 * VelvetHat Boids - Module Definitions
 *
 * This file defines the module structure for the flocking minigame.
 * The simulation core (config, flock, driver) carries no window state
 * and is exercised directly by the tests and benchmarks; the app, ui
 * and input modules wire it into the nannou shell.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boid::Boid;
pub use config::{ConfigError, FlockConfig};
pub use driver::FlockDriver;
pub use flock::Flock;

// Define modules
pub mod app;
pub mod boid;
pub mod config;
pub mod driver;
pub mod flock;
pub mod input;
pub mod ui;

// Constants
pub const BOID_SIZE: f32 = 6.0;
pub const SPAWN_EXTENT: f32 = 50.0;
