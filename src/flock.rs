/*
 * Flock Module
 *
 * This module owns the aggregate simulation state (one position and one
 * velocity per boid) and implements the update rules:
 * 1. Cohesion: pull every boid towards the flock centroid
 * 2. Separation: push boids apart when closer than the alert distance
 * 3. Velocity matching: align each boid with its neighbourhood average
 * 4. Goal-seeking: pull the flock towards an optional attraction point
 *
 * The rules run in that fixed order; each one sees the velocity state
 * left by the previous one. Distance thresholds are compared against
 * squared distances. Velocities are not clamped after construction; the
 * configured limits only shape the initial sampling.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::config::{ConfigError, FlockConfig};

#[derive(Clone)]
pub struct Flock {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    cohesion_strength: f32,
    alert_distance: f32,
    formation_distance: f32,
    formation_strength: f32,
    velocity_coefficient: f32,
}

impl Flock {
    // Create a flock with positions sampled uniformly from the given
    // per-axis ranges and velocities sampled from the configured limits.
    pub fn spawn(
        n_boids: usize,
        pos_x_range: [f32; 2],
        pos_y_range: [f32; 2],
        config: &FlockConfig,
    ) -> Result<Self, ConfigError> {
        Self::spawn_with_rng(n_boids, pos_x_range, pos_y_range, config, &mut rand::thread_rng())
    }

    pub fn spawn_with_rng<R: Rng>(
        n_boids: usize,
        pos_x_range: [f32; 2],
        pos_y_range: [f32; 2],
        config: &FlockConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if n_boids == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "flock needs at least one boid".to_string(),
            ));
        }

        let [min_vx, min_vy, max_vx, max_vy] = config.velocity_limits;
        let ranges = [
            ("pos_x_range", pos_x_range),
            ("pos_y_range", pos_y_range),
            ("velocity x limits", [min_vx, max_vx]),
            ("velocity y limits", [min_vy, max_vy]),
        ];
        for (name, [lower, upper]) in ranges {
            if lower > upper {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "{} lower bound {} exceeds upper bound {}",
                    name, lower, upper
                )));
            }
        }

        let positions = sample_vectors(rng, n_boids, pos_x_range, pos_y_range);
        let velocities = sample_vectors(rng, n_boids, [min_vx, max_vx], [min_vy, max_vy]);

        Ok(Self {
            positions,
            velocities,
            cohesion_strength: config.cohesion_strength,
            alert_distance: config.alert_distance,
            formation_distance: config.formation_distance,
            formation_strength: config.formation_strength,
            velocity_coefficient: config.velocity_coefficient,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // Read-only snapshot of one boid's position for rendering
    pub fn position_of(&self, id: usize) -> Vec2 {
        self.positions[id]
    }

    pub fn velocity_of(&self, id: usize) -> Vec2 {
        self.velocities[id]
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    // Advance the simulation by one tick. The goal point, when present,
    // adds an attraction towards the pointer.
    pub fn update_positions(&mut self, goal: Option<Vec2>) {
        self.towards_middle();
        self.keep_distance();
        self.match_velocity();
        if let Some(goal) = goal {
            self.towards_goal(goal);
        }

        // Position update
        for (position, velocity) in self.positions.iter_mut().zip(&self.velocities) {
            *position += *velocity * self.velocity_coefficient;
        }
    }

    // Cohesion: steer towards the centroid, stronger the further away
    fn towards_middle(&mut self) {
        let sum = self
            .positions
            .iter()
            .fold(Vec2::ZERO, |acc, position| acc + *position);
        let middle = sum / self.positions.len() as f32;

        for (velocity, position) in self.velocities.iter_mut().zip(&self.positions) {
            *velocity -= (*position - middle) * self.cohesion_strength;
        }
    }

    // Separation: accumulate the raw displacement away from every boid
    // within the alert distance. The displacement is not normalized, so
    // a boid crowded by many neighbours is pushed away from all of them
    // additively. The i == j pair contributes the zero vector.
    fn keep_distance(&mut self) {
        for i in 0..self.positions.len() {
            let mut push = Vec2::ZERO;
            for other in &self.positions {
                let separation = self.positions[i] - *other;
                if separation.length_squared() <= self.alert_distance {
                    push += separation;
                }
            }
            self.velocities[i] += push;
        }
    }

    // Velocity matching: nudge each boid towards the average velocity of
    // the boids within the formation distance. The mean is taken over the
    // whole flock with far pairs contributing zero, and every difference
    // is measured against the pre-update velocities.
    fn match_velocity(&mut self) {
        let n = self.velocities.len();
        let mut corrections = vec![Vec2::ZERO; n];

        for (i, correction) in corrections.iter_mut().enumerate() {
            let mut difference_sum = Vec2::ZERO;
            for j in 0..n {
                let separation = self.positions[i] - self.positions[j];
                if separation.length_squared() <= self.formation_distance {
                    difference_sum += self.velocities[i] - self.velocities[j];
                }
            }
            *correction = difference_sum / n as f32 * self.formation_strength;
        }

        for (velocity, correction) in self.velocities.iter_mut().zip(corrections) {
            *velocity -= correction;
        }
    }

    // Goal-seeking: the attraction reuses the cohesion gain
    fn towards_goal(&mut self, goal: Vec2) {
        for (velocity, position) in self.velocities.iter_mut().zip(&self.positions) {
            *velocity -= (*position - goal) * self.cohesion_strength;
        }
    }

    // Flip the velocity component on each axis where the boid sits
    // outside the limits. Reflection only; the position is not clamped,
    // so a fast boid may render outside the bounds for one tick.
    pub fn bounce(&mut self, x_limits: [f32; 2], y_limits: [f32; 2]) {
        for (velocity, position) in self.velocities.iter_mut().zip(&self.positions) {
            if position.x < x_limits[0] || position.x > x_limits[1] {
                velocity.x = -velocity.x;
            }
            if position.y < y_limits[0] || position.y > y_limits[1] {
                velocity.y = -velocity.y;
            }
        }
    }
}

// Sample n vectors with each component drawn uniformly from the closed
// per-axis range.
fn sample_vectors<R: Rng>(
    rng: &mut R,
    n: usize,
    x_range: [f32; 2],
    y_range: [f32; 2],
) -> Vec<Vec2> {
    (0..n)
        .map(|_| {
            vec2(
                rng.gen_range(x_range[0]..=x_range[1]),
                rng.gen_range(y_range[0]..=y_range[1]),
            )
        })
        .collect()
}
