/*
 * Driver Module
 *
 * This module owns one simulation session: a Flock, the matching boid
 * proxies, the optional pointer goal, and a fixed-timestep tick loop
 * fed from the host's frame callback. Every tick updates the flock,
 * refreshes the proxies, then reflects velocities at the viewport
 * limits. All of it runs on the caller's thread; there is no locking.
 */

use std::time::Duration;

use nannou::prelude::*;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::boid::Boid;
use crate::config::{ConfigError, FlockConfig};
use crate::flock::Flock;
use crate::SPAWN_EXTENT;

pub struct FlockDriver {
    flock: Flock,
    boids: Vec<Boid>,
    goal: Option<Vec2>,
    running: bool,
    accumulator: Duration,
    step: Duration,
}

impl FlockDriver {
    // Start a session: sample a boid count in [2, max_boids) and spawn
    // the flock in a box around the given center. The driver comes up
    // stopped; call start to begin ticking.
    pub fn spawn(center: Vec2, config: &FlockConfig) -> Result<Self, ConfigError> {
        Self::spawn_with_rng(center, config, &mut rand::thread_rng())
    }

    pub fn spawn_with_rng<R: Rng>(
        center: Vec2,
        config: &FlockConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let n_boids = rng.gen_range(2..config.max_boids);
        let pos_x_range = [center.x - SPAWN_EXTENT, center.x + SPAWN_EXTENT];
        let pos_y_range = [center.y - SPAWN_EXTENT, center.y + SPAWN_EXTENT];
        let flock = Flock::spawn_with_rng(n_boids, pos_x_range, pos_y_range, config, rng)?;

        let boids = (0..n_boids)
            .map(|id| Boid::new(id, flock.position_of(id)))
            .collect();

        info!(n_boids, "spawned flock session");
        Ok(Self {
            flock,
            boids,
            goal: None,
            running: false,
            accumulator: Duration::ZERO,
            step: Duration::from_secs_f32(1.0 / config.update_frequency),
        })
    }

    // Begin scheduling ticks. Starting an already-running driver is a
    // no-op. Any backlog accumulated while stopped is dropped so a long
    // pause does not replay missed ticks.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.accumulator = Duration::ZERO;
        self.running = true;
        debug!("driver started");
    }

    // Stop scheduling ticks. Stopping a stopped driver is a no-op.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        debug!("driver stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_goal(&mut self, goal: Vec2) {
        trace!(?goal, "goal set");
        self.goal = Some(goal);
    }

    pub fn clear_goal(&mut self) {
        trace!("goal cleared");
        self.goal = None;
    }

    pub fn goal(&self) -> Option<Vec2> {
        self.goal
    }

    pub fn n_boids(&self) -> usize {
        self.boids.len()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    // Feed frame time into the fixed-timestep loop and run every full
    // step that fits. Returns the number of ticks performed.
    pub fn advance(
        &mut self,
        frame_time: Duration,
        x_limits: [f32; 2],
        y_limits: [f32; 2],
    ) -> usize {
        if !self.running {
            return 0;
        }

        self.accumulator += frame_time;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.tick(x_limits, y_limits);
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    // One tick: advance the flock, mirror positions into the proxies,
    // then bounce off the viewport limits.
    pub fn tick(&mut self, x_limits: [f32; 2], y_limits: [f32; 2]) {
        self.flock.update_positions(self.goal);
        for boid in &mut self.boids {
            boid.sync(&self.flock);
        }
        self.flock.bounce(x_limits, y_limits);
    }
}
