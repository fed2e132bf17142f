/*
 * End-to-end simulation scenarios
 *
 * These tests run the flock and the driver through many ticks with a
 * seeded RNG and check the aggregate behaviour: positions stay finite,
 * the pairwise distance settles near an equilibrium, the proxies track
 * the flock, and the goal steers the whole flock.
 */

use std::time::Duration;

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use velvethat_boids::{Flock, FlockConfig, FlockDriver};

fn pairwise_distance(flock: &Flock) -> f32 {
    (flock.position_of(0) - flock.position_of(1)).length()
}

#[test]
fn two_boid_flock_settles_near_equilibrium() {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut flock =
        Flock::spawn_with_rng(2, [0.0, 10.0], [0.0, 10.0], &config, &mut rng).unwrap();

    // Initial positions lie inside the configured box
    for id in 0..flock.len() {
        let position = flock.position_of(id);
        assert!((0.0..=10.0).contains(&position.x));
        assert!((0.0..=10.0).contains(&position.y));
    }

    // Run 100 ticks with no goal and default strengths, recording the
    // pairwise distance of the last 10
    let mut tail = Vec::new();
    for tick in 0..100 {
        flock.update_positions(None);
        if tick >= 90 {
            tail.push(pairwise_distance(&flock));
        }
    }

    // No NaN or infinity anywhere
    for id in 0..flock.len() {
        assert!(flock.position_of(id).is_finite());
        assert!(flock.velocity_of(id).is_finite());
    }

    // Cohesion and separation balance out: the distance varies little
    // across the last 10 ticks
    let mean = tail.iter().sum::<f32>() / tail.len() as f32;
    let variance =
        tail.iter().map(|d| (d - mean) * (d - mean)).sum::<f32>() / tail.len() as f32;
    assert!(
        variance < 5.0,
        "pairwise distance has not stabilized: variance {} over {:?}",
        variance,
        tail
    );
}

#[test]
fn driver_session_stays_finite_and_mirrored() {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut driver = FlockDriver::spawn_with_rng(Vec2::ZERO, &config, &mut rng).unwrap();
    driver.start();

    let x_limits = [-400.0, 400.0];
    let y_limits = [-300.0, 300.0];

    // Feed ~5 simulated seconds of frame time in 60 Hz slices
    let mut total_ticks = 0;
    for _ in 0..300 {
        total_ticks += driver.advance(Duration::from_millis(16), x_limits, y_limits);
    }
    assert!(total_ticks > 100, "only {} ticks ran", total_ticks);

    for boid in driver.boids() {
        assert!(boid.position.is_finite());
        assert_eq!(boid.position, driver.flock().position_of(boid.id));
    }
}

#[test]
fn goal_steers_the_flock_towards_the_pointer() {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut driver = FlockDriver::spawn_with_rng(Vec2::ZERO, &config, &mut rng).unwrap();
    driver.start();

    let limits = [-1_000.0, 1_000.0];
    let centroid_x = |driver: &FlockDriver| {
        driver
            .flock()
            .positions()
            .iter()
            .map(|p| p.x)
            .sum::<f32>()
            / driver.n_boids() as f32
    };

    let before = centroid_x(&driver);
    driver.set_goal(vec2(500.0, 0.0));
    for _ in 0..30 {
        driver.tick(limits, limits);
    }
    let after = centroid_x(&driver);

    assert!(
        after > before,
        "flock did not move towards the goal: {} -> {}",
        before,
        after
    );
}
