/*
 * Flock Simulation Benchmark
 *
 * Benchmarks for the flock update to keep an eye on the O(n^2) pair
 * scans. Measures the update rules, the boundary reflection and a full
 * driver tick across a range of boid counts.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use velvethat_boids::{Flock, FlockConfig, FlockDriver};

const X_LIMITS: [f32; 2] = [-500.0, 500.0];
const Y_LIMITS: [f32; 2] = [-400.0, 400.0];

fn seeded_flock(n_boids: usize) -> Flock {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(1234);
    Flock::spawn_with_rng(n_boids, [-50.0, 50.0], [-50.0, 50.0], &config, &mut rng)
        .expect("benchmark flock")
}

// Benchmark the update rules without a goal
fn bench_update_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_positions");

    for num_boids in [10, 20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut flock = seeded_flock(n);
            b.iter(|| flock.update_positions(black_box(None)));
        });
    }

    group.finish();
}

// Benchmark the update rules with goal-seeking active
fn bench_update_with_goal(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_with_goal");

    for num_boids in [10, 20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut flock = seeded_flock(n);
            let goal = vec2(200.0, 150.0);
            b.iter(|| flock.update_positions(black_box(Some(goal))));
        });
    }

    group.finish();
}

// Benchmark the boundary reflection on its own
fn bench_bounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounce");

    for num_boids in [10, 20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut flock = seeded_flock(n);
            b.iter(|| flock.bounce(black_box(X_LIMITS), black_box(Y_LIMITS)));
        });
    }

    group.finish();
}

// Benchmark a full driver tick: update, proxy sync, bounce
fn bench_driver_tick(c: &mut Criterion) {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut driver =
        FlockDriver::spawn_with_rng(Vec2::ZERO, &config, &mut rng).expect("benchmark driver");

    c.bench_function("driver_tick", |b| {
        b.iter(|| driver.tick(black_box(X_LIMITS), black_box(Y_LIMITS)));
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_update_positions, bench_update_with_goal, bench_bounce, bench_driver_tick
}

criterion_main!(benches);
