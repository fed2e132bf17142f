/*
 * VelvetHat Boids
 *
 * The boid flocking minigame from the VelvetHat collection. A flock of
 * a randomly chosen size follows cohesion, separation and velocity
 * matching rules, bounces off the window edges, and chases the mouse
 * while the left button is held. Parameters are adjustable through an
 * egui panel and through the collection's JSON configuration file.
 */

use tracing_subscriber::EnvFilter;

use velvethat_boids::app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    nannou::app(app::model).update(app::update).run();
}
