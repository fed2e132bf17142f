/*
 * Application Module
 *
 * This module defines the nannou model and the update/view callbacks
 * for the flocking minigame. The model owns the pending configuration,
 * the running driver and the egui instance; the update callback feeds
 * frame time into the driver's fixed-timestep loop and the view draws
 * the boid proxies refreshed by the last tick.
 */

use std::path::Path;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::warn;

use crate::config::FlockConfig;
use crate::driver::FlockDriver;
use crate::input;
use crate::ui;

// The collection's configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "velvethat.json";

// Main model for the application
pub struct Model {
    pub config: FlockConfig,
    pub driver: FlockDriver,
    pub egui: Egui,
    pub paused: bool,
    pub goal_held: bool,
    pub mouse_position: Vec2,
    pub ticks_last_frame: usize,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window from the primary monitor when one is reported
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 720.0),
    };

    // Create the main window
    let window_id = app
        .new_window()
        .title("VelvetHat Boids")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Load the configuration, falling back to the defaults when the
    // file is unreadable or invalid
    let config = match FlockConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "falling back to default configuration");
            FlockConfig::default()
        }
    };

    // Spawn the session around the window center and start ticking
    let mut driver = FlockDriver::spawn(Vec2::ZERO, &config)
        .expect("startup configuration rejected");
    driver.start();

    Model {
        config,
        driver,
        egui,
        paused: false,
        goal_held: false,
        mouse_position: Vec2::ZERO,
        ticks_last_frame: 0,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let stats = ui::FrameStats {
        fps: app.fps(),
        ticks_last_frame: model.ticks_last_frame,
    };

    // Update the UI and restart the session when requested
    let restart = ui::update_ui(
        &mut model.egui,
        &mut model.config,
        &model.driver,
        &mut model.paused,
        &stats,
    );
    if restart {
        respawn(model);
    }

    // Pause and resume act on the driver's scheduling switch
    if model.paused {
        model.driver.stop();
    } else {
        model.driver.start();
    }

    // Advance the simulation with the window rect as the bounce limits
    let window_rect = app.window_rect();
    let x_limits = [window_rect.left(), window_rect.right()];
    let y_limits = [window_rect.bottom(), window_rect.top()];
    model.ticks_last_frame = model.driver.advance(update.since_last, x_limits, y_limits);
}

// Replace the session with a fresh one under the pending configuration
fn respawn(model: &mut Model) {
    match FlockDriver::spawn(Vec2::ZERO, &model.config) {
        Ok(driver) => {
            model.driver = driver;
            if !model.paused {
                model.driver.start();
            }
        }
        Err(err) => warn!(%err, "keeping the current session"),
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Mark the goal point while the pointer is held down
    if let Some(goal) = model.driver.goal() {
        draw.ellipse()
            .xy(goal)
            .radius(5.0)
            .no_fill()
            .stroke(YELLOW)
            .stroke_weight(1.5);
    }

    // Draw each boid oriented along its current velocity
    for boid in model.driver.boids() {
        boid.draw(&draw, model.driver.flock().velocity_of(boid.id));
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
