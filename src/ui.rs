/*
 * UI Module
 *
 * This module contains the egui control panel for the flock simulation.
 * Slider edits go into the pending configuration and take effect when
 * the flock is restarted; pausing acts on the driver immediately.
 */

use nannou_egui::{egui, Egui};

use crate::config::FlockConfig;
use crate::driver::FlockDriver;

// Per-frame stats shown in the panel
pub struct FrameStats {
    pub fps: f32,
    pub ticks_last_frame: usize,
}

// Update the UI and return whether the flock should be restarted
pub fn update_ui(
    egui: &mut Egui,
    config: &mut FlockConfig,
    driver: &FlockDriver,
    paused: &mut bool,
    stats: &FrameStats,
) -> bool {
    let mut restart = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock Parameters", |ui| {
                ui.label("Changes apply when the flock is restarted");
                ui.add(
                    egui::Slider::new(&mut config.max_boids, FlockConfig::max_boids_range())
                        .text("Max Boids"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.cohesion_strength,
                        FlockConfig::strength_range(),
                    )
                    .text("Cohesion Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.alert_distance,
                        FlockConfig::alert_distance_range(),
                    )
                    .text("Alert Distance (sq)"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.formation_distance,
                        FlockConfig::formation_distance_range(),
                    )
                    .text("Formation Distance (sq)"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.formation_strength,
                        FlockConfig::strength_range(),
                    )
                    .text("Formation Strength"),
                );
                ui.add(
                    egui::Slider::new(&mut config.goal_strength, FlockConfig::strength_range())
                        .text("Goal Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.velocity_coefficient,
                        FlockConfig::velocity_coefficient_range(),
                    )
                    .text("Velocity Coefficient"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut config.update_frequency,
                        FlockConfig::update_frequency_range(),
                    )
                    .text("Update Frequency"),
                );

                if ui.button("Restart Flock").clicked() {
                    restart = true;
                }
            });

            ui.collapsing("Stats", |ui| {
                ui.label(format!("FPS: {:.1}", stats.fps));
                ui.label(format!("Boids: {}", driver.n_boids()));
                ui.label(format!("Ticks this frame: {}", stats.ticks_last_frame));
                match driver.goal() {
                    Some(goal) => ui.label(format!("Goal: ({:.0}, {:.0})", goal.x, goal.y)),
                    None => ui.label("Goal: none"),
                };
            });

            ui.checkbox(paused, "Pause Simulation");
            ui.label("Hold the left mouse button to set a goal");
        });

    restart
}
