/*
 * Input Module
 *
 * This module handles pointer events for the flock. Pressing the left
 * button (outside the UI) places the goal point under the cursor,
 * dragging moves it with the cursor, and releasing clears it. The flock
 * chases the goal only while it is held down.
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = vec2(pos.x, pos.y);

    // While the button is held, the goal follows the cursor
    if model.goal_held {
        model.driver.set_goal(new_pos);
    }

    // Always update the stored mouse position
    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before placing the goal
        if !model.egui.ctx().is_pointer_over_area() {
            model.goal_held = true;
            model.driver.set_goal(model.mouse_position);
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.goal_held {
        model.goal_held = false;
        model.driver.clear_goal();
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
