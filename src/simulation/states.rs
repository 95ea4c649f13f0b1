//! Core state types for the cube simulation.
//!
//! [`Body`] is one simulated cuboid; [`SimState`] is the whole-simulation
//! state object owned by the scenario and passed into the stepper each frame.
//! There is no process-global state: multiple independent simulations can
//! coexist, and tests drive a `SimState` directly.

use crate::simulation::vecmath::NVec3;

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec3, // center in world space
    pub velocity: NVec3, // world units per second
    pub angular_velocity: NVec3, // degrees per second, per axis
    pub rotation: NVec3, // accumulated degrees, each axis in [0, 360)
    pub color: NVec3, // rgb in [0, 1], fixed until the next reset
    pub size: f32, // edge length, identical for every body
    pub resting: bool, // true only with both velocities forced to zero
}

/// Whole-simulation mutable state: the body collection plus the soft timers
/// and the auto-rotating camera yaw
#[derive(Debug, Clone, Default)]
pub struct SimState {
    pub bodies: Vec<Body>,
    pub second_timer: f32, // accumulates toward the next one-second tick
    pub seconds_count: u32, // diagnostic tally of elapsed simulated seconds
    pub fps_timer: f32, // accumulates toward the next frame-rate report
    pub frame_count: u32, // frames since the last report
    pub reset_timer: f32, // accumulates toward the next full repopulation
    pub camera_yaw: f32, // degrees in [0, 360)
}
