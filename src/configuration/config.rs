//! Configuration types for loading a simulation setup from YAML
//!
//! Every field is optional in the file; missing sections fall back to the
//! reference defaults, so an empty file and no file at all behave the same.
//!
//! # YAML format
//! A full configuration matching these types:
//!
//! ```yaml
//! world:
//!   gravity: 9.81           # downward acceleration
//!   ground_y: -2.0          # ground plane height
//!   bound: 8.0              # wall half-extent on x and z
//!
//! bodies:
//!   count: 100              # fixed population size
//!   size: 0.5               # cube edge length
//!   bounce_factor: 1.0      # normal restitution
//!   friction_factor: 0.9    # tangential retention
//!   rest_threshold: 0.05    # rest-speed threshold
//!   spawn_altitude: [5.0, 15.0]
//!
//! camera:
//!   auto_rotate_speed: 100.0  # yaw rate in degrees/s
//!   height_offset: 8.0
//!
//! runtime:
//!   reset_interval: 10.0    # seconds between repopulations
//!   debug: false            # diagnostic mode, disables vsync
//!   vsync: true
//! ```

use serde::Deserialize;

/// World geometry and gravity
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: f32,
    pub ground_y: f32,
    pub bound: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            ground_y: -2.0,
            bound: 8.0,
        }
    }
}

/// Population size and per-body material response
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BodiesConfig {
    pub count: usize,
    pub size: f32,
    pub bounce_factor: f32,
    pub friction_factor: f32,
    pub rest_threshold: f32,
    pub spawn_altitude: [f32; 2], // uniform range for the randomized height
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: 100,
            size: 0.5,
            bounce_factor: 1.0,
            friction_factor: 0.9,
            rest_threshold: 0.05,
            spawn_altitude: [5.0, 15.0],
        }
    }
}

/// Auto-rotating camera settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub auto_rotate_speed: f32,
    pub height_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 100.0,
            height_offset: 8.0,
        }
    }
}

/// Loop-level settings: reset cadence, diagnostics, vsync preference
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RuntimeConfig {
    pub reset_interval: f32,
    pub debug: bool,
    pub vsync: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            reset_interval: 10.0,
            debug: false,
            vsync: true,
        }
    }
}

/// Top-level configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub bodies: BodiesConfig,
    pub camera: CameraConfig,
    pub runtime: RuntimeConfig,
}
