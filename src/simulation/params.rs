//! Runtime parameters for the cube simulation
//!
//! `Parameters` is the configuration value object built once at startup from
//! a [`SimConfig`](crate::configuration::config::SimConfig) and held constant
//! for the life of the scenario. `Default` carries the reference values.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f32, // downward acceleration, world units / s^2
    pub ground_y: f32, // height of the ground plane
    pub cube_size: f32, // edge length shared by every body
    pub body_count: usize, // fixed population size
    pub bounce_factor: f32, // normal restitution, 1.0 = elastic
    pub friction_factor: f32, // tangential retention on contact
    pub rest_threshold: f32, // linear speed below which a grounded body rests
    pub reset_interval: f32, // seconds between full repopulations
    pub auto_rotate_speed: f32, // camera yaw rate, degrees / s
    pub camera_height_offset: f32, // camera height above the look-at point
    pub bound: f32, // half-extent of the walled arena on x and z
    pub spawn_altitude_min: f32, // lower bound of the randomized spawn height
    pub spawn_altitude_max: f32, // upper bound of the randomized spawn height
    pub debug: bool, // diagnostic mode, also disables vsync
    pub vsync: bool, // vertical-sync preference for the viewer
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            ground_y: -2.0,
            cube_size: 0.5,
            body_count: 100,
            bounce_factor: 1.0,
            friction_factor: 0.9,
            rest_threshold: 0.05,
            reset_interval: 10.0,
            auto_rotate_speed: 100.0,
            camera_height_offset: 8.0,
            bound: 8.0,
            spawn_altitude_min: 5.0,
            spawn_altitude_max: 15.0,
            debug: false,
            vsync: true,
        }
    }
}
