//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a [`SimConfig`] (YAML-facing) and produces the runtime bundle the
//! viewer inserts into Bevy as a `Resource`:
//! - runtime parameters (`Parameters`)
//! - simulation state (`SimState` with the population already spawned)
//! - the random source feeding spawns, bounces, and colors
//!
//! Building the scenario is the `initialize(config)` lifecycle call;
//! dropping it releases the body collection.

use bevy::prelude::Resource;

use crate::configuration::config::SimConfig;
use crate::simulation::params::Parameters;
use crate::simulation::random::{EntropyRandom, UniformRandom};
use crate::simulation::spawn::populate;
use crate::simulation::states::SimState;
use crate::simulation::stepper;

/// Bevy resource holding one independent simulation
///
/// The stepper has exclusive mutable access during the physics system; the
/// presentation systems only read `state` within the same frame.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub state: SimState,
    pub rng: Box<dyn UniformRandom + Send + Sync>,
}

impl Scenario {
    /// Build from configuration with an entropy-seeded random source
    pub fn build_scenario(cfg: SimConfig) -> Self {
        Self::with_random(cfg, Box::new(EntropyRandom::new()))
    }

    /// Build with a caller-supplied random source, for deterministic runs
    pub fn with_random(cfg: SimConfig, mut rng: Box<dyn UniformRandom + Send + Sync>) -> Self {
        let parameters = Parameters {
            gravity: cfg.world.gravity,
            ground_y: cfg.world.ground_y,
            bound: cfg.world.bound,
            cube_size: cfg.bodies.size,
            body_count: cfg.bodies.count,
            bounce_factor: cfg.bodies.bounce_factor,
            friction_factor: cfg.bodies.friction_factor,
            rest_threshold: cfg.bodies.rest_threshold,
            spawn_altitude_min: cfg.bodies.spawn_altitude[0],
            spawn_altitude_max: cfg.bodies.spawn_altitude[1],
            auto_rotate_speed: cfg.camera.auto_rotate_speed,
            camera_height_offset: cfg.camera.height_offset,
            reset_interval: cfg.runtime.reset_interval,
            debug: cfg.runtime.debug,
            vsync: cfg.runtime.vsync,
        };

        let mut state = SimState::default();
        populate(&mut state, &parameters, rng.as_mut());

        Self {
            parameters,
            state,
            rng,
        }
    }

    /// Advance the simulation by one measured frame gap
    pub fn step(&mut self, dt: f32) {
        stepper::step(&mut self.state, &self.parameters, self.rng.as_mut(), dt);
    }
}
