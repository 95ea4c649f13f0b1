//! Body population and periodic reset
//!
//! Lays the whole population out in a 10x10 grid per layer with a randomized
//! spawn altitude, and zeroes every timer so the reset countdown restarts
//! from the frame that triggered it.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::random::UniformRandom;
use crate::simulation::states::{Body, SimState};
use crate::simulation::vecmath::NVec3;

/// Rebuild the entire body collection
///
/// Index `i` maps to grid coordinates `(i % 10, (i / 10) % 10, i / 100)`;
/// x and z are offset so the grid is centered on the origin, and each layer
/// of 100 bodies spawns one cube-spacing higher. Colors draw before the
/// altitude, one body at a time.
pub fn populate(state: &mut SimState, params: &Parameters, rng: &mut dyn UniformRandom) {
    let spacing = params.cube_size * 2.0;

    state.bodies.clear();
    state.bodies.reserve_exact(params.body_count);
    for i in 0..params.body_count {
        let color = NVec3::new(
            rng.uniform(0.0, 1.0),
            rng.uniform(0.0, 1.0),
            rng.uniform(0.0, 1.0),
        );

        let x_offset = ((i % 10) as f32 - 5.0) * spacing;
        let z_offset = (((i / 10) % 10) as f32 - 5.0) * spacing;
        let y_offset = (i / 100) as f32 * spacing
            + rng.uniform(params.spawn_altitude_min, params.spawn_altitude_max);

        state.bodies.push(Body {
            position: NVec3::new(x_offset, y_offset, z_offset),
            velocity: NVec3::zeros(),
            angular_velocity: NVec3::zeros(),
            rotation: NVec3::zeros(),
            color,
            size: params.cube_size,
            resting: false,
        });
    }

    state.second_timer = 0.0;
    state.seconds_count = 0;
    state.fps_timer = 0.0;
    state.frame_count = 0;
    state.reset_timer = 0.0;

    debug!("populated {} bodies", state.bodies.len());
}
