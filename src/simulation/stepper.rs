//! Per-frame physics update for the cube population
//!
//! Advances every body with an explicit-Euler step equal to the measured
//! frame time, resolves collisions against the ground plane and the four
//! bounding walls, classifies rest, and drives the periodic full reset.
//!
//! `dt` is applied as measured, without clamping: a long stall integrates as
//! one large step. There is no runtime error path in here; the zero-length
//! normalize guard and euclidean-remainder wrapping keep every input valid.

use log::{debug, info};

use crate::simulation::params::Parameters;
use crate::simulation::random::UniformRandom;
use crate::simulation::spawn::populate;
use crate::simulation::states::{Body, SimState};
use crate::simulation::vecmath::{normalize_or_zero, wrap_degrees, NVec3};

/// Velocity after hitting a plane with unit normal `normal`
///
/// The reflected normal component is steered along a perturbed direction
/// rather than the exact mirror: `perturbation` is zero on the collision
/// axis and uniform in [-0.5, 0.5] on the other two, which spreads bounces
/// visually. The tangential component keeps `friction_factor` of its
/// magnitude. The perturbation is intentional and not energy-conserving.
pub fn bounce_response(
    velocity: NVec3,
    normal: NVec3,
    perturbation: NVec3,
    params: &Parameters,
) -> NVec3 {
    let normal_speed = velocity.dot(&normal);
    let bounce_dir = normalize_or_zero(normal + perturbation);

    let normal_velocity = bounce_dir * (-normal_speed * params.bounce_factor);
    let tangential_velocity = (velocity - normal * normal_speed) * params.friction_factor;

    normal_velocity + tangential_velocity
}

/// Bounce a body off an axis-aligned plane, redrawing its tumble on a hard
/// enough impact. The caller has already clamped the position onto the plane.
fn resolve_plane_hit(
    body: &mut Body,
    normal: NVec3,
    params: &Parameters,
    rng: &mut dyn UniformRandom,
) {
    let mut perturbation = NVec3::zeros();
    for axis in 0..3 {
        if normal[axis] == 0.0 {
            perturbation[axis] = rng.uniform(-0.5, 0.5);
        }
    }

    let normal_speed = body.velocity.dot(&normal);
    body.velocity = bounce_response(body.velocity, normal, perturbation, params);

    if normal_speed.abs() > params.rest_threshold {
        body.angular_velocity = NVec3::new(
            rng.uniform(-180.0, 180.0),
            rng.uniform(-180.0, 180.0),
            rng.uniform(-180.0, 180.0),
        );
    }
}

/// Advance the whole simulation by `dt` seconds (non-negative)
///
/// Frame-global work runs first: the one-second tally, the reset countdown
/// (a reset repopulates mid-frame and the fresh bodies are integrated with
/// this same `dt`), the camera yaw, and frame-rate accounting. Then each
/// body integrates, collides, and is classified for rest.
pub fn step(state: &mut SimState, params: &Parameters, rng: &mut dyn UniformRandom, dt: f32) {
    state.second_timer += dt;
    if state.second_timer >= 1.0 {
        state.seconds_count += 1;
        debug!("seconds: {}", state.seconds_count);
        state.second_timer = 0.0;
    }

    state.reset_timer += dt;
    if state.reset_timer >= params.reset_interval {
        info!("reset interval elapsed, repopulating");
        populate(state, params, rng);
    }

    state.camera_yaw = wrap_degrees(state.camera_yaw + params.auto_rotate_speed * dt);

    state.frame_count += 1;
    state.fps_timer += dt;
    if state.fps_timer >= 0.5 {
        debug!("fps: {:.2}", state.frame_count as f32 / state.fps_timer);
        state.frame_count = 0;
        state.fps_timer = 0.0;
    }

    let bound = params.bound;
    for body in state.bodies.iter_mut() {
        body.velocity.y -= params.gravity * dt;
        body.position += body.velocity * dt;

        body.rotation += body.angular_velocity * dt;
        body.rotation.x = wrap_degrees(body.rotation.x);
        body.rotation.y = wrap_degrees(body.rotation.y);
        body.rotation.z = wrap_degrees(body.rotation.z);

        let half = body.size / 2.0;

        if body.position.y - half < params.ground_y {
            body.position.y = params.ground_y + half;
            resolve_plane_hit(body, NVec3::new(0.0, 1.0, 0.0), params, rng);
        }

        // The x-wall pair is mutually exclusive within a frame, and so is
        // the z pair, but the two pairs are checked independently: a corner
        // hit resolves both axes
        if body.position.x - half < -bound {
            body.position.x = -bound + half;
            resolve_plane_hit(body, NVec3::new(1.0, 0.0, 0.0), params, rng);
        } else if body.position.x + half > bound {
            body.position.x = bound - half;
            resolve_plane_hit(body, NVec3::new(-1.0, 0.0, 0.0), params, rng);
        }

        if body.position.z - half < -bound {
            body.position.z = -bound + half;
            resolve_plane_hit(body, NVec3::new(0.0, 0.0, 1.0), params, rng);
        } else if body.position.z + half > bound {
            body.position.z = bound - half;
            resolve_plane_hit(body, NVec3::new(0.0, 0.0, -1.0), params, rng);
        }

        let near_ground = body.position.y - half <= params.ground_y + params.rest_threshold;
        if near_ground
            && body.velocity.norm() < params.rest_threshold
            && body.angular_velocity.norm() < params.rest_threshold * 10.0
        {
            body.resting = true;
            body.velocity = NVec3::zeros();
            body.angular_velocity = NVec3::zeros();
        } else {
            body.resting = false;
        }
    }
}
