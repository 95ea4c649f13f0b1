use cubefall::simulation::params::Parameters;
use cubefall::simulation::random::UniformRandom;
use cubefall::simulation::spawn::populate;
use cubefall::simulation::states::{Body, SimState};
use cubefall::simulation::stepper::{bounce_response, step};
use cubefall::simulation::vecmath::{normalize_or_zero, wrap_degrees, NVec3};

/// Deterministic source returning the midpoint of every requested range.
/// Bounce perturbations come out as zero, so reflections are exact mirrors
/// and post-impact angular velocities are zero.
struct MidpointRandom;

impl UniformRandom for MidpointRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (min + max) / 2.0
    }
}

/// Default physics parameters for tests
fn test_params() -> Parameters {
    Parameters::default()
}

/// Build a state holding a single body with the given kinematics
fn single_body_state(position: NVec3, velocity: NVec3, params: &Parameters) -> SimState {
    let mut state = SimState::default();
    state.bodies.push(Body {
        position,
        velocity,
        angular_velocity: NVec3::zeros(),
        rotation: NVec3::zeros(),
        color: NVec3::new(0.5, 0.5, 0.5),
        size: params.cube_size,
        resting: false,
    });
    state
}

/// Assert the per-body invariants that must hold after every step
fn assert_body_invariants(state: &SimState) {
    for (i, b) in state.bodies.iter().enumerate() {
        for axis in 0..3 {
            assert!(
                (0.0..360.0).contains(&b.rotation[axis]),
                "body {} rotation axis {} out of range: {}",
                i,
                axis,
                b.rotation[axis]
            );
        }
        if b.resting {
            assert_eq!(b.velocity, NVec3::zeros(), "resting body {} has velocity", i);
            assert_eq!(
                b.angular_velocity,
                NVec3::zeros(),
                "resting body {} has angular velocity",
                i
            );
        }
    }
}

// ==================================================================================
// Vector math tests
// ==================================================================================

#[test]
fn normalize_zero_vector_is_zero() {
    let v = normalize_or_zero(NVec3::zeros());
    assert_eq!(v, NVec3::zeros());
}

#[test]
fn normalize_returns_unit_length() {
    let v = normalize_or_zero(NVec3::new(3.0, 0.0, 4.0));
    assert!((v.norm() - 1.0).abs() < 1e-6);
    assert!((v.x - 0.6).abs() < 1e-6);
    assert!((v.z - 0.8).abs() < 1e-6);
}

#[test]
fn wrap_degrees_lands_in_range() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(360.0), 0.0);
    assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-4);
    assert!((wrap_degrees(-10.0) - 350.0).abs() < 1e-4);
    assert!((wrap_degrees(-725.0) - 355.0).abs() < 1e-3);
}

// ==================================================================================
// Spawn / reset tests
// ==================================================================================

#[test]
fn populate_builds_full_grid() {
    let params = test_params();
    let mut state = SimState::default();
    state.reset_timer = 5.0;
    state.seconds_count = 3;

    populate(&mut state, &params, &mut MidpointRandom);

    assert_eq!(state.bodies.len(), params.body_count);
    for b in &state.bodies {
        assert_eq!(b.velocity, NVec3::zeros());
        assert_eq!(b.angular_velocity, NVec3::zeros());
        assert_eq!(b.rotation, NVec3::zeros());
        assert!(!b.resting);
        assert_eq!(b.size, params.cube_size);
        assert!(b.position.y >= params.spawn_altitude_min);
    }

    // Grid corners: body 0 sits at (-5, mid-altitude, -5), body 99 at (4, _, 4)
    // with the default spacing of one cube-size doubled
    assert_eq!(state.bodies[0].position.x, -5.0);
    assert_eq!(state.bodies[0].position.z, -5.0);
    assert_eq!(state.bodies[99].position.x, 4.0);
    assert_eq!(state.bodies[99].position.z, 4.0);

    // Midpoint draws: color 0.5 everywhere, altitude 10
    assert_eq!(state.bodies[0].color, NVec3::new(0.5, 0.5, 0.5));
    assert_eq!(state.bodies[0].position.y, 10.0);

    // All timers restart
    assert_eq!(state.reset_timer, 0.0);
    assert_eq!(state.seconds_count, 0);
    assert_eq!(state.second_timer, 0.0);
    assert_eq!(state.fps_timer, 0.0);
    assert_eq!(state.frame_count, 0);
}

#[test]
fn reset_fires_on_exact_interval_frame() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = SimState::default();
    populate(&mut state, &params, &mut rng);

    // Mark a body so a repopulation is observable
    state.bodies[0].rotation.x = 123.0;

    // Just short of the interval: no reset, the mark survives
    step(&mut state, &params, &mut rng, params.reset_interval - 0.1);
    assert_eq!(state.bodies[0].rotation.x, 123.0);

    // Crossing the interval resets on that frame, not the next
    populate(&mut state, &params, &mut rng);
    state.bodies[0].rotation.x = 123.0;
    step(&mut state, &params, &mut rng, params.reset_interval);
    assert_eq!(state.bodies[0].rotation.x, 0.0);
    assert_eq!(state.reset_timer, 0.0);
}

// ==================================================================================
// Stepper tests
// ==================================================================================

#[test]
fn zero_dt_step_is_a_noop() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = SimState::default();
    populate(&mut state, &params, &mut rng);

    let before = state.bodies.clone();
    let yaw_before = state.camera_yaw;
    for _ in 0..5 {
        step(&mut state, &params, &mut rng, 0.0);
    }

    assert_eq!(state.camera_yaw, yaw_before);
    for (a, b) in before.iter().zip(state.bodies.iter()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.angular_velocity, b.angular_velocity);
    }
}

#[test]
fn rotation_stays_wrapped_while_tumbling() {
    let params = test_params();
    let mut rng = MidpointRandom;
    // Far above the ground so the body stays airborne for the whole run
    let mut state = single_body_state(NVec3::new(0.0, 100.0, 0.0), NVec3::zeros(), &params);
    state.bodies[0].angular_velocity = NVec3::new(500.0, -720.5, 1234.0);

    for _ in 0..100 {
        step(&mut state, &params, &mut rng, 0.016);
        assert_body_invariants(&state);
        assert!((0.0..360.0).contains(&state.camera_yaw));
    }
}

#[test]
fn dropped_body_clamps_onto_ground_and_flips_vertical_speed() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = single_body_state(NVec3::new(0.0, 3.0, 0.0), NVec3::zeros(), &params);

    let mut bounced = false;
    for _ in 0..200 {
        let falling = state.bodies[0].velocity.y < 0.0;
        step(&mut state, &params, &mut rng, 0.01);
        let b = &state.bodies[0];
        if falling && b.velocity.y > 0.0 {
            // Lower face sits exactly on the plane the frame of impact
            assert_eq!(b.position.y, params.ground_y + params.cube_size / 2.0);
            assert_eq!(b.position.y, -1.75);
            bounced = true;
            break;
        }
    }
    assert!(bounced, "body never reached the ground plane");
}

#[test]
fn wall_hit_clamps_face_onto_boundary() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = single_body_state(
        NVec3::new(7.5, 5.0, 0.0),
        NVec3::new(50.0, 0.0, 0.0),
        &params,
    );

    step(&mut state, &params, &mut rng, 0.01);

    let b = &state.bodies[0];
    let half = params.cube_size / 2.0;
    assert_eq!(b.position.x + half, params.bound);
    assert_eq!(b.velocity.x, -50.0); // exact mirror with a zero perturbation
}

#[test]
fn corner_hit_resolves_both_axes_in_one_frame() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = single_body_state(
        NVec3::new(7.9, 5.0, 7.9),
        NVec3::new(50.0, 0.0, 50.0),
        &params,
    );

    step(&mut state, &params, &mut rng, 0.01);

    let b = &state.bodies[0];
    let half = params.cube_size / 2.0;
    assert_eq!(b.position.x + half, params.bound);
    assert_eq!(b.position.z + half, params.bound);
    assert!(b.velocity.x < 0.0);
    assert!(b.velocity.z < 0.0);
}

#[test]
fn still_body_on_ground_comes_to_rest() {
    let params = test_params();
    let mut rng = MidpointRandom;
    // Center height that puts the lower face exactly on the ground plane
    let center_on_ground = params.ground_y + params.cube_size / 2.0;
    let mut state =
        single_body_state(NVec3::new(0.0, center_on_ground, 0.0), NVec3::zeros(), &params);

    step(&mut state, &params, &mut rng, 0.001);

    let b = &state.bodies[0];
    assert!(b.resting);
    assert_eq!(b.velocity, NVec3::zeros());
    assert_eq!(b.angular_velocity, NVec3::zeros());
}

#[test]
fn bouncing_body_eventually_settles() {
    let mut params = test_params();
    params.bounce_factor = 0.5; // inelastic enough that vertical motion decays
    params.reset_interval = 1.0e9; // keep the population across the whole run
    let mut rng = MidpointRandom;
    let mut state = single_body_state(NVec3::new(0.0, 3.0, 0.0), NVec3::zeros(), &params);

    for _ in 0..6000 {
        step(&mut state, &params, &mut rng, 0.005);
        assert_body_invariants(&state);
        if state.bodies[0].resting {
            break;
        }
    }

    let b = &state.bodies[0];
    assert!(b.resting, "body never settled");
    assert_eq!(b.velocity, NVec3::zeros());
    assert_eq!(b.angular_velocity, NVec3::zeros());
}

#[test]
fn second_tally_advances_with_simulated_time() {
    let params = test_params();
    let mut rng = MidpointRandom;
    let mut state = SimState::default();

    step(&mut state, &params, &mut rng, 0.6);
    assert_eq!(state.seconds_count, 0);

    step(&mut state, &params, &mut rng, 0.6);
    assert_eq!(state.seconds_count, 1);
    assert_eq!(state.second_timer, 0.0);
}

// ==================================================================================
// Bounce response tests
// ==================================================================================

#[test]
fn unperturbed_bounce_is_a_damped_mirror() {
    let params = test_params();
    let v = NVec3::new(1.0, -4.0, 2.0);
    let n = NVec3::new(0.0, 1.0, 0.0);

    let out = bounce_response(v, n, NVec3::zeros(), &params);

    // Normal component reflects fully, tangential keeps 90%
    assert!((out.x - 0.9).abs() < 1e-6);
    assert!((out.y - 4.0).abs() < 1e-6);
    assert!((out.z - 1.8).abs() < 1e-6);
}

#[test]
fn perturbed_bounce_keeps_normal_speed_but_tilts_direction() {
    let params = test_params();
    let v = NVec3::new(0.0, -10.0, 0.0);
    let n = NVec3::new(0.0, 1.0, 0.0);

    let out = bounce_response(v, n, NVec3::new(0.3, 0.0, 0.4), &params);

    // Pure normal impact: the reflected speed is preserved along the tilted
    // direction, and the tilt leaks into x and z
    assert!((out.norm() - 10.0).abs() < 1e-4);
    assert!(out.y > 0.0);
    assert!(out.x > 0.0);
    assert!(out.z > 0.0);
}
