//! Vector math for the cube simulation.
//!
//! All kinematic state uses the nalgebra-backed [`NVec3`]; nalgebra supplies
//! add/sub/scale/dot/cross/norm. The two helpers here cover the cases the
//! stepper needs to be total: zero-safe normalization and degree wrapping.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f32>;

/// Normalize `v`, returning the zero vector when its length is exactly zero
pub fn normalize_or_zero(v: NVec3) -> NVec3 {
    v.try_normalize(0.0).unwrap_or_else(NVec3::zeros)
}

/// Wrap an angle in degrees into [0, 360)
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}
