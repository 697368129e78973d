use bevy::prelude::*;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::ModelError;

/// Tolerance on `|q| - 1` used when checking an attitude quaternion.
pub const ATTITUDE_NORM_TOLERANCE: f64 = 1e-9;

/// Kinematic state of the vehicle at a sampled instant.
///
/// Produced by the state estimator and handed to consumers as an immutable
/// snapshot: a newer estimate replaces the whole value.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Position of the vehicle origin in the world NED frame [m]
    pub position: Vector3<f64>,

    /// Velocity with respect to the world NED frame, expressed in NED [m/s]
    pub velocity: Vector3<f64>,

    /// Rotation from the world NED frame to the body FRD frame
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity of the body (FRD) relative to the world, expressed in FRD [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl State {
    /// Create a state from explicit values. No validation is performed.
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a state at rest at a specific NED position.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a state from a raw (not necessarily normalised) attitude quaternion.
    ///
    /// # Arguments
    /// * `attitude` - Quaternion in `(w, i, j, k)` form, rotating NED into FRD.
    ///
    /// # Returns
    /// The state with a normalised attitude, or `ModelError::DegenerateAttitude`
    /// if the quaternion is non-finite or zero.
    pub fn from_quaternion(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: Quaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Result<Self, ModelError> {
        if !attitude.coords.iter().all(|c| c.is_finite()) {
            return Err(ModelError::DegenerateAttitude);
        }
        // Scale by the largest component first so the squared norm can neither
        // overflow nor underflow.
        let scale = attitude.coords.amax();
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(ModelError::DegenerateAttitude);
        }
        let attitude = UnitQuaternion::from_quaternion(attitude / scale);

        Ok(Self::new(position, velocity, attitude, angular_velocity))
    }

    /// Check that the attitude is still a unit quaternion.
    ///
    /// `UnitQuaternion` keeps the norm by construction, but values that arrive
    /// through deserialisation or `new_unchecked` bypass that guarantee.
    pub fn validate(&self, tolerance: f64) -> Result<(), ModelError> {
        let norm = self.attitude.norm();
        // Negated comparison so that NaN is rejected too.
        if !((norm - 1.0).abs() <= tolerance) {
            return Err(ModelError::NonUnitAttitude { norm });
        }
        Ok(())
    }
}
