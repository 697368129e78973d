use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ModelError;

/// Sentinel thrust curve identifier meaning "no calibration loaded".
pub const NO_THRUST_CURVE: &str = "None";

/// Static dynamical parameters of the vehicle.
///
/// Loaded once from the vehicle parameter file at start-up and read-only for
/// the rest of the session. A default value (`mass = 0`, curve `"None"`) is a
/// valid "not yet calibrated" state, not a corrupted one.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConstants {
    /// Mass of the vehicle (Kg).
    pub mass: f64,
    /// Identifier of the thrust curve model, `"None"` when unset.
    pub thrust_curve_id: String,
    /// Names of the thrust curve parameters, index-aligned with `thrust_curve_values`.
    ///
    /// Input also accepts the legacy `thurst_curve_params` key, but output is
    /// always written as `thrust_curve_params`.
    #[serde(alias = "thurst_curve_params")]
    pub thrust_curve_params: Vec<String>,
    /// Calibration values associated positionally with `thrust_curve_params`.
    pub thrust_curve_values: Vec<f64>,
}

impl Default for VehicleConstants {
    fn default() -> Self {
        Self {
            mass: 0.0,
            thrust_curve_id: NO_THRUST_CURVE.to_string(),
            thrust_curve_params: Vec::new(),
            thrust_curve_values: Vec::new(),
        }
    }
}

impl VehicleConstants {
    /// Creates a validated set of vehicle constants.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the vehicle (kg), finite and non-negative.
    /// * `thrust_curve_id` - Thrust curve model name, or `"None"`.
    /// * `thrust_curve_params` - Parameter names of the curve.
    /// * `thrust_curve_values` - Values matching `thrust_curve_params` index for index.
    ///
    /// # Returns
    /// The constants, or the first invariant they violate. Mismatched arrays
    /// are rejected, never truncated or padded.
    pub fn new(
        mass: f64,
        thrust_curve_id: impl Into<String>,
        thrust_curve_params: Vec<String>,
        thrust_curve_values: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let constants = Self {
            mass,
            thrust_curve_id: thrust_curve_id.into(),
            thrust_curve_params,
            thrust_curve_values,
        };
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(ModelError::InvalidMass(self.mass));
        }
        if self.is_calibrated() && self.thrust_curve_params.len() != self.thrust_curve_values.len()
        {
            return Err(ModelError::ThrustCurveMismatch {
                params: self.thrust_curve_params.len(),
                values: self.thrust_curve_values.len(),
            });
        }
        Ok(())
    }

    /// Whether a thrust curve has been loaded.
    pub fn is_calibrated(&self) -> bool {
        self.thrust_curve_id != NO_THRUST_CURVE
    }

    /// Pairs each thrust curve parameter name with its value, in order.
    ///
    /// Consumers that need real thrust data should go through this rather than
    /// reading the arrays directly: an unset curve is a precondition failure.
    pub fn thrust_curve(&self) -> Result<impl Iterator<Item = (&str, f64)> + '_, ModelError> {
        if !self.is_calibrated() {
            return Err(ModelError::UnsetCalibration);
        }
        self.validate()?;

        Ok(self
            .thrust_curve_params
            .iter()
            .map(String::as_str)
            .zip(self.thrust_curve_values.iter().copied()))
    }
}
