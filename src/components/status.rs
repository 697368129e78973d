use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ModelError;

/// Discrete operating flags of the vehicle, owned by the arming / mode supervisor.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStatus {
    /// Actuators are enabled to produce force.
    pub armed: bool,
    /// The vehicle is airborne.
    pub flying: bool,
    /// An external computer holds command authority.
    pub offboard: bool,
}

impl VehicleStatus {
    pub fn new(armed: bool, flying: bool, offboard: bool) -> Self {
        Self {
            armed,
            flying,
            offboard,
        }
    }

    /// A physically consistent status never reports flight while disarmed.
    /// The type does not enforce this; the supervisor checks before publishing.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.flying && !self.armed {
            return Err(ModelError::InconsistentStatus);
        }
        Ok(())
    }
}
