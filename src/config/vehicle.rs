use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::components::{VehicleConstants, NO_THRUST_CURVE};
use crate::config::{ConfigError, RawVehicleConfig};

/// Identity and dynamical constants of one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    /// Drone id in the network.
    pub vehicle_id: u32,
    /// Namespace appended to every topic and node name.
    pub namespace: String,
    /// Mass and thrust curve calibration.
    pub constants: VehicleConstants,
}

impl Default for VehicleConfig {
    /// An uncalibrated vehicle `drone1`.
    fn default() -> Self {
        Self {
            vehicle_id: 1,
            namespace: "drone".to_string(),
            constants: VehicleConstants::default(),
        }
    }
}

impl VehicleConfig {
    /// Creates a new vehicle configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `VehicleSource` specifying if the configuration is given
    ///              in code (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the configuration, or an error if it fails to load
    /// or breaks a vehicle model invariant.
    pub fn new(source: VehicleSource) -> Result<Self, ConfigError> {
        match source {
            VehicleSource::Programmed(constants) => {
                constants.validate()?;
                Ok(Self {
                    constants,
                    ..Default::default()
                })
            }
            VehicleSource::File(path) => Self::from_file(path),
        }
    }

    /// Reads a vehicle parameter file in YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading vehicle parameters from {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawVehicleConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts the on-disk layout into a validated configuration. Nothing is
    /// returned unless the thrust curve arrays line up.
    fn from_raw_config(raw: RawVehicleConfig) -> Result<Self, ConfigError> {
        if raw.namespace.is_empty() {
            return Err(ConfigError::ValidationError(
                "namespace must not be empty".to_string(),
            ));
        }

        let constants = match raw.dynamics.thrust_curve {
            Some(curve) => {
                if curve.identifier == NO_THRUST_CURVE && curve.has_entries() {
                    warn!(
                        "Thrust curve entries given for identifier '{}' are ignored by consumers",
                        NO_THRUST_CURVE
                    );
                }
                VehicleConstants::new(
                    raw.dynamics.mass,
                    curve.identifier,
                    curve.parameter_names,
                    curve.parameters,
                )?
            }
            None => {
                warn!(
                    "No thrust curve for vehicle {}, it will stay uncalibrated",
                    raw.vehicle_id
                );
                VehicleConstants::new(raw.dynamics.mass, NO_THRUST_CURVE, Vec::new(), Vec::new())?
            }
        };

        Ok(Self {
            vehicle_id: raw.vehicle_id,
            namespace: raw.namespace,
            constants,
        })
    }

    /// Name of the vehicle, e.g. `drone1`.
    pub fn name(&self) -> String {
        format!("{}{}", self.namespace, self.vehicle_id)
    }
}

/// Source for vehicle configuration.
#[derive(Debug, Clone)]
pub enum VehicleSource {
    Programmed(VehicleConstants),
    File(PathBuf),
}
