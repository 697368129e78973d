use serde::Deserialize;
use thiserror::Error;

use crate::components::ModelError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(String),
    #[error("Vehicle model invariant violated: {0}")]
    Model(#[from] ModelError),
}

/// Vehicle parameter file as written on disk.
#[derive(Debug, Deserialize)]
pub struct RawVehicleConfig {
    /// Drone id in the network
    #[serde(default = "default_vehicle_id")]
    pub vehicle_id: u32,
    /// Namespace prepended to every topic and node name
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub dynamics: RawDynamics,
}

#[derive(Debug, Deserialize)]
pub struct RawDynamics {
    /// Mass (Kg)
    pub mass: f64,
    #[serde(default)]
    pub thrust_curve: Option<RawThrustCurve>,
}

#[derive(Debug, Deserialize)]
pub struct RawThrustCurve {
    pub identifier: String,
    #[serde(default)]
    pub parameter_names: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<f64>,
}

impl RawThrustCurve {
    /// Whether any parameter names or values were listed.
    pub fn has_entries(&self) -> bool {
        !self.parameter_names.is_empty() || !self.parameters.is_empty()
    }
}

fn default_vehicle_id() -> u32 {
    1
}

fn default_namespace() -> String {
    "drone".to_string()
}
