pub mod components;
pub mod config;
pub mod plugins;

pub use components::{ModelError, State, VehicleConstants, VehicleStatus};
pub use config::{ConfigError, VehicleConfig, VehicleSource};
pub use plugins::VehiclePlugin;
