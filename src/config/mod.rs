mod loader;
mod vehicle;

pub use loader::{ConfigError, RawDynamics, RawThrustCurve, RawVehicleConfig};
pub use vehicle::{VehicleConfig, VehicleSource};
