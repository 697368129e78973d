mod vehicle;

pub use vehicle::{
    monitor_state_system, monitor_status_system, InvariantViolation, VehicleId, VehiclePlugin,
    VehicleSet,
};
