pub mod constants;
pub mod error;
pub mod state;
pub mod status;

pub use constants::{VehicleConstants, NO_THRUST_CURVE};
pub use error::ModelError;
pub use state::{State, ATTITUDE_NORM_TOLERANCE};
pub use status::VehicleStatus;
