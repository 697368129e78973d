#![allow(dead_code)]
#![allow(unused_imports)]

mod assertions;
mod test_app;

// Re-export
pub use assertions::{assert_attitude_eq, assert_position_eq, assert_state_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
