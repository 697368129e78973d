use approx::assert_relative_eq;
use autopilot::components::{State, ATTITUDE_NORM_TOLERANCE};
use nalgebra::{UnitQuaternion, Vector3};

/// Assert that a state is finite everywhere and carries a unit attitude
#[track_caller]
pub fn assert_state_valid(state: &State) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert!(
        state.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite"
    );
    assert_relative_eq!(
        state.attitude.norm(),
        1.0,
        epsilon = ATTITUDE_NORM_TOLERANCE
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two attitudes are approximately equal
#[track_caller]
pub fn assert_attitude_eq(
    actual: &UnitQuaternion<f64>,
    expected: &UnitQuaternion<f64>,
    epsilon: f64,
) {
    // Compare using angle difference
    let angle = actual.angle_to(expected);
    assert!(
        angle < epsilon,
        "Attitude difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}
