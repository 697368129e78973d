use thiserror::Error;

/// Violations of the vehicle model invariants.
///
/// The model types never raise these on their own; they are returned by the
/// validating constructors and `validate` helpers that producers call before
/// publishing a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Attitude quaternion is not unit length (norm = {norm})")]
    NonUnitAttitude { norm: f64 },
    #[error("Attitude quaternion is degenerate and cannot be normalised")]
    DegenerateAttitude,
    #[error("Vehicle reported as flying while disarmed")]
    InconsistentStatus,
    #[error("Thrust curve has {params} parameter names but {values} values")]
    ThrustCurveMismatch { params: usize, values: usize },
    #[error("Invalid vehicle mass: {0}")]
    InvalidMass(f64),
    #[error("No thrust curve calibration loaded")]
    UnsetCalibration,
}
