use bevy::prelude::*;

use crate::components::{ModelError, State, VehicleStatus, ATTITUDE_NORM_TOLERANCE};
use crate::config::{ConfigError, VehicleConfig};

/// Network id of a vehicle entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub u32);

/// Sent by the monitor systems when a published value breaks a model invariant.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct InvariantViolation {
    pub vehicle: VehicleId,
    pub error: ModelError,
}

/// Publishes the vehicle model into the app.
///
/// `VehicleConstants` goes in as a resource, so every consumer gets a
/// read-only `Res` view. One entity per vehicle carries `State` and
/// `VehicleStatus`; the estimator and supervisor replace those values
/// wholesale and everything else only reads them.
pub struct VehiclePlugin {
    config: VehicleConfig,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum VehicleSet {
    /// Estimator and supervisor systems writing `State` / `VehicleStatus`.
    Publish,
    /// Invariant checks on freshly published values.
    Monitor,
}

impl VehiclePlugin {
    pub fn new(config: VehicleConfig) -> Result<Self, ConfigError> {
        config.constants.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }
}

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        let vehicle_id = self.config.vehicle_id;
        let name = self.config.name();

        if !self.config.constants.is_calibrated() {
            warn!("Vehicle {} has no thrust curve loaded", name);
        }

        app.insert_resource(self.config.constants.clone())
            .add_event::<InvariantViolation>()
            .configure_sets(Update, (VehicleSet::Publish, VehicleSet::Monitor).chain())
            .add_systems(Startup, move |mut commands: Commands| {
                info!("Spawning vehicle {}", name);
                commands.spawn((
                    VehicleId(vehicle_id),
                    State::default(),
                    VehicleStatus::default(),
                    Name::new(name.clone()),
                ));
            })
            .add_systems(
                Update,
                (monitor_state_system, monitor_status_system).in_set(VehicleSet::Monitor),
            );
    }
}

/// Reports any published state whose attitude is no longer a unit quaternion.
pub fn monitor_state_system(
    query: Query<(&VehicleId, &State), Changed<State>>,
    mut violations: EventWriter<InvariantViolation>,
) {
    for (id, state) in query.iter() {
        if let Err(e) = state.validate(ATTITUDE_NORM_TOLERANCE) {
            error!("Vehicle {} published an invalid state: {}", id.0, e);
            violations.send(InvariantViolation {
                vehicle: *id,
                error: e,
            });
        }
    }
}

/// Reports any published status claiming flight while disarmed.
pub fn monitor_status_system(
    query: Query<(&VehicleId, &VehicleStatus), Changed<VehicleStatus>>,
    mut violations: EventWriter<InvariantViolation>,
) {
    for (id, status) in query.iter() {
        if let Err(e) = status.validate() {
            error!("Vehicle {} published an invalid status: {}", id.0, e);
            violations.send(InvariantViolation {
                vehicle: *id,
                error: e,
            });
        }
    }
}
