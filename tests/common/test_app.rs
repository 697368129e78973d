use autopilot::{
    config::VehicleConfig,
    plugins::{InvariantViolation, VehicleId, VehiclePlugin},
};
use bevy::{ecs::event::Events, prelude::*};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    vehicle_config: Option<VehicleConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicle(mut self, config: VehicleConfig) -> Self {
        self.vehicle_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        if let Some(config) = self.vehicle_config {
            let plugin = VehiclePlugin::new(config).expect("test vehicle config is valid");
            app.add_plugins(plugin);
        }

        // Run startup so that vehicle entities exist
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let mut query = self.app.world_mut().query::<&T>();
        query.get_single(self.app.world()).ok()
    }

    pub fn resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    /// Invariant violations reported during the last update.
    pub fn violations(&self) -> Vec<InvariantViolation> {
        self.app
            .world()
            .get_resource::<Events<InvariantViolation>>()
            .map(|events| events.iter_current_update_events().cloned().collect())
            .unwrap_or_default()
    }

    /// Replace a vehicle's component wholesale, as a producer would.
    pub fn publish<T: Component>(&mut self, vehicle_id: u32, value: T) {
        let mut query = self.app.world_mut().query::<(Entity, &VehicleId)>();
        let entity = query
            .iter(self.app.world())
            .find(|(_, id)| id.0 == vehicle_id)
            .map(|(entity, _)| entity)
            .expect("vehicle entity exists");

        self.app.world_mut().entity_mut(entity).insert(value);
    }
}
