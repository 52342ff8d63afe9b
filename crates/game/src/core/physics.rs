use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub struct PhysicsPlugin {
  pub pixels_per_meter: f32,
}

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    // Fixed schedule so every controller step is consumed by its own physics step.
    // Gravity is left alone: kinematic characters and fixed walls ignore it.
    app.add_plugins(
      RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(self.pixels_per_meter)
        .in_fixed_schedule(),
    );
  }
}
