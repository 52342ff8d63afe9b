pub(crate) mod camera;
mod physics;

use bevy::prelude::*;
pub use physics::PhysicsPlugin;

use crate::player::ControllerSet;

pub struct CorePlugin {
  pub pixels_per_meter: f32,
}

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(PhysicsPlugin {
        pixels_per_meter: self.pixels_per_meter,
      })
      .init_resource::<camera::CameraSmoothness>()
      .add_systems(Startup, camera::setup_camera)
      .add_systems(Update, camera::camera_follow.after(ControllerSet::Present));
  }
}
