pub mod animation;
pub mod body;
pub mod components;
pub mod controller;
pub mod harness;
mod spawn;
pub mod systems;


use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
pub use controller::{
  AnimationDriver, ControllerError, Dependency, MovementController, PhysicsBody,
};

use crate::input::axis::sample_axes;

/// Ordering of the controller's per-frame work in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
  Sample,
  Frame,
  Present,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app
      .configure_sets(
        Update,
        (
          ControllerSet::Sample,
          ControllerSet::Frame,
          ControllerSet::Present,
        )
          .chain(),
      )
      .add_systems(Startup, spawn::spawn_player)
      // Before FixedUpdate and Update, so callbacks never see an unresolved controller
      .add_systems(PreUpdate, systems::initialize_controllers)
      .add_systems(
        FixedUpdate,
        systems::run_fixed_step.before(PhysicsSet::SyncBackend),
      )
      .add_systems(Update, sample_axes.in_set(ControllerSet::Sample))
      .add_systems(Update, systems::run_frame_update.in_set(ControllerSet::Frame))
      .add_systems(
        Update,
        (animation::select_pose, animation::apply_pose_to_sprite)
          .chain()
          .in_set(ControllerSet::Present),
      );
  }
}
