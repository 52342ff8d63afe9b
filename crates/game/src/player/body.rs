use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::controller::PhysicsBody;

/// A rapier kinematic character seen through `PhysicsBody`.
///
/// The move request becomes a `KinematicCharacterController` translation, so
/// rapier sweeps the collider and resolves contacts before writing the final
/// position back to the `Transform`.
pub struct KinematicBody<'a> {
  transform: &'a Transform,
  controller: &'a mut KinematicCharacterController,
}

impl<'a> KinematicBody<'a> {
  pub fn new(transform: &'a Transform, controller: &'a mut KinematicCharacterController) -> Self {
    Self {
      transform,
      controller,
    }
  }
}

impl PhysicsBody for KinematicBody<'_> {
  fn position(&self) -> Vec2 {
    self.transform.translation.truncate()
  }

  fn move_position(&mut self, target: Vec2) {
    self.controller.translation = Some(target - self.position());
  }
}
