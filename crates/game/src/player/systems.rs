use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::AnimationParameters;
use super::body::KinematicBody;
use super::components::{ControllerFault, ControllerReady};
use super::controller::{ControllerError, Dependency, MovementController};
use crate::input::RawAxes;

/// Resolves each new controller's physics body and animation driver. Runs once
/// per entity, before any frame or fixed-step callback.
///
/// Rapier only moves a character controller that has a collider, and the move
/// request reads the `Transform`, so all three make up the physics body.
pub fn initialize_controllers(
  mut commands: Commands,
  pending: Query<
    (
      Entity,
      Has<Transform>,
      Has<KinematicCharacterController>,
      Has<Collider>,
      Has<AnimationParameters>,
    ),
    (
      With<MovementController>,
      Without<ControllerReady>,
      Without<ControllerFault>,
    ),
  >,
) {
  for (entity, has_transform, has_character, has_collider, has_animator) in &pending {
    let missing = if !(has_transform && has_character && has_collider) {
      Some(Dependency::PhysicsBody)
    } else if !has_animator {
      Some(Dependency::AnimationDriver)
    } else {
      None
    };

    match missing {
      Some(dependency) => {
        let err = ControllerError::MissingDependency { entity, dependency };
        error!("Movement controller disabled: {}", err);
        commands.entity(entity).insert(ControllerFault(err));
      }
      None => {
        info!("Movement controller ready on {:?}", entity);
        commands.entity(entity).insert(ControllerReady);
      }
    }
  }
}

/// Update: sample input, then push animation parameters.
pub fn run_frame_update(
  mut controllers: Query<
    (&mut MovementController, &RawAxes, &mut AnimationParameters),
    With<ControllerReady>,
  >,
) {
  for (mut controller, axes, mut params) in &mut controllers {
    controller.on_frame(axes, &mut *params);
    if controller.is_moving() {
      trace!("Move input: {:?}", controller.movement_input());
    }
  }
}

/// FixedUpdate: request this step's move from the physics body.
pub fn run_fixed_step(
  mut controllers: Query<
    (&MovementController, &Transform, &mut KinematicCharacterController),
    With<ControllerReady>,
  >,
  time: Res<Time>,
) {
  let dt = time.delta_secs();
  for (controller, transform, mut character) in &mut controllers {
    let mut body = KinematicBody::new(transform, &mut *character);
    controller.on_fixed_step(&mut body, dt);
  }
}
