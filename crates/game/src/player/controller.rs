//! Movement-and-animation controller core.
//!
//! The controller itself knows nothing about Bevy scheduling. The engine side
//! (see `systems`) or the [`FixedStepper`](super::harness::FixedStepper)
//! harness decides when `on_frame` and `on_fixed_step` run, and hands in the
//! input source, animation driver and physics body explicitly.

use bevy::prelude::*;

use crate::config::DEFAULT_MOVE_SPEED;
use crate::input::{AxisSource, InputAxis, RawAxes};

pub const IS_MOVING: &str = "isMoving";
pub const MOVE_X: &str = "moveX";
pub const MOVE_Y: &str = "moveY";

/// Receives movement requests and owns collision resolution.
pub trait PhysicsBody {
  fn position(&self) -> Vec2;

  /// Request a move to `target`. The body may stop short of it.
  fn move_position(&mut self, target: Vec2);
}

/// Named-parameter sink for the animation system. Write-only from the
/// controller's side.
pub trait AnimationDriver {
  fn set_bool(&mut self, name: &str, value: bool);
  fn set_float(&mut self, name: &str, value: f32);
}

/// Normalizes raw axes so diagonals are no faster than a single axis.
/// Zero stays zero.
pub fn normalize_input(raw: Vec2) -> Vec2 {
  raw.normalize_or_zero()
}

#[derive(Component, Debug, Clone, PartialEq)]
#[require(RawAxes)]
pub struct MovementController {
  /// World units per second.
  pub move_speed: f32,
  movement_input: Vec2,
}

impl Default for MovementController {
  fn default() -> Self {
    Self::new(DEFAULT_MOVE_SPEED)
  }
}

impl MovementController {
  pub fn new(move_speed: f32) -> Self {
    Self {
      move_speed,
      movement_input: Vec2::ZERO,
    }
  }

  /// Latest normalized input. Always unit length or zero.
  pub fn movement_input(&self) -> Vec2 {
    self.movement_input
  }

  pub fn is_moving(&self) -> bool {
    self.movement_input != Vec2::ZERO
  }

  pub fn read_input(&mut self, input: &impl AxisSource) -> Vec2 {
    let raw = Vec2::new(
      input.axis_raw(InputAxis::Horizontal),
      input.axis_raw(InputAxis::Vertical),
    );
    self.movement_input = normalize_input(raw);
    self.movement_input
  }

  /// Pushes `isMoving`, and the direction only while moving. When input drops
  /// to zero `moveX`/`moveY` keep their last values, which idle poses use as
  /// the facing direction.
  pub fn update_animation(&self, animator: &mut impl AnimationDriver) {
    let moving = self.is_moving();
    animator.set_bool(IS_MOVING, moving);

    if moving {
      animator.set_float(MOVE_X, self.movement_input.x);
      animator.set_float(MOVE_Y, self.movement_input.y);
    }
  }

  /// Render-frame callback: sample input, then sync animation.
  pub fn on_frame(&mut self, input: &impl AxisSource, animator: &mut impl AnimationDriver) {
    self.read_input(input);
    self.update_animation(animator);
  }

  pub fn position_delta(&self, dt: f32) -> Vec2 {
    self.movement_input * self.move_speed * dt
  }

  /// Fixed-step callback: request a move by one step's worth of travel.
  pub fn on_fixed_step(&self, body: &mut impl PhysicsBody, dt: f32) {
    let target = body.position() + self.position_delta(dt);
    body.move_position(target);
  }
}

/// What the controller needs from its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
  PhysicsBody,
  AnimationDriver,
}

impl std::fmt::Display for Dependency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::PhysicsBody => write!(f, "physics body (Transform, Collider and KinematicCharacterController)"),
      Self::AnimationDriver => write!(f, "animation driver (AnimationParameters)"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
  MissingDependency { entity: Entity, dependency: Dependency },
}

impl std::fmt::Display for ControllerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::MissingDependency { entity, dependency } => {
        write!(f, "entity {:?} is missing its {}", entity, dependency)
      }
    }
  }
}

impl std::error::Error for ControllerError {}
