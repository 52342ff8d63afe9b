use bevy::prelude::*;

use super::controller::ControllerError;

#[derive(Component)]
pub struct Player;

/// This entity's move speed was set for it alone; config reloads leave it be.
#[derive(Component, Debug)]
pub struct MoveSpeedOverride;

/// Dependencies resolved; frame and fixed-step callbacks may run.
#[derive(Component, Debug)]
pub struct ControllerReady;

/// Initialization failed. The entity is left alone from here on.
#[derive(Component, Debug)]
pub struct ControllerFault(pub ControllerError);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
  Up,
  #[default]
  Down,
  Left,
  Right,
}

impl Facing {
  /// Dominant axis wins; ties go to the horizontal axis. `None` for zero.
  pub fn from_direction(dir: Vec2) -> Option<Self> {
    if dir == Vec2::ZERO || !dir.is_finite() {
      return None;
    }
    let facing = if dir.x.abs() >= dir.y.abs() {
      if dir.x > 0.0 { Self::Right } else { Self::Left }
    } else if dir.y > 0.0 {
      Self::Up
    } else {
      Self::Down
    };
    Some(facing)
  }
}

/// Pose picked from the animation parameters each frame.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalPose {
  pub moving: bool,
  pub facing: Facing,
}
