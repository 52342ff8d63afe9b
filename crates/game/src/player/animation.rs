use std::collections::HashMap;

use bevy::prelude::*;

use super::components::{DirectionalPose, Facing, Player};
use super::controller::{AnimationDriver, IS_MOVING, MOVE_X, MOVE_Y};
use crate::config::{ConfigLoaded, rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimParam {
  Bool(bool),
  Float(f32),
}

/// Named animation parameters for one entity.
#[derive(Component, Default, Debug, Clone)]
pub struct AnimationParameters {
  values: HashMap<String, AnimParam>,
}

impl AnimationParameters {
  pub fn get(&self, name: &str) -> Option<AnimParam> {
    self.values.get(name).copied()
  }

  pub fn get_bool(&self, name: &str) -> Option<bool> {
    match self.get(name)? {
      AnimParam::Bool(value) => Some(value),
      AnimParam::Float(_) => None,
    }
  }

  pub fn get_float(&self, name: &str) -> Option<f32> {
    match self.get(name)? {
      AnimParam::Float(value) => Some(value),
      AnimParam::Bool(_) => None,
    }
  }

  fn set(&mut self, name: &str, value: AnimParam) {
    match self.values.get_mut(name) {
      Some(slot) => *slot = value,
      None => {
        self.values.insert(name.to_owned(), value);
      }
    }
  }
}

impl AnimationDriver for AnimationParameters {
  fn set_bool(&mut self, name: &str, value: bool) {
    self.set(name, AnimParam::Bool(value));
  }

  fn set_float(&mut self, name: &str, value: f32) {
    self.set(name, AnimParam::Float(value));
  }
}

/// Maps parameters to a pose. Without a stored direction the previous facing
/// is kept.
pub fn pose_from_parameters(params: &AnimationParameters, previous: DirectionalPose) -> DirectionalPose {
  let moving = params.get_bool(IS_MOVING).unwrap_or(false);
  let direction = Vec2::new(
    params.get_float(MOVE_X).unwrap_or(0.0),
    params.get_float(MOVE_Y).unwrap_or(0.0),
  );

  DirectionalPose {
    moving,
    facing: Facing::from_direction(direction).unwrap_or(previous.facing),
  }
}

pub fn select_pose(
  mut query: Query<(&AnimationParameters, &mut DirectionalPose), Changed<AnimationParameters>>,
) {
  for (params, mut pose) in &mut query {
    let next = pose_from_parameters(params, *pose);
    if pose.set_if_neq(next) {
      trace!("Pose: moving={}, facing={:?}", next.moving, next.facing);
    }
  }
}

pub fn apply_pose_to_sprite(
  config: Res<ConfigLoaded>,
  mut query: Query<(&DirectionalPose, &mut Sprite), (With<Player>, Changed<DirectionalPose>)>,
) {
  for (pose, mut sprite) in &mut query {
    sprite.flip_x = pose.facing == Facing::Left;
    sprite.color = if pose.moving {
      rgb(config.player.moving_color)
    } else {
      rgb(config.player.idle_color)
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parameters_overwrite_by_name() {
    let mut params = AnimationParameters::default();
    params.set_float(MOVE_X, 1.0);
    params.set_float(MOVE_X, -1.0);
    params.set_bool(IS_MOVING, true);

    assert_eq!(params.get_float(MOVE_X), Some(-1.0));
    assert_eq!(params.get_bool(IS_MOVING), Some(true));
    assert_eq!(params.get_float(IS_MOVING), None);
    assert_eq!(params.get(MOVE_Y), None);
  }

  #[test]
  fn pose_faces_dominant_axis() {
    let mut params = AnimationParameters::default();
    params.set_bool(IS_MOVING, true);
    params.set_float(MOVE_X, -0.2);
    params.set_float(MOVE_Y, 0.9);

    let pose = pose_from_parameters(&params, DirectionalPose::default());
    assert_eq!(
      pose,
      DirectionalPose {
        moving: true,
        facing: Facing::Up
      }
    );
  }

  #[test]
  fn pose_keeps_facing_without_direction() {
    let params = AnimationParameters::default();
    let previous = DirectionalPose {
      moving: true,
      facing: Facing::Left,
    };

    let pose = pose_from_parameters(&params, previous);
    assert!(!pose.moving);
    assert_eq!(pose.facing, Facing::Left);
  }

  #[test]
  fn diagonal_tie_prefers_horizontal() {
    let d = std::f32::consts::FRAC_1_SQRT_2;
    assert_eq!(Facing::from_direction(Vec2::new(d, d)), Some(Facing::Right));
    assert_eq!(Facing::from_direction(Vec2::new(-d, -d)), Some(Facing::Left));
    assert_eq!(Facing::from_direction(Vec2::ZERO), None);
  }
}
