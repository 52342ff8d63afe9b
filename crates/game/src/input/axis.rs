use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Horizontal, PlayerInput, Vertical};
use crate::config::ConfigLoaded;

/// The two polled directional axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAxis {
  Horizontal,
  Vertical,
}

/// Anything that can be polled for raw axis values in {-1, 0, 1}.
pub trait AxisSource {
  fn axis_raw(&self, axis: InputAxis) -> f32;
}

/// Latest quantized sample of both axes for one entity.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct RawAxes {
  pub horizontal: f32,
  pub vertical: f32,
}

impl RawAxes {
  pub fn new(horizontal: f32, vertical: f32) -> Self {
    Self {
      horizontal,
      vertical,
    }
  }
}

impl AxisSource for RawAxes {
  fn axis_raw(&self, axis: InputAxis) -> f32 {
    match axis {
      InputAxis::Horizontal => self.horizontal,
      InputAxis::Vertical => self.vertical,
    }
  }
}

/// Snaps an analog value to {-1, 0, 1}. NaN reads as 0.
pub fn quantize_axis(value: f32, dead_zone: f32) -> f32 {
  if value.is_nan() || value.abs() <= dead_zone {
    0.0
  } else {
    value.signum()
  }
}

/// Copies active action values into `RawAxes`.
pub fn sample_axes(
  mut players: Query<(&Actions<PlayerInput>, &mut RawAxes)>,
  horizontal: Query<(&Action<Horizontal>, &ActionState)>,
  vertical: Query<(&Action<Vertical>, &ActionState)>,
  config: Res<ConfigLoaded>,
) {
  let dead_zone = config.input.dead_zone;

  for (actions, mut axes) in &mut players {
    let mut sample = RawAxes::default();
    for action_entity in actions.iter() {
      // Only use input when action is active (Fired or Ongoing)
      if let Ok((action, state)) = horizontal.get(action_entity) {
        if matches!(state, ActionState::Fired | ActionState::Ongoing) {
          sample.horizontal = quantize_axis(**action, dead_zone);
        }
      }
      if let Ok((action, state)) = vertical.get(action_entity) {
        if matches!(state, ActionState::Fired | ActionState::Ongoing) {
          sample.vertical = quantize_axis(**action, dead_zone);
        }
      }
    }

    // Avoid tripping change detection on unchanged input.
    axes.set_if_neq(sample);
  }
}
