//! Engine-free driver for the controller callbacks.
//!
//! Mirrors Bevy's `Time<Fixed>` accumulator: each rendered frame adds its
//! duration, and every whole step in the accumulator runs one fixed callback.
//! Fixed steps run before the frame callback, as in Bevy's main schedule.

use std::time::Duration;

use super::controller::{AnimationDriver, MovementController, PhysicsBody};
use crate::input::AxisSource;

#[derive(Debug, Clone)]
pub struct FixedStepper {
  step: Duration,
  accumulator: Duration,
}

impl FixedStepper {
  pub fn new(step: Duration) -> Self {
    assert!(!step.is_zero(), "fixed step must be positive");
    Self {
      step,
      accumulator: Duration::ZERO,
    }
  }

  pub fn step(&self) -> Duration {
    self.step
  }

  /// Time carried over to the next frame.
  pub fn overstep(&self) -> Duration {
    self.accumulator
  }

  /// Adds a frame's duration and returns how many fixed steps are due.
  pub fn advance(&mut self, frame: Duration) -> u32 {
    self.accumulator += frame;
    let mut steps = 0;
    while self.accumulator >= self.step {
      self.accumulator -= self.step;
      steps += 1;
    }
    steps
  }
}

/// Runs one rendered frame: zero or more fixed steps, then the frame callback.
/// Returns the number of fixed steps taken.
pub fn run_frame(
  controller: &mut MovementController,
  stepper: &mut FixedStepper,
  frame: Duration,
  input: &impl AxisSource,
  animator: &mut impl AnimationDriver,
  body: &mut impl PhysicsBody,
) -> u32 {
  let steps = stepper.advance(frame);
  let dt = stepper.step().as_secs_f32();
  for _ in 0..steps {
    controller.on_fixed_step(body, dt);
  }
  controller.on_frame(input, animator);
  steps
}
