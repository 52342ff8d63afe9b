use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

/// Left/right intent, -1..=1.
#[derive(Debug, InputAction)]
#[action_output(f32)]
pub struct Horizontal;

/// Down/up intent, -1..=1.
#[derive(Debug, InputAction)]
#[action_output(f32)]
pub struct Vertical;
