use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::AnimationParameters;
use super::components::{DirectionalPose, Player};
use super::controller::MovementController;
use crate::config::{ConfigLoaded, rgb};
use crate::input::{PlayerInput, player_input_actions};

pub fn spawn_player(mut commands: Commands, config: Res<ConfigLoaded>) {
  let player = &config.player;
  let spawn_pos = Vec3::new(player.spawn_x, player.spawn_y, 10.0);

  info!(
    "Spawning player at {:?} (move_speed={})",
    spawn_pos, player.move_speed
  );

  commands.spawn((
    Player,
    Transform::from_translation(spawn_pos),
    Visibility::default(),
    Sprite {
      color: rgb(player.idle_color),
      custom_size: Some(Vec2::splat(player.sprite_size)),
      ..default()
    },
    // Physics body: kinematic, moved only through the character controller
    RigidBody::KinematicPositionBased,
    Collider::ball(player.collider_radius),
    KinematicCharacterController::default(),
    // Animation driver
    AnimationParameters::default(),
    DirectionalPose::default(),
    MovementController::new(player.move_speed),
    PlayerInput,
    player_input_actions(),
  ));
}
