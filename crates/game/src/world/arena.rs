use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{ArenaConfig, ConfigLoaded, rgb};

/// Four fixed walls enclosing the play area.
pub fn spawn_walls(mut commands: Commands, config: Res<ConfigLoaded>) {
  let arena = &config.arena;
  for (center, size) in wall_rects(arena) {
    commands.spawn((
      Sprite {
        color: rgb(arena.wall_color),
        custom_size: Some(size),
        ..default()
      },
      Transform::from_translation(center.extend(0.0)),
      RigidBody::Fixed,
      // Rapier cuboid uses half-extents
      Collider::cuboid(size.x / 2.0, size.y / 2.0),
    ));
  }
}

/// Seeded scatter of square obstacles, kept clear of the player spawn.
pub fn spawn_obstacles(mut commands: Commands, config: Res<ConfigLoaded>) {
  let arena = &config.arena;
  let spawn = Vec2::new(config.player.spawn_x, config.player.spawn_y);
  let clearance = config.player.collider_radius * 4.0;

  let mut rng = StdRng::seed_from_u64(arena.obstacle_seed);
  let half = Vec2::new(arena.width, arena.height) / 2.0;
  let mut placed = 0;
  let mut attempts = 0;

  while placed < arena.obstacle_count && attempts < arena.obstacle_count * 16 {
    attempts += 1;
    let size = if arena.obstacle_size_max > arena.obstacle_size_min {
      rng.random_range(arena.obstacle_size_min..arena.obstacle_size_max)
    } else {
      arena.obstacle_size_min
    };
    let reach = half - Vec2::splat(size / 2.0);
    if reach.x <= 0.0 || reach.y <= 0.0 {
      break;
    }
    let center = Vec2::new(
      rng.random_range(-reach.x..reach.x),
      rng.random_range(-reach.y..reach.y),
    );
    if center.distance(spawn) < clearance + size {
      continue;
    }

    commands.spawn((
      Sprite {
        color: rgb(arena.obstacle_color),
        custom_size: Some(Vec2::splat(size)),
        ..default()
      },
      Transform::from_translation(center.extend(0.0)),
      RigidBody::Fixed,
      Collider::cuboid(size / 2.0, size / 2.0),
    ));
    placed += 1;
  }

  debug!("Placed {} of {} obstacles", placed, arena.obstacle_count);
}

/// Center and full size of each wall, outside the inner play area.
fn wall_rects(arena: &ArenaConfig) -> [(Vec2, Vec2); 4] {
  let t = arena.wall_thickness;
  let half_w = arena.width / 2.0;
  let half_h = arena.height / 2.0;
  let horizontal = Vec2::new(arena.width + t * 2.0, t);
  let vertical = Vec2::new(t, arena.height);
  [
    (Vec2::new(0.0, half_h + t / 2.0), horizontal),
    (Vec2::new(0.0, -half_h - t / 2.0), horizontal),
    (Vec2::new(-half_w - t / 2.0, 0.0), vertical),
    (Vec2::new(half_w + t / 2.0, 0.0), vertical),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  fn arena() -> ArenaConfig {
    ArenaConfig {
      width: 100.0,
      height: 60.0,
      wall_thickness: 10.0,
      wall_color: [0.0; 3],
      obstacle_seed: 1,
      obstacle_count: 0,
      obstacle_size_min: 1.0,
      obstacle_size_max: 2.0,
      obstacle_color: [0.0; 3],
    }
  }

  #[test]
  fn walls_enclose_play_area() {
    let walls = wall_rects(&arena());

    // top wall inner edge sits on y = 30
    let (top, top_size) = walls[0];
    assert_eq!(top.y - top_size.y / 2.0, 30.0);
    // right wall inner edge sits on x = 50
    let (right, right_size) = walls[3];
    assert_eq!(right.x - right_size.x / 2.0, 50.0);
    // horizontal walls cover the corners
    assert_eq!(top_size.x, 120.0);
  }
}
