mod arena;

use bevy::prelude::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, (arena::spawn_walls, arena::spawn_obstacles));
  }
}
