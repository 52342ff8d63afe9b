//! The shipped config file parses and carries sane player settings.
//!
//! Run: cargo test -p topdown_walker --test config_roundtrip

use topdown_walker::config::{ConfigLoaded, DEFAULT_MOVE_SPEED, GameConfig};

const SHIPPED: &str = include_str!("../assets/config/game.config.toml");

#[test]
fn shipped_config_parses() {
  let config = GameConfig::parse(SHIPPED).expect("shipped config should parse");

  assert_eq!(config.window.title, "Top-down Walker");
  assert!(config.player.move_speed > 0.0);
  assert!(config.physics.fixed_hz > 0.0);
  assert!(config.player.collider_radius > 0.0);
  assert!(config.arena.obstacle_size_min <= config.arena.obstacle_size_max);
}

#[test]
fn player_spawn_fits_inside_arena() {
  let config = ConfigLoaded::from(GameConfig::parse(SHIPPED).unwrap());

  let half_w = config.arena.width / 2.0;
  let half_h = config.arena.height / 2.0;
  let r = config.player.collider_radius;
  assert!(config.player.spawn_x.abs() + r < half_w);
  assert!(config.player.spawn_y.abs() + r < half_h);
}

#[test]
fn move_speed_defaults_when_absent() {
  let without_speed = SHIPPED
    .lines()
    .filter(|line| !line.trim_start().starts_with("move_speed"))
    .collect::<Vec<_>>()
    .join("\n");

  let config = GameConfig::parse(&without_speed).unwrap();
  assert_eq!(config.player.move_speed, DEFAULT_MOVE_SPEED);
}
