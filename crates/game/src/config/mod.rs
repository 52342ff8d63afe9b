mod plugin;

use std::path::{Path, PathBuf};

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.config.toml";

/// Move speed used when the config file does not set one.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  #[serde(default)]
  pub physics: PhysicsConfig,
  #[serde(default)]
  pub input: InputConfig,
  pub player: PlayerConfig,
  pub arena: ArenaConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
  pub pixels_per_meter: f32,
  /// Fixed timestep rate in Hz.
  pub fixed_hz: f64,
}

impl Default for PhysicsConfig {
  fn default() -> Self {
    Self {
      pixels_per_meter: 32.0,
      fixed_hz: 50.0,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InputConfig {
  /// Axis values with a smaller magnitude read as zero.
  pub dead_zone: f32,
}

impl Default for InputConfig {
  fn default() -> Self {
    Self { dead_zone: 0.001 }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  #[serde(default = "default_move_speed")]
  pub move_speed: f32,
  pub collider_radius: f32,
  pub sprite_size: f32,
  pub idle_color: [f32; 3],
  pub moving_color: [f32; 3],
}

fn default_move_speed() -> f32 {
  DEFAULT_MOVE_SPEED
}

#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
  pub width: f32,
  pub height: f32,
  pub wall_thickness: f32,
  pub wall_color: [f32; 3],
  pub obstacle_seed: u64,
  pub obstacle_count: u32,
  pub obstacle_size_min: f32,
  pub obstacle_size_max: f32,
  pub obstacle_color: [f32; 3],
}

/// Errors raised while reading the game config.
#[derive(Debug)]
pub enum ConfigError {
  Io { path: PathBuf, source: std::io::Error },
  Parse(toml::de::Error),
  /// A value parsed but is out of range.
  Invalid { field: &'static str, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
      Self::Parse(e) => write!(f, "failed to parse config: {}", e),
      Self::Invalid { field, reason } => write!(f, "invalid config value {}: {}", field, reason),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse(e) => Some(e),
      Self::Invalid { .. } => None,
    }
  }
}

impl GameConfig {
  pub fn parse(contents: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
  }

  /// Rejects values the physics step or controller cannot run with.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(self.physics.fixed_hz.is_finite() && self.physics.fixed_hz > 0.0) {
      return Err(ConfigError::Invalid {
        field: "physics.fixed_hz",
        reason: "must be a positive number",
      });
    }
    if !(self.physics.pixels_per_meter.is_finite() && self.physics.pixels_per_meter > 0.0) {
      return Err(ConfigError::Invalid {
        field: "physics.pixels_per_meter",
        reason: "must be a positive number",
      });
    }
    if !(self.input.dead_zone.is_finite() && (0.0..1.0).contains(&self.input.dead_zone)) {
      return Err(ConfigError::Invalid {
        field: "input.dead_zone",
        reason: "must be in [0, 1)",
      });
    }
    if !(self.player.collider_radius.is_finite() && self.player.collider_radius > 0.0) {
      return Err(ConfigError::Invalid {
        field: "player.collider_radius",
        reason: "must be a positive number",
      });
    }
    validate_move_speed(self.player.move_speed)?;
    Ok(())
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&contents)
  }
}

/// Move speed must be finite and non-negative. Shared with the CLI override.
pub fn validate_move_speed(speed: f32) -> Result<f32, ConfigError> {
  if speed.is_finite() && speed >= 0.0 {
    Ok(speed)
  } else {
    Err(ConfigError::Invalid {
      field: "player.move_speed",
      reason: "must be a finite, non-negative number",
    })
  }
}

pub fn rgb(c: [f32; 3]) -> Color {
  Color::srgb(c[0], c[1], c[2])
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub physics: PhysicsConfig,
  pub input: InputConfig,
  pub player: PlayerConfig,
  pub arena: ArenaConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      physics: config.physics,
      input: config.input,
      player: config.player,
      arena: config.arena,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MINIMAL: &str = r#"
    [window]
    width = 320
    height = 240
    title = "t"

    [camera]
    viewport_width = 320.0
    viewport_height = 240.0

    [player]
    spawn_x = 1.0
    spawn_y = 2.0
    collider_radius = 4.0
    sprite_size = 8.0
    idle_color = [1.0, 1.0, 1.0]
    moving_color = [0.0, 0.0, 0.0]

    [arena]
    width = 100.0
    height = 100.0
    wall_thickness = 4.0
    wall_color = [0.5, 0.5, 0.5]
    obstacle_seed = 1
    obstacle_count = 0
    obstacle_size_min = 1.0
    obstacle_size_max = 2.0
    obstacle_color = [0.5, 0.5, 0.5]
  "#;

  #[test]
  fn missing_optional_sections_use_defaults() {
    let config = GameConfig::parse(MINIMAL).unwrap();
    assert_eq!(config.player.move_speed, DEFAULT_MOVE_SPEED);
    assert_eq!(config.input.dead_zone, 0.001);
    assert_eq!(config.physics.fixed_hz, 50.0);
  }

  #[test]
  fn parse_error_is_reported() {
    let err = GameConfig::parse("[window]\nwidth = \"wide\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
  }

  #[test]
  fn zero_fixed_rate_is_rejected() {
    let contents = format!("{MINIMAL}\n[physics]\nfixed_hz = 0.0\n");
    let err = GameConfig::parse(&contents).unwrap_err();
    assert!(matches!(
      err,
      ConfigError::Invalid {
        field: "physics.fixed_hz",
        ..
      }
    ));
  }

  #[test]
  fn negative_move_speed_is_rejected() {
    let contents = MINIMAL.replace("collider_radius = 4.0", "collider_radius = 4.0\nmove_speed = -3.0");
    let err = GameConfig::parse(&contents).unwrap_err();
    assert!(err.to_string().contains("player.move_speed"));

    assert!(validate_move_speed(f32::NAN).is_err());
    assert!(validate_move_speed(f32::INFINITY).is_err());
    assert_eq!(validate_move_speed(2.5).unwrap(), 2.5);
  }

  #[test]
  fn missing_file_is_io_error() {
    let err = GameConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
  }
}
