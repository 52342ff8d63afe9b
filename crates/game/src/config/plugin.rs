#[cfg(not(target_family = "wasm"))]
use bevy::{asset::AssetEvent, ecs::message::MessageReader};
use bevy::{camera::ScalingMode, prelude::*, window::PrimaryWindow};
#[cfg(not(target_family = "wasm"))]
use bevy_common_assets::toml::TomlAssetPlugin;

#[cfg(not(target_family = "wasm"))]
use super::ConfigHandle;
use super::{ConfigLoaded, GameConfig};
use crate::player::MovementController;
use crate::player::components::MoveSpeedOverride;

/// Installs the parsed config as `ConfigLoaded` and keeps the running game in
/// sync with it.
pub struct ConfigPlugin {
  pub config: GameConfig,
  /// Path below `assets/` to watch for edits. `None` disables hot-reload.
  pub asset_path: Option<String>,
}

#[derive(Resource)]
struct ConfigAssetPath(String);

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    app.insert_resource(ConfigLoaded::from(self.config.clone()));

    // Native: asset-based config with hot-reload
    #[cfg(not(target_family = "wasm"))]
    if let Some(path) = &self.asset_path {
      app
        .insert_resource(ConfigAssetPath(path.clone()))
        .add_plugins(TomlAssetPlugin::<GameConfig>::new(&["config.toml"]))
        .add_systems(PreStartup, watch_config_asset)
        .add_systems(Update, watch_config_changes);
    }

    app.add_systems(
      Update,
      (
        update_window_on_config_change,
        update_fixed_rate_on_config_change,
        update_move_speed_on_config_change,
        update_camera_on_config_change,
      ),
    );
  }
}

#[cfg(not(target_family = "wasm"))]
fn watch_config_asset(
  mut commands: Commands,
  asset_server: Res<AssetServer>,
  path: Res<ConfigAssetPath>,
) {
  let handle: Handle<GameConfig> = asset_server.load(path.0.clone());
  commands.insert_resource(ConfigHandle(handle));
}

#[cfg(not(target_family = "wasm"))]
fn watch_config_changes(
  mut commands: Commands,
  config_handle: Option<Res<ConfigHandle>>,
  mut messages: MessageReader<AssetEvent<GameConfig>>,
  configs: Res<Assets<GameConfig>>,
) {
  let Some(config_handle) = config_handle else {
    return;
  };
  for event in messages.read() {
    if let AssetEvent::Modified { id } = event {
      if config_handle.0.id() == *id {
        if let Some(config) = configs.get(&config_handle.0) {
          if let Err(e) = config.validate() {
            warn!("Ignoring config reload: {e}");
            continue;
          }
          info!("Config reloaded!");
          commands.insert_resource(ConfigLoaded::from(config.clone()));
        }
      }
    }
  }
}

fn update_window_on_config_change(
  config: Res<ConfigLoaded>,
  mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
  if config.is_changed() {
    if let Ok(mut window) = windows.single_mut() {
      window
        .resolution
        .set(config.window.width as f32, config.window.height as f32);
      window.title.clone_from(&config.window.title);
    }
  }
}

fn update_fixed_rate_on_config_change(config: Res<ConfigLoaded>, mut time: ResMut<Time<Fixed>>) {
  if config.is_changed() && config.physics.fixed_hz > 0.0 {
    time.set_timestep_hz(config.physics.fixed_hz);
  }
}

/// Pushes a reloaded `[player] move_speed` into controllers that follow the
/// config. The initial insert is skipped so spawn-time speeds stay put.
pub(crate) fn update_move_speed_on_config_change(
  config: Res<ConfigLoaded>,
  mut last_speed: Local<Option<f32>>,
  mut controllers: Query<&mut MovementController, Without<MoveSpeedOverride>>,
) {
  if !config.is_changed() {
    return;
  }
  let speed = config.player.move_speed;
  let previous = last_speed.replace(speed);
  if config.is_added() || previous.is_none_or(|p| p == speed) {
    return;
  }

  debug!("Move speed {:?} -> {}", previous, speed);
  for mut controller in &mut controllers {
    controller.move_speed = speed;
  }
}

fn update_camera_on_config_change(
  config: Res<ConfigLoaded>,
  mut camera_query: Query<&mut Projection, With<Camera2d>>,
) {
  if config.is_changed() {
    for mut projection in camera_query.iter_mut() {
      if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scaling_mode = ScalingMode::AutoMin {
          min_width: config.camera.viewport_width,
          min_height: config.camera.viewport_height,
        };
      }
    }
  }
}
