use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use clap::Parser;
use topdown_walker::{config, core, input, player, world};

#[derive(Parser, Debug)]
#[command(about = "Top-down walking character")]
struct Args {
  /// Game config file.
  #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
  config: PathBuf,

  /// Override `[player] move_speed` from the config file.
  #[arg(long)]
  move_speed: Option<f32>,
}

/// Asset-relative path for hot-reload, if the config lives under `assets/`.
fn asset_path(path: &Path) -> Option<String> {
  path
    .strip_prefix("assets")
    .ok()
    .map(|p| p.to_string_lossy().replace('\\', "/"))
}

fn main() -> ExitCode {
  // WASM: set up panic hook for better error messages
  #[cfg(target_family = "wasm")]
  console_error_panic_hook::set_once();

  let args = Args::parse();

  // WASM: embed config at compile time (no filesystem access)
  #[cfg(target_family = "wasm")]
  let loaded = config::GameConfig::parse(include_str!("../assets/config/game.config.toml"));
  #[cfg(not(target_family = "wasm"))]
  let loaded = config::GameConfig::load(&args.config);

  let mut config = match loaded {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{e}");
      return ExitCode::FAILURE;
    }
  };

  // A CLI override would be clobbered by the next file reload
  let watch = match args.move_speed {
    Some(speed) => match config::validate_move_speed(speed) {
      Ok(speed) => {
        config.player.move_speed = speed;
        None
      }
      Err(e) => {
        eprintln!("--move-speed: {e}");
        return ExitCode::FAILURE;
      }
    },
    None => asset_path(&args.config),
  };

  let mut app = App::new();

  app.insert_resource(Time::<Fixed>::from_hz(config.physics.fixed_hz));

  app
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            resolution: WindowResolution::new(config.window.width, config.window.height),
            title: config.window.title.clone(),
            present_mode: PresentMode::AutoVsync,
            // WASM: target canvas element
            #[cfg(target_family = "wasm")]
            canvas: Some("#bevy".to_string()),
            #[cfg(target_family = "wasm")]
            fit_canvas_to_parent: true,
            ..default()
          }),
          ..default()
        }),
    )
    .add_plugins(core::CorePlugin {
      pixels_per_meter: config.physics.pixels_per_meter,
    })
    .add_plugins(config::ConfigPlugin {
      config,
      asset_path: watch,
    })
    .add_plugins(input::InputPlugin)
    .add_plugins(player::PlayerPlugin)
    .add_plugins(world::WorldPlugin);

  match app.run() {
    AppExit::Success => ExitCode::SUCCESS,
    AppExit::Error(_) => ExitCode::FAILURE,
  }
}
