use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use pendulum::cli::{self, Args};
use pendulum::prelude::SimulationConfig;
use pendulum::{ControlsPlugin, HudPlugin, SimulationPlugin, VisualizationPlugin};

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_integrators {
        cli::handle_list_integrators();
        return AppExit::Success;
    }

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(window_plugin(&config))
                .set(LogPlugin {
                    level: if args.verbose {
                        Level::DEBUG
                    } else {
                        Level::INFO
                    },
                    ..default()
                }),
        )
        .add_plugins((
            SimulationPlugin::with_config(config).start_paused(args.paused),
            ControlsPlugin,
            VisualizationPlugin,
            HudPlugin,
        ))
        .run()
}

fn window_plugin(config: &SimulationConfig) -> WindowPlugin {
    WindowPlugin {
        primary_window: Some(Window {
            title: "Double Pendulum".to_string(),
            resolution: WindowResolution::new(
                config.rendering.window_width,
                config.rendering.window_height,
            ),
            ..default()
        }),
        ..default()
    }
}
