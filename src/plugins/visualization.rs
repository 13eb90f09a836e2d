//! Visualization plugin - Self-contained plugin pattern
//!
//! Draws the pendulum and its trail with immediate-mode gizmos. The session
//! works in screen coordinates (origin top-left, y down) while the 2D camera
//! is centered with y up, so every point goes through [`screen_to_world`].

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::color::palettes::css;

const ROD_COLOR: Srgba = css::LIGHT_GRAY;
const PIVOT_COLOR: Srgba = css::WHITE;
const FIRST_MASS_COLOR: Srgba = css::DODGER_BLUE;
const SECOND_MASS_COLOR: Srgba = css::ORANGE_RED;
const TRAIL_COLOR: Color = Color::srgba(1.0, 0.84, 0.0, 0.6);

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK));
        app.add_systems(Startup, setup_camera);
        app.add_systems(
            Update,
            (draw_trail, draw_pendulum)
                .chain()
                .in_set(SimulationSet::Presentation),
        );
    }
}

/// Converts a screen-space point to 2D world space for a canvas of the given
/// size centered on the camera.
pub fn screen_to_world(point: Vector, canvas_size: Vec2) -> Vec2 {
    Vec2::new(
        point.x as f32 - canvas_size.x / 2.0,
        canvas_size.y / 2.0 - point.y as f32,
    )
}

fn canvas_size(config: &SimulationConfig) -> Vec2 {
    Vec2::new(
        config.rendering.window_width,
        config.rendering.window_height,
    )
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("Pendulum Camera"), Camera2d));
}

fn draw_trail(mut gizmos: Gizmos, simulation: Res<Simulation>, config: Res<SimulationConfig>) {
    let trajectory = simulation.trajectory();
    if trajectory.len() < 2 {
        return;
    }

    let size = canvas_size(&config);
    gizmos.linestrip_2d(
        trajectory
            .iter()
            .filter(|point| point.is_finite())
            .map(|&point| screen_to_world(point, size)),
        TRAIL_COLOR,
    );
}

fn draw_pendulum(mut gizmos: Gizmos, simulation: Res<Simulation>, config: Res<SimulationConfig>) {
    let size = canvas_size(&config);
    let rendering = &config.rendering;
    let pivot = screen_to_world(simulation.pivot(), size);

    gizmos.circle_2d(
        Isometry2d::from_translation(pivot),
        rendering.pivot_radius,
        PIVOT_COLOR,
    );

    if !simulation.state().is_finite() {
        return;
    }

    let tips = simulation.tip_positions();
    let first = screen_to_world(tips.first, size);
    let second = screen_to_world(tips.second, size);

    gizmos.line_2d(pivot, first, ROD_COLOR);
    gizmos.line_2d(first, second, ROD_COLOR);
    gizmos.circle_2d(
        Isometry2d::from_translation(first),
        rendering.mass_radius,
        FIRST_MASS_COLOR,
    );
    gizmos.circle_2d(
        Isometry2d::from_translation(second),
        rendering.mass_radius,
        SECOND_MASS_COLOR,
    );
}
