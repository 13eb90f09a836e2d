//! Status line overlay showing run state, trail length, and both angles

use crate::physics::math::radians_to_degrees;
use crate::physics::session::PendulumSession;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

const HUD_FONT_SIZE_PX: f32 = 14.0;
const HUD_MARGIN_PX: f32 = 5.0;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct StatusHud;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct StatusHudValue;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(
            Update,
            refresh_status_hud_value.in_set(SimulationSet::Presentation),
        );
    }
}

/// One-line summary of the session, e.g.
/// `Running | trace points: 120 | θ1 = 118.4° | θ2 = -12.0°`
pub fn format_status(session: &PendulumSession) -> String {
    let state = session.state();

    format!(
        "{} | trace points: {} | θ1 = {:.1}° | θ2 = {:.1}°",
        if session.is_running() {
            "Running"
        } else {
            "Paused"
        },
        session.trajectory().len(),
        radians_to_degrees(state.theta1),
        radians_to_degrees(state.theta2),
    )
}

fn spawn_hud(mut commands: Commands, config: Res<SimulationConfig>) {
    commands
        .spawn((
            Name::new("Status HUD"),
            StatusHud,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(HUD_MARGIN_PX),
                left: Val::Px(HUD_MARGIN_PX),
                padding: UiRect::all(Val::Px(HUD_MARGIN_PX)),
                display: if config.rendering.show_hud {
                    Display::Flex
                } else {
                    Display::None
                },
                ..default()
            },
            BackgroundColor(Color::srgba(0.2, 0.2, 0.2, 0.75)),
            BorderRadius::all(Val::Px(HUD_MARGIN_PX)),
        ))
        .with_children(|parent| {
            parent.spawn((
                StatusHudValue,
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE_PX,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn refresh_status_hud_value(
    simulation: Res<Simulation>,
    mut text: Single<&mut Text, With<StatusHudValue>>,
) {
    text.0 = format_status(&simulation);
}
