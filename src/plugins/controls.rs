//! Controls plugin - Self-contained plugin pattern
//!
//! Translates keyboard input into `SimulationCommand` events.
//!
//! | Key            | Command       |
//! |----------------|---------------|
//! | Space          | TogglePause   |
//! | R              | Reset         |
//! | C              | ClearTrail    |
//! | Escape, Q      | Quit          |

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_input_handler.in_set(SimulationSet::Input),
        );
    }
}

/// Command bound to a key, if any
pub fn command_for_key(keycode: KeyCode) -> Option<SimulationCommand> {
    match keycode {
        KeyCode::Space => Some(SimulationCommand::TogglePause),
        KeyCode::KeyR => Some(SimulationCommand::Reset),
        KeyCode::KeyC => Some(SimulationCommand::ClearTrail),
        #[cfg(not(target_arch = "wasm32"))]
        KeyCode::Escape | KeyCode::KeyQ => Some(SimulationCommand::Quit),
        _ => None,
    }
}

/// Handles keyboard input and emits SimulationCommand events
fn keyboard_input_handler(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<SimulationCommand>,
) {
    for &keycode in keys.get_just_pressed() {
        if let Some(command) = command_for_key(keycode) {
            commands.write(command);
        }
    }
}
