//! Test utilities for plugin testing

use crate::prelude::*;

/// Creates a minimal headless app with the plugins the simulation needs
///
/// Keyboard state is a bare resource rather than `InputPlugin`, so pressed
/// keys are not cleared before `Update` runs.
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_event::<SimulationCommand>();

    app
}

/// Helper to simulate a fresh key press for the next update
pub fn press_key(app: &mut App, key: KeyCode) {
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.reset_all();
    keys.press(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();

        assert!(app.world().contains_resource::<Time>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
    }

    #[test]
    fn test_press_key() {
        let mut app = create_test_app();

        press_key(&mut app, KeyCode::Space);
        press_key(&mut app, KeyCode::KeyR);

        let input = app.world().resource::<ButtonInput<KeyCode>>();
        assert!(input.just_pressed(KeyCode::KeyR));
        assert!(!input.pressed(KeyCode::Space));
    }
}
