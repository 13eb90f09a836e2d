//! Action handlers for simulation commands
//!
//! Commands are applied between frames, so the session is never mutated
//! halfway through an advance.

use crate::prelude::*;

pub fn apply_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<Simulation>,
    mut next_state: ResMut<NextState<AppState>>,
    #[cfg(not(target_arch = "wasm32"))] mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        match command {
            SimulationCommand::TogglePause => {
                if simulation.toggle_running() {
                    info!("Simulation resumed");
                    next_state.set(AppState::Running);
                } else {
                    info!("Simulation paused");
                    next_state.set(AppState::Paused);
                }
            }
            SimulationCommand::Reset => {
                simulation.reset();
                info!("Simulation reset to initial condition");
            }
            SimulationCommand::ClearTrail => {
                simulation.clear_trail();
                debug!("Trail cleared");
            }
            #[cfg(not(target_arch = "wasm32"))]
            SimulationCommand::Quit => {
                exit.write_default();
            }
        }
    }
}
