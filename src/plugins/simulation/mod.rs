//! Simulation plugin - Self-contained plugin pattern
//!
//! This plugin owns the pendulum session. It loads the configuration, applies
//! `SimulationCommand` events, and advances the session once per rendered
//! frame using wall-clock time.

use crate::prelude::*;

mod actions;

use actions::apply_simulation_commands;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Commands,
    Advance,
    Presentation,
}

#[derive(Default)]
pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
    start_paused: bool,
}

impl SimulationPlugin {
    /// Plugin that reads the per-user configuration file at build time
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn start_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let mut simulation = Simulation::from_config(&config);
        info!(
            "Double pendulum: {} at {:.0} Hz sub-steps, damping {}",
            simulation.integrator().name(),
            1.0 / simulation.stepper().dt,
            simulation.dynamics().damping
        );

        if self.start_paused {
            simulation.pause();
            app.insert_state(AppState::Paused);
        } else {
            app.init_state::<AppState>();
        }

        app.insert_resource(config);
        app.insert_resource(simulation);
        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Commands,
                SimulationSet::Advance,
                SimulationSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                apply_simulation_commands.in_set(SimulationSet::Commands),
                advance_simulation
                    .in_set(SimulationSet::Advance)
                    .run_if(in_state(AppState::Running)),
            ),
        );
    }
}

/// Advances the session by the wall-clock time since the previous frame
pub fn advance_simulation(mut simulation: ResMut<Simulation>, time: Res<Time<Real>>) {
    simulation.frame(time.elapsed_secs_f64());
}
