//! Pendulum library
//!
//! This provides the simulation core and the Bevy plugins of pendulum as a
//! library to enable integration testing and benchmarks.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use events::SimulationCommand;
pub use physics::{
    dynamics::{PendulumDynamics, PhysicalParameters},
    session::PendulumSession,
    state::{Derivative, PendulumState},
};
pub use plugins::{
    controls::ControlsPlugin, hud::HudPlugin, simulation::SimulationPlugin,
    visualization::VisualizationPlugin,
};
pub use states::AppState;
