//! Pendulum prelude module
//!
//! This module re-exports the most commonly used types across the
//! application to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports
pub use crate::config::SimulationConfig;
pub use crate::events::SimulationCommand;
pub use crate::physics::math::{Scalar, Vector};
pub use crate::resources::Simulation;
pub use crate::states::AppState;
