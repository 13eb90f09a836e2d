//! Centralized event definitions
//!
//! Input handlers never touch the simulation directly; they emit a
//! `SimulationCommand`, which the simulation plugin applies between frames.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    TogglePause,
    Reset,
    ClearTrail,
    #[cfg(not(target_arch = "wasm32"))]
    Quit,
}
