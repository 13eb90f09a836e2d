pub mod controls;
pub mod hud;
pub mod simulation;
pub mod visualization;
