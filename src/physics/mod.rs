//! Double pendulum physics: equations of motion, integrators, and stepping

pub mod dynamics;
pub mod integrators;
pub mod math;
pub mod session;
pub mod state;
pub mod stepper;
pub mod trajectory;
