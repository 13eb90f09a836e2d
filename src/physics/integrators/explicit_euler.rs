//! Explicit Euler integration
//!
//! The simplest first-order method. Included as a baseline: on the pendulum
//! it gains energy steadily and should not be used for long runs.

use super::{DerivativeField, Integrator};
use crate::physics::math::Scalar;
use crate::physics::state::PendulumState;

/// Explicit (forward) Euler: `s(t+dt) = s(t) + f(s(t)) * dt`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PendulumState, field: &dyn DerivativeField, dt: Scalar) {
        let derivative = field.at(state);
        *state = state.advanced_by(derivative, dt);
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler", "forward_euler"]
    }
}
