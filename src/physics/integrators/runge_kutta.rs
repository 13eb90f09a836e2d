//! Runge-Kutta integration

use super::{DerivativeField, Integrator};
use crate::physics::math::Scalar;
use crate::physics::state::PendulumState;

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// A classic multi-stage integrator that provides fourth-order accuracy
/// by combining four intermediate evaluations of the derivative.
///
/// The RK4 algorithm:
/// 1. k1 = f(s)
/// 2. k2 = f(s + k1*dt/2)
/// 3. k3 = f(s + k2*dt/2)
/// 4. k4 = f(s + k3*dt)
/// 5. s(t+dt) = s(t) + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
///
/// All four state components are advanced together, so coupling between the
/// rods is resolved at every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaFourthOrder;

impl Integrator for RungeKuttaFourthOrder {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, state: &mut PendulumState, field: &dyn DerivativeField, dt: Scalar) {
        let half_dt = dt * 0.5;

        let k1 = field.at(state);
        let k2 = field.at(&state.advanced_by(k1, half_dt));
        let k3 = field.at(&state.advanced_by(k2, half_dt));
        let k4 = field.at(&state.advanced_by(k3, dt));

        *state = state.advanced_by(k1 + k2 * 2.0 + k3 * 2.0 + k4, dt / 6.0);
    }

    fn convergence_order(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "runge_kutta_fourth_order"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["rk4", "runge_kutta_4"]
    }
}
