//! Numerical integration methods for the pendulum state
//!
//! Every integrator here is a single-step method over the full
//! four-dimensional state. The derivative function is supplied per call, so
//! integrators stay stateless zero-sized types.

use crate::physics::math::Scalar;
use crate::physics::state::{Derivative, PendulumState};

pub mod explicit_euler;
pub mod heun;
pub mod registry;
pub mod runge_kutta;

pub use explicit_euler::ExplicitEuler;
pub use heun::Heun;
pub use registry::IntegratorRegistry;
pub use runge_kutta::RungeKuttaFourthOrder;

/// Time derivative of the state at an arbitrary point in phase space
///
/// Multi-stage integrators evaluate this at intermediate states, so it must
/// be a pure function of the state it is given.
pub trait DerivativeField {
    fn at(&self, state: &PendulumState) -> Derivative;
}

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Create a boxed clone of this integrator
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance the state by one step of size `dt`
    fn step(&self, state: &mut PendulumState, field: &dyn DerivativeField, dt: Scalar);

    /// Global convergence order of the method
    fn convergence_order(&self) -> usize;

    /// Canonical name used in configuration and on the command line
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        vec![]
    }
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integrator")
            .field("name", &self.name())
            .field("convergence_order", &self.convergence_order())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_fields {
    use super::*;

    /// Uniform rotation: both angles advance at constant rate, no acceleration.
    pub struct UniformRotation;

    impl DerivativeField for UniformRotation {
        fn at(&self, state: &PendulumState) -> Derivative {
            Derivative::new(state.omega1, 0.0, state.omega2, 0.0)
        }
    }

    /// Constant angular acceleration on both rods.
    pub struct ConstantAcceleration(pub Scalar);

    impl DerivativeField for ConstantAcceleration {
        fn at(&self, state: &PendulumState) -> Derivative {
            Derivative::new(state.omega1, self.0, state.omega2, self.0)
        }
    }
}
