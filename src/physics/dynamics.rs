//! Equations of motion for the double pendulum
//!
//! The accelerations are the standard Lagrangian result for two point masses
//! on massless rigid rods, with angles measured from the downward vertical.
//!
//! The damping factor multiplies only the angular-velocity components of the
//! derivative (`dtheta`). The accelerations are left untouched, so this is not
//! a physical drag torque: it slows the rate at which angles follow their
//! velocities. Over many RK4 evaluations this distorts the trajectory rather
//! than draining energy monotonically; `tests/integrator_accuracy.rs`
//! characterizes the effect.
//!
//! The shared denominator `2·m1 + m2 − m2·cos(2θ1 − 2θ2)` can only vanish
//! when `2·m1 + m2 ≤ m2`, which positive masses never satisfy. Nothing is
//! guarded here: non-finite values propagate to the caller unchanged.

use super::integrators::DerivativeField;
use super::math::{Scalar, Vector};
use super::state::{Derivative, PendulumState};
use serde::{Deserialize, Serialize};

/// Fixed physical constants of a pendulum, immutable for a session.
///
/// Values are not validated; non-positive lengths or masses produce
/// meaningless trajectories rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Gravitational acceleration
    pub gravity: Scalar,
    /// Length of the upper rod
    pub length1: Scalar,
    /// Length of the lower rod
    pub length2: Scalar,
    /// Mass at the end of the upper rod
    pub mass1: Scalar,
    /// Mass at the end of the lower rod
    pub mass2: Scalar,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            length1: 120.0,
            length2: 120.0,
            mass1: 1.0,
            mass2: 1.0,
        }
    }
}

/// Screen-space positions of both mass points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipPositions {
    pub first: Vector,
    pub second: Vector,
}

impl PhysicalParameters {
    /// Positions of both rod tips relative to `pivot`, with y pointing down.
    pub fn tip_positions(&self, state: &PendulumState, pivot: Vector) -> TipPositions {
        let first = pivot
            + Vector::new(
                self.length1 * libm::sin(state.theta1),
                self.length1 * libm::cos(state.theta1),
            );
        let second = first
            + Vector::new(
                self.length2 * libm::sin(state.theta2),
                self.length2 * libm::cos(state.theta2),
            );

        TipPositions { first, second }
    }

    /// Total mechanical energy, with potential measured from the pivot
    /// (height increases downward, so hanging at rest is the minimum).
    pub fn total_energy(&self, state: &PendulumState) -> Scalar {
        self.kinetic_energy(state) + self.potential_energy(state)
    }

    pub fn kinetic_energy(&self, state: &PendulumState) -> Scalar {
        let PendulumState {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;
        let (l1, l2, m1, m2) = (self.length1, self.length2, self.mass1, self.mass2);

        0.5 * m1 * l1 * l1 * omega1 * omega1
            + 0.5
                * m2
                * (l1 * l1 * omega1 * omega1
                    + l2 * l2 * omega2 * omega2
                    + 2.0 * l1 * l2 * omega1 * omega2 * libm::cos(theta1 - theta2))
    }

    pub fn potential_energy(&self, state: &PendulumState) -> Scalar {
        let g = self.gravity;

        -(self.mass1 + self.mass2) * g * self.length1 * libm::cos(state.theta1)
            - self.mass2 * g * self.length2 * libm::cos(state.theta2)
    }
}

/// Derivative function of the pendulum: parameters plus velocity damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumDynamics {
    pub parameters: PhysicalParameters,
    /// Multiplier applied to `dtheta` on every evaluation; `1.0` disables it
    pub damping: Scalar,
}

impl PendulumDynamics {
    pub const DEFAULT_DAMPING: Scalar = 0.9999;

    pub fn new(parameters: PhysicalParameters, damping: Scalar) -> Self {
        Self {
            parameters,
            damping,
        }
    }

    pub fn undamped(parameters: PhysicalParameters) -> Self {
        Self::new(parameters, 1.0)
    }

    pub fn derivatives(&self, state: &PendulumState) -> Derivative {
        let PhysicalParameters {
            gravity: g,
            length1: l1,
            length2: l2,
            mass1: m1,
            mass2: m2,
        } = self.parameters;
        let PendulumState {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;

        let delta = theta1 - theta2;
        let sin_delta = libm::sin(delta);
        let cos_delta = libm::cos(delta);
        let shared = 2.0 * m1 + m2 - m2 * libm::cos(2.0 * theta1 - 2.0 * theta2);

        let den1 = l1 * shared;
        let den2 = l2 * shared;

        let num1 = -g * (2.0 * m1 + m2) * libm::sin(theta1);
        let num2 = -m2 * g * libm::sin(theta1 - 2.0 * theta2);
        let num3 = -2.0 * sin_delta * m2 * (omega2 * omega2 * l2 + omega1 * omega1 * l1 * cos_delta);
        let alpha1 = (num1 + num2 + num3) / den1;

        let num4 = 2.0 * sin_delta;
        let num5 = omega1 * omega1 * l1 * (m1 + m2);
        let num6 = g * (m1 + m2) * libm::cos(theta1);
        let num7 = omega2 * omega2 * l2 * m2 * cos_delta;
        let alpha2 = num4 * (num5 + num6 + num7) / den2;

        Derivative::new(omega1 * self.damping, alpha1, omega2 * self.damping, alpha2)
    }
}

impl Default for PendulumDynamics {
    fn default() -> Self {
        Self::new(PhysicalParameters::default(), Self::DEFAULT_DAMPING)
    }
}

impl DerivativeField for PendulumDynamics {
    fn at(&self, state: &PendulumState) -> Derivative {
        self.derivatives(state)
    }
}
