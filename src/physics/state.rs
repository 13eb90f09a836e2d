//! Phase-space state of the double pendulum and its time derivative

use super::math::{Scalar, degrees_to_radians};
use std::ops::{Add, Mul};

/// Instantaneous configuration of both rods.
///
/// Angles are measured from the downward vertical in radians and are never
/// wrapped; they accumulate as the pendulum spins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendulumState {
    pub theta1: Scalar,
    pub omega1: Scalar,
    pub theta2: Scalar,
    pub omega2: Scalar,
}

impl PendulumState {
    pub const fn new(theta1: Scalar, omega1: Scalar, theta2: Scalar, omega2: Scalar) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    /// At rest with both rods at the given angles (in degrees).
    pub fn at_rest_degrees(theta1_degrees: Scalar, theta2_degrees: Scalar) -> Self {
        Self::new(
            degrees_to_radians(theta1_degrees),
            0.0,
            degrees_to_radians(theta2_degrees),
            0.0,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.omega1.is_finite()
            && self.theta2.is_finite()
            && self.omega2.is_finite()
    }

    /// Euler update `self + derivative * h`, the building block of every stage.
    #[inline]
    pub fn advanced_by(&self, derivative: Derivative, h: Scalar) -> Self {
        *self + derivative * h
    }
}

/// Time-rate-of-change of a [`PendulumState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Derivative {
    pub dtheta1: Scalar,
    pub alpha1: Scalar,
    pub dtheta2: Scalar,
    pub alpha2: Scalar,
}

impl Derivative {
    pub const fn new(dtheta1: Scalar, alpha1: Scalar, dtheta2: Scalar, alpha2: Scalar) -> Self {
        Self {
            dtheta1,
            alpha1,
            dtheta2,
            alpha2,
        }
    }
}

impl Add for Derivative {
    type Output = Derivative;

    fn add(self, rhs: Derivative) -> Derivative {
        Derivative::new(
            self.dtheta1 + rhs.dtheta1,
            self.alpha1 + rhs.alpha1,
            self.dtheta2 + rhs.dtheta2,
            self.alpha2 + rhs.alpha2,
        )
    }
}

impl Mul<Scalar> for Derivative {
    type Output = Derivative;

    fn mul(self, rhs: Scalar) -> Derivative {
        Derivative::new(
            self.dtheta1 * rhs,
            self.alpha1 * rhs,
            self.dtheta2 * rhs,
            self.alpha2 * rhs,
        )
    }
}

impl Add<Derivative> for PendulumState {
    type Output = PendulumState;

    fn add(self, rhs: Derivative) -> PendulumState {
        PendulumState::new(
            self.theta1 + rhs.dtheta1,
            self.omega1 + rhs.alpha1,
            self.theta2 + rhs.dtheta2,
            self.omega2 + rhs.alpha2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::PI;

    #[test]
    fn test_at_rest_degrees() {
        let state = PendulumState::at_rest_degrees(120.0, -10.0);

        assert_eq!(state.theta1, 120.0 * PI / 180.0);
        assert_eq!(state.theta2, -10.0 * PI / 180.0);
        assert_eq!(state.omega1, 0.0);
        assert_eq!(state.omega2, 0.0);
    }

    #[test]
    fn test_advanced_by_is_componentwise() {
        let state = PendulumState::new(1.0, 2.0, 3.0, 4.0);
        let derivative = Derivative::new(0.5, -1.0, 2.0, 0.0);

        let next = state.advanced_by(derivative, 2.0);

        assert_eq!(next, PendulumState::new(2.0, 0.0, 7.0, 4.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(PendulumState::new(1.0, 0.0, -1.0, 0.0).is_finite());
        assert!(!PendulumState::new(Scalar::NAN, 0.0, 0.0, 0.0).is_finite());
        assert!(!PendulumState::new(0.0, 0.0, 0.0, Scalar::INFINITY).is_finite());
    }
}
