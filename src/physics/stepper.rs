//! Fixed sub-step stepping over variable frame intervals
//!
//! A frame hands over however much wall-clock time has elapsed. That time is
//! consumed in sub-steps of at most `dt`, and at most `max_substeps_per_frame`
//! of them. Anything left over is dropped: after a long stall the simulation
//! falls behind real time instead of spending an unbounded frame catching up.

use super::integrators::{DerivativeField, Integrator};
use super::math::Scalar;
use super::state::PendulumState;
use bevy::log::debug;

/// Outcome of a single [`FixedStepper::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Number of integration sub-steps performed
    pub substeps: usize,
    /// Simulated time actually integrated
    pub simulated: Scalar,
    /// Available time discarded because the sub-step cap was reached
    pub dropped: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepper {
    /// Largest sub-step size in seconds
    pub dt: Scalar,
    pub max_substeps_per_frame: usize,
}

impl FixedStepper {
    pub const DEFAULT_SUBSTEP_RATE_HZ: Scalar = 240.0;
    pub const DEFAULT_MAX_SUBSTEPS_PER_FRAME: usize = 10;

    pub fn new(dt: Scalar, max_substeps_per_frame: usize) -> Self {
        Self {
            dt,
            max_substeps_per_frame,
        }
    }

    pub fn from_rate(substep_rate_hz: Scalar, max_substeps_per_frame: usize) -> Self {
        Self::new(1.0 / substep_rate_hz, max_substeps_per_frame)
    }

    /// Longest stretch of simulated time a single frame can cover.
    pub fn max_simulated_per_frame(&self) -> Scalar {
        self.dt * self.max_substeps_per_frame as Scalar
    }

    pub fn advance(
        &self,
        state: &mut PendulumState,
        integrator: &dyn Integrator,
        field: &dyn DerivativeField,
        available_time: Scalar,
    ) -> StepReport {
        let mut remaining = available_time;
        let mut report = StepReport::default();

        while remaining > 0.0 && report.substeps < self.max_substeps_per_frame {
            let step = remaining.min(self.dt);
            integrator.step(state, field, step);
            remaining -= step;
            report.simulated += step;
            report.substeps += 1;
        }

        if remaining > 0.0 {
            report.dropped = remaining;
            debug!(
                "Sub-step cap of {} reached; dropped {:.4}s of {:.4}s elapsed",
                self.max_substeps_per_frame, remaining, available_time
            );
        }

        report
    }
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::from_rate(
            Self::DEFAULT_SUBSTEP_RATE_HZ,
            Self::DEFAULT_MAX_SUBSTEPS_PER_FRAME,
        )
    }
}
