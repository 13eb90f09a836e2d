//! The simulation session: pendulum state, trail, and run/pause control
//!
//! A session is an ordinary value owned by whoever drives it. The frame
//! driver calls [`PendulumSession::frame`] once per display refresh; input
//! handling calls the control methods between frames.

use super::dynamics::{PendulumDynamics, PhysicalParameters, TipPositions};
use super::integrators::{Integrator, IntegratorRegistry, RungeKuttaFourthOrder};
use super::math::{Scalar, Vector};
use super::state::PendulumState;
use super::stepper::{FixedStepper, StepReport};
use super::trajectory::TrajectoryBuffer;
use crate::config::SimulationConfig;
use bevy::log::{debug, warn};

/// Last-frame-time marker used to turn timestamps into elapsed intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: Option<Scalar>,
}

impl FrameClock {
    /// Elapsed seconds since the previous tick; zero on the first tick after
    /// a reset, and never negative.
    pub fn tick(&mut self, now: Scalar) -> Scalar {
        let elapsed = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub struct PendulumSession {
    dynamics: PendulumDynamics,
    integrator: Box<dyn Integrator>,
    stepper: FixedStepper,
    pivot: Vector,
    initial_state: PendulumState,
    state: PendulumState,
    trajectory: TrajectoryBuffer,
    running: bool,
    clock: FrameClock,
    simulated_time: Scalar,
    reported_non_finite: bool,
}

impl PendulumSession {
    pub fn new(
        dynamics: PendulumDynamics,
        integrator: Box<dyn Integrator>,
        stepper: FixedStepper,
        initial_state: PendulumState,
        pivot: Vector,
        trail_capacity: usize,
    ) -> Self {
        Self {
            dynamics,
            integrator,
            stepper,
            pivot,
            initial_state,
            state: initial_state,
            trajectory: TrajectoryBuffer::with_capacity(trail_capacity),
            running: true,
            clock: FrameClock::default(),
            simulated_time: 0.0,
            reported_non_finite: false,
        }
    }

    /// Build a session from configuration.
    ///
    /// An unknown integrator name falls back to RK4 with a warning.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let registry = IntegratorRegistry::default();
        let integrator = registry
            .create(&config.integrator.integrator_type)
            .unwrap_or_else(|e| {
                warn!("{e}. Falling back to runge_kutta_fourth_order");
                Box::new(RungeKuttaFourthOrder)
            });

        let trail_capacity = if config.trails.enabled {
            config.trails.max_points
        } else {
            0
        };

        Self::new(
            config.physics.dynamics(),
            integrator,
            config.integrator.stepper(),
            config.physics.initial_state(),
            config.rendering.pivot(),
            trail_capacity,
        )
    }

    /// Advance by `elapsed` seconds of wall-clock time and record the new
    /// position of the lower mass.
    ///
    /// A point is recorded even when `elapsed` is zero.
    pub fn step(&mut self, elapsed: Scalar) -> StepReport {
        let report = self.stepper.advance(
            &mut self.state,
            self.integrator.as_ref(),
            &self.dynamics,
            elapsed,
        );
        self.simulated_time += report.simulated;

        if !self.reported_non_finite && !self.state.is_finite() {
            self.reported_non_finite = true;
            warn!(
                "Pendulum state became non-finite after {:.3}s simulated: {:?}",
                self.simulated_time, self.state
            );
        }

        let tips = self.tip_positions();
        self.trajectory.push(tips.second);

        report
    }

    /// Per-frame entry point: converts a timestamp to elapsed time and steps,
    /// unless paused.
    pub fn frame(&mut self, now: Scalar) -> Option<StepReport> {
        if !self.running {
            return None;
        }

        let elapsed = self.clock.tick(now);
        Some(self.step(elapsed))
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume stepping; the next frame integrates zero elapsed time so the
    /// pause itself is never simulated.
    pub fn resume(&mut self) {
        self.running = true;
        self.clock.reset();
    }

    /// Returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }

        debug!("Simulation running: {}", self.running);
        self.running
    }

    /// Return to the initial condition and empty the trail.
    pub fn reset(&mut self) {
        self.state = self.initial_state;
        self.trajectory.clear();
        self.simulated_time = 0.0;
        self.reported_non_finite = false;
    }

    pub fn clear_trail(&mut self) {
        self.trajectory.clear();
    }

    pub fn tip_positions(&self) -> TipPositions {
        self.dynamics
            .parameters
            .tip_positions(&self.state, self.pivot)
    }

    pub fn total_energy(&self) -> Scalar {
        self.dynamics.parameters.total_energy(&self.state)
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn initial_state(&self) -> &PendulumState {
        &self.initial_state
    }

    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pivot(&self) -> Vector {
        self.pivot
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.dynamics.parameters
    }

    pub fn dynamics(&self) -> &PendulumDynamics {
        &self.dynamics
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    pub fn stepper(&self) -> &FixedStepper {
        &self.stepper
    }

    /// Total simulated time since creation or the last reset
    pub fn simulated_time(&self) -> Scalar {
        self.simulated_time
    }
}

impl Default for PendulumSession {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl std::fmt::Debug for PendulumSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendulumSession")
            .field("integrator", &self.integrator.name())
            .field("state", &self.state)
            .field("trail_points", &self.trajectory.len())
            .field("running", &self.running)
            .field("simulated_time", &self.simulated_time)
            .finish()
    }
}
