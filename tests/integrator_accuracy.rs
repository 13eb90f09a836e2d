//! Accuracy tests for the pendulum integrators
//!
//! Pins a single RK4 step against independently computed values, checks
//! energy behavior of the full equations of motion, and verifies the expected
//! order of convergence for each integrator.

use pendulum::physics::dynamics::{PendulumDynamics, PhysicalParameters};
use pendulum::physics::integrators::{
    DerivativeField, ExplicitEuler, Heun, Integrator, IntegratorRegistry, RungeKuttaFourthOrder,
};
use pendulum::physics::math::Scalar;
use pendulum::physics::state::PendulumState;

const DT: Scalar = 1.0 / 240.0;

fn initial_state() -> PendulumState {
    PendulumState::at_rest_degrees(120.0, -10.0)
}

fn run(
    integrator: &dyn Integrator,
    field: &dyn DerivativeField,
    mut state: PendulumState,
    dt: Scalar,
    steps: usize,
) -> PendulumState {
    for _ in 0..steps {
        integrator.step(&mut state, field, dt);
    }
    state
}

fn max_component_error(a: &PendulumState, b: &PendulumState) -> Scalar {
    [
        a.theta1 - b.theta1,
        a.omega1 - b.omega1,
        a.theta2 - b.theta2,
        a.omega2 - b.omega2,
    ]
    .iter()
    .fold(0.0, |max, e| max.max(e.abs()))
}

#[test]
fn test_single_rk4_step_matches_reference() {
    let dynamics = PendulumDynamics::default();
    let mut state = PendulumState::new(2.0944, 0.0, -0.1745, 0.0);

    RungeKuttaFourthOrder.step(&mut state, &dynamics, DT);

    let expected = PendulumState::new(
        2.0943992754112983,
        -0.00034783734963068403,
        -0.17450034254930613,
        -0.0001644400035497346,
    );
    assert!(
        max_component_error(&state, &expected) < 1e-9,
        "got {state:?}, expected {expected:?}"
    );
}

#[test]
fn test_undamped_energy_is_conserved() {
    let parameters = PhysicalParameters::default();
    let dynamics = PendulumDynamics::undamped(parameters);
    let mut state = initial_state();
    let initial_energy = parameters.total_energy(&state);

    assert!((initial_energy - 17.884313154028177).abs() < 1e-9);

    for _ in 0..480 {
        RungeKuttaFourthOrder.step(&mut state, &dynamics, DT);
        let drift = (parameters.total_energy(&state) - initial_energy).abs() / initial_energy.abs();
        assert!(drift < 1e-9, "relative energy drift {drift}");
    }
}

#[test]
fn test_damped_energy_stays_bounded_and_departs_from_undamped() {
    let parameters = PhysicalParameters::default();
    let damped = PendulumDynamics::default();
    let undamped = PendulumDynamics::undamped(parameters);
    let initial_energy = parameters.total_energy(&initial_state());

    let mut state = initial_state();
    for _ in 0..240 * 10 {
        RungeKuttaFourthOrder.step(&mut state, &damped, DT);
        let relative = (parameters.total_energy(&state) - initial_energy) / initial_energy;
        assert!(relative.abs() < 0.1, "relative energy change {relative}");
    }

    let reference = run(&RungeKuttaFourthOrder, &undamped, initial_state(), DT, 240 * 10);
    let separation =
        (parameters.total_energy(&state) - parameters.total_energy(&reference)).abs() / initial_energy;
    assert!(separation > 1e-3, "damping had no visible effect: {separation}");
}

#[test]
fn test_order_of_convergence() {
    let dynamics = PendulumDynamics::undamped(PhysicalParameters::default());
    let duration = 4.0;
    let reference = run(
        &RungeKuttaFourthOrder,
        &dynamics,
        initial_state(),
        duration / 4096.0,
        4096,
    );

    let cases: [(&dyn Integrator, Scalar); 3] = [
        (&RungeKuttaFourthOrder, 12.0),
        (&Heun, 3.5),
        (&ExplicitEuler, 1.8),
    ];

    for (integrator, minimum_ratio) in cases {
        let coarse = run(integrator, &dynamics, initial_state(), duration / 16.0, 16);
        let fine = run(integrator, &dynamics, initial_state(), duration / 32.0, 32);
        let ratio = max_component_error(&coarse, &reference) / max_component_error(&fine, &reference);

        assert!(
            ratio > minimum_ratio,
            "{} error ratio {ratio} (expected about 2^{})",
            integrator.name(),
            integrator.convergence_order()
        );
    }
}

#[test]
fn test_registry_integrators_agree_at_small_steps() {
    let registry = IntegratorRegistry::default();
    let dynamics = PendulumDynamics::default();
    let reference = run(&RungeKuttaFourthOrder, &dynamics, initial_state(), DT, 24);

    for name in registry.list_available() {
        let integrator = registry.create(&name).unwrap();
        let state = run(integrator.as_ref(), &dynamics, initial_state(), DT / 10.0, 240);

        assert!(
            max_component_error(&state, &reference) < 1e-3,
            "{name} diverged: {state:?}"
        );
    }
}
