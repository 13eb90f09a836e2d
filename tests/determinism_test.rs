//! Session-level behavior: repeatable stepping, exact reset, the per-frame
//! sub-step cap, and the bounded trail.

use pendulum::PendulumSession;
use pendulum::SimulationConfig;
use pendulum::physics::math::Scalar;

fn frame_times(frames: usize) -> impl Iterator<Item = Scalar> {
    // Uneven frame pacing, including a stall
    (0..frames).map(|i| {
        let jitter = if i % 7 == 0 { 0.004 } else { 0.0 };
        let stall = if i == 50 { 0.5 } else { 0.0 };
        i as Scalar / 60.0 + jitter + stall
    })
}

#[test]
fn test_identical_sessions_stay_identical() {
    let mut first = PendulumSession::default();
    let mut second = PendulumSession::default();

    for now in frame_times(600) {
        first.frame(now);
        second.frame(now);
    }

    assert_eq!(first.state(), second.state());
    assert_eq!(first.simulated_time(), second.simulated_time());
    assert!(first.trajectory().iter().eq(second.trajectory().iter()));
}

#[test]
fn test_reset_then_replay_reproduces_trajectory() {
    let mut session = PendulumSession::default();
    let elapsed: Vec<Scalar> = (0..200).map(|i| 0.01 + (i % 3) as Scalar * 0.005).collect();

    for &dt in &elapsed {
        session.step(dt);
    }
    let first_run = *session.state();

    session.reset();
    assert_eq!(session.state(), session.initial_state());

    for &dt in &elapsed {
        session.step(dt);
    }

    assert_eq!(*session.state(), first_run);
}

#[test]
fn test_long_stall_is_capped_at_ten_substeps() {
    let mut session = PendulumSession::default();

    let report = session.step(5.0);

    assert_eq!(report.substeps, 10);
    assert!((report.simulated - 10.0 / 240.0).abs() < 1e-12);
    assert!((session.simulated_time() - 10.0 / 240.0).abs() < 1e-12);
    assert!(report.dropped > 4.9);
}

#[test]
fn test_trail_is_bounded() {
    let mut config = SimulationConfig::default();
    config.trails.max_points = 100;
    let mut session = PendulumSession::from_config(&config);

    for _ in 0..250 {
        session.step(1.0 / 120.0);
    }

    assert_eq!(session.trajectory().len(), 100);
    assert_eq!(
        session.trajectory().newest(),
        Some(&session.tip_positions().second)
    );
}

#[test]
fn test_trail_points_follow_lower_mass() {
    let mut session = PendulumSession::default();
    let rod_lengths = session.parameters().length1 + session.parameters().length2;

    for _ in 0..300 {
        session.step(1.0 / 60.0);
    }

    for point in session.trajectory().iter() {
        assert!((*point - session.pivot()).length() <= rod_lengths + 1e-9);
    }
}
