use craftsim::simulation::states::{SimulationState, NVec2};
use craftsim::simulation::params::Parameters;
use craftsim::simulation::controls::Controls;
use craftsim::simulation::integrator::{step, wrap_axis};
use craftsim::simulation::scenario::Scenario;
use craftsim::configuration::config::ScenarioConfig;

/// Parameters matching the reference scenario (600x600 plane)
pub fn test_params() -> Parameters {
    Parameters {
        width: 600.0,
        height: 600.0,
        speed_scale: 1.0,
        heading_max: 180.0,
        speed_max: 3000.0,
        heading_step: 1.0,
        speed_step: 10.0,
    }
}

/// Fresh state at the given start point with the time baseline already
/// primed at t = 0 ms
pub fn primed_state(x: f64, y: f64) -> SimulationState {
    let mut state = SimulationState::new(NVec2::new(x, y));
    step(&mut state, 0.0, 0.0, 0.0, &test_params());
    state
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn priming_tick_only_sets_baseline() {
    let p = test_params();
    let mut state = SimulationState::new(NVec2::new(300.0, 300.0));
    assert!(state.prev_t_ms.is_none());

    step(&mut state, 90.0, 100.0, 125.0, &p);

    assert_eq!(state.position, NVec2::new(300.0, 300.0));
    assert_eq!(state.trajectory.len(), 1);
    assert_eq!(state.prev_t_ms, Some(125.0));
}

#[test]
fn eastbound_wrap_at_right_edge() {
    // (598, 300), heading 0, speed 100, dt = 1 s: raw x' = 698, wraps to 98
    let p = test_params();
    let mut state = primed_state(598.0, 300.0);

    step(&mut state, 0.0, 100.0, 1000.0, &p);

    assert!((state.position.x - 98.0).abs() < 1e-9, "x = {}", state.position.x);
    assert!((state.position.y - 300.0).abs() < 1e-9, "y = {}", state.position.y);
}

#[test]
fn westbound_wrap_at_left_edge() {
    // (2, 300), heading 180, speed 100, dt = 1 s: raw x' = -98, wraps to 502
    let p = test_params();
    let mut state = primed_state(2.0, 300.0);

    step(&mut state, 180.0, 100.0, 1000.0, &p);

    assert!((state.position.x - 502.0).abs() < 1e-9, "x = {}", state.position.x);
    assert!((state.position.y - 300.0).abs() < 1e-9, "y = {}", state.position.y);
}

#[test]
fn heading_90_moves_along_y_only() {
    // heading 90, speed 50, dt = 2 s from (300, 300): dy = 100, dx ~ 0
    let p = test_params();
    let mut state = primed_state(300.0, 300.0);

    step(&mut state, 90.0, 50.0, 2000.0, &p);

    assert!((state.position.x - 300.0).abs() < 1e-9, "x = {}", state.position.x);
    assert!((state.position.y - 400.0).abs() < 1e-9, "y = {}", state.position.y);
}

#[test]
fn zero_speed_holds_position_but_grows_trajectory() {
    let p = test_params();
    let mut state = primed_state(300.0, 300.0);

    for i in 1..=5 {
        step(&mut state, 45.0, 0.0, i as f64 * 1000.0, &p);
        assert_eq!(state.position, NVec2::new(300.0, 300.0));
    }

    // one duplicate point appended per tick
    assert_eq!(state.trajectory.len(), 6);
    assert_eq!(*state.trajectory.last().unwrap(), state.position);
}

#[test]
fn trajectory_grows_by_one_per_tick_and_tracks_position() {
    let p = test_params();
    let mut state = primed_state(300.0, 300.0);

    let headings = [0.0, 30.0, 90.0, 135.0, 180.0];
    for (i, h) in headings.iter().enumerate() {
        let before = state.trajectory.len();
        step(&mut state, *h, 100.0, (i as f64 + 1.0) * 16.0, &p);

        assert_eq!(state.trajectory.len(), before + 1);
        assert!(!state.trajectory.is_empty());
        assert_eq!(*state.trajectory.last().unwrap(), state.position);
    }
}

#[test]
fn step_is_deterministic() {
    let p = test_params();
    let mut a = primed_state(123.0, 456.0);
    let mut b = primed_state(123.0, 456.0);

    for i in 1..=10 {
        let t_ms = i as f64 * 17.0;
        step(&mut a, 42.0, 250.0, t_ms, &p);
        step(&mut b, 42.0, 250.0, t_ms, &p);
    }

    assert_eq!(a.position, b.position);
    assert_eq!(a.trajectory, b.trajectory);
}

#[test]
fn step_accepts_arbitrary_finite_inputs() {
    // Out-of-range heading and huge speed: no panic, finite result
    let p = test_params();
    let mut state = primed_state(300.0, 300.0);

    step(&mut state, -720.0, 1.0e6, 1000.0, &p);

    assert!(state.position.x.is_finite());
    assert!(state.position.y.is_finite());
    assert_eq!(state.trajectory.len(), 2);
}

// ==================================================================================
// Wrap tests
// ==================================================================================

#[test]
fn wrap_in_range_is_identity() {
    assert_eq!(wrap_axis(0.0, 600.0), 0.0);
    assert_eq!(wrap_axis(300.0, 600.0), 300.0);
    assert_eq!(wrap_axis(600.0, 600.0), 600.0);
}

#[test]
fn wrap_corrects_one_overflow_per_axis() {
    assert!((wrap_axis(698.0, 600.0) - 98.0).abs() < 1e-12);
    assert!((wrap_axis(-98.0, 600.0) - 502.0).abs() < 1e-12);
}

#[test]
fn wrap_is_single_pass_for_oversized_displacement() {
    // A displacement beyond one full plane dimension gets exactly one
    // correction and stays out of range: documented behavior, not a bug
    assert_eq!(wrap_axis(1300.0, 600.0), 700.0);
    assert_eq!(wrap_axis(-700.0, 600.0), -100.0);
}

// ==================================================================================
// State / controls tests
// ==================================================================================

#[test]
fn trajectory_is_seeded_with_initial_position() {
    let state = SimulationState::new(NVec2::new(10.0, 20.0));

    assert_eq!(state.trajectory.len(), 1);
    assert_eq!(state.trajectory[0], state.position);
    assert!(state.prev_t_ms.is_none());
}

#[test]
fn controls_reflect_latest_write() {
    let mut controls = Controls {
        heading_deg: 0.0,
        speed: 100.0,
    };

    controls.set_heading(135.0);
    controls.set_speed(2500.0);

    assert_eq!(controls.heading_deg, 135.0);
    assert_eq!(controls.speed, 2500.0);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn build_scenario_from_yaml() {
    let yaml = "
plane:
  width: 600.0
  height: 600.0
craft:
  x: 300.0
  y: 300.0
  heading: 0.0
  speed: 100.0
controls:
  heading_max: 180.0
  speed_max: 3000.0
  heading_step: 1.0
  speed_step: 10.0
";

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("scenario yaml should parse");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.parameters.width, 600.0);
    assert_eq!(scenario.parameters.height, 600.0);
    // speed_scale omitted in the yaml: defaults to 1.0
    assert_eq!(scenario.parameters.speed_scale, 1.0);

    assert_eq!(scenario.state.position, NVec2::new(300.0, 300.0));
    assert_eq!(scenario.state.trajectory.len(), 1);
    assert!(scenario.state.prev_t_ms.is_none());

    assert_eq!(scenario.controls.heading_deg, 0.0);
    assert_eq!(scenario.controls.speed, 100.0);
}

#[test]
fn built_scenario_runs_the_boundary_case() {
    // End to end: config -> scenario -> priming tick -> wrapped step
    let yaml = "
plane:
  width: 600.0
  height: 600.0
craft:
  x: 598.0
  y: 300.0
  heading: 0.0
  speed: 100.0
controls:
  heading_max: 180.0
  speed_max: 3000.0
  heading_step: 1.0
  speed_step: 10.0
  speed_scale: 1.0
";

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("scenario yaml should parse");
    let mut scenario = Scenario::build_scenario(cfg);

    let Scenario {
        parameters,
        state,
        controls,
    } = &mut scenario;

    step(state, controls.heading_deg, controls.speed, 0.0, parameters);
    step(state, controls.heading_deg, controls.speed, 1000.0, parameters);

    assert!((state.position.x - 98.0).abs() < 1e-9);
    assert!((state.position.y - 300.0).abs() < 1e-9);
    assert_eq!(state.trajectory.len(), 2);
}
