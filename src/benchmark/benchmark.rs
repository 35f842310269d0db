use std::time::Instant;
use crate::simulation::states::{SimulationState, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::integrator::step;

/// Time `step` throughput as the trajectory grows
///
/// The trajectory is append-only and never pruned, so this doubles as a check
/// that per-step cost stays flat while memory grows linearly
pub fn bench_step() {
    // Tick counts to run, at ~60 fps cadence
    let ns = [1_000, 10_000, 100_000, 1_000_000];

    for n in ns {
        let parameters = Parameters {
            width: 600.0,
            height: 600.0,
            speed_scale: 1.0,
            heading_max: 180.0,
            speed_max: 3000.0,
            heading_step: 1.0,
            speed_step: 10.0,
        };

        let mut state = SimulationState::new(NVec2::new(300.0, 300.0));

        // Priming tick to establish the baseline
        step(&mut state, 45.0, 100.0, 0.0, &parameters);

        let t0 = Instant::now();
        for i in 0..n {
            // deterministic timestamps, no clock needed
            let t_ms = (i as f64 + 1.0) * 16.0;
            step(&mut state, 45.0, 100.0, t_ms, &parameters);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, total = {dt:8.6} s, {:8.1} ns/step, trajectory = {}",
            dt * 1e9 / n as f64,
            state.trajectory.len(),
        );
    }
}
