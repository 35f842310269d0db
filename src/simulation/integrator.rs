//! Time-delta kinematic integrator for the craft
//!
//! Advances `SimulationState` by exactly one tick from a monotonic
//! millisecond timestamp and the live heading/speed inputs, wrapping the
//! position toroidally at the plane edges and appending to the trajectory

use super::states::{SimulationState, NVec2};
use super::params::Parameters;

use std::f64::consts::PI;

/// Single-pass toroidal correction for one axis
///
/// `v > bound` re-enters from below, `v < 0` re-enters from above, in-range
/// values pass through unchanged. At most one correction is applied: a
/// displacement exceeding a full plane dimension in one tick lands out of
/// range. That limitation is kept on purpose, since typical `dt` is one frame
/// interval and looping the wrap would alter observable trajectories.
pub fn wrap_axis(v: f64, bound: f64) -> f64 {
    if v > bound {
        v - bound
    } else if v < 0.0 {
        v + bound
    } else {
        v
    }
}

/// Advance the craft by one tick at timestamp `t_ms` (milliseconds)
///
/// The first call after (re)initialization is a priming tick: it records the
/// time baseline and changes nothing else. Every later call integrates
/// position over the measured elapsed time, wraps per axis, commits the new
/// position, and appends it to the trajectory.
///
/// Deterministic given `(prev_t_ms, t_ms, heading_deg, speed, position)`;
/// all finite inputs are accepted and NaN/infinity follow plain `f64`
/// arithmetic. Rendering is the caller's responsibility.
pub fn step(
    state: &mut SimulationState,
    heading_deg: f64,
    speed: f64,
    t_ms: f64,
    params: &Parameters,
) {
    // Priming tick: establish the time baseline only
    let Some(prev_t_ms) = state.prev_t_ms else {
        state.prev_t_ms = Some(t_ms);
        return;
    };

    // Seconds elapsed since the previous tick
    let dt = (t_ms - prev_t_ms) / 1000.0;

    // Heading in radians, measured from the +x axis
    let angle = heading_deg * PI / 180.0;

    // Raw displacement at constant velocity over dt
    let v = speed * params.speed_scale; // plane units per second
    let raw = state.position + NVec2::new(v * angle.cos() * dt, v * angle.sin() * dt);

    // Wrap around the plane edges, independently per axis
    let wrapped = NVec2::new(
        wrap_axis(raw.x, params.width),
        wrap_axis(raw.y, params.height),
    );

    // Commit the new position and extend the trajectory
    state.position = wrapped;
    state.trajectory.push(wrapped);
    state.prev_t_ms = Some(t_ms);
}
