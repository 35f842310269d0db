//! Core state types for the craft simulation.
//!
//! Defines the plane-coordinate alias and the aggregate state:
//! - `NVec2` — 2D position/displacement vector
//! - `SimulationState` — current position, full trajectory, time baseline
//!
//! The trajectory is append-only and never pruned; it starts seeded with the
//! initial position, so it is never empty and its last element equals the
//! current position after any completed tick.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct SimulationState {
    pub position: NVec2, // current position on the plane
    pub trajectory: Vec<NVec2>, // every position visited, in visit order
    pub prev_t_ms: Option<f64>, // timestamp (ms) of the last tick, None before priming
}

impl SimulationState {
    /// State before the first tick: trajectory seeded with the initial
    /// position, no time baseline yet
    pub fn new(initial: NVec2) -> Self {
        Self {
            position: initial,
            trajectory: vec![initial],
            prev_t_ms: None,
        }
    }
}
