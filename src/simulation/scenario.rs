//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - simulation state (`SimulationState` with the trajectory seeded)
//! - live operator inputs (`Controls`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, tick, and render systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Parameters;
use crate::simulation::states::{SimulationState, NVec2};
use crate::simulation::controls::Controls;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the single owner of the simulation's mutable state: the control
/// surface writes `controls`, the integrator mutates `state`, and the
/// renderer reads both. No other copy of this state exists.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub state: SimulationState,
    pub controls: Controls,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from the plane and controls sections
        let c_cfg = cfg.controls;
        let parameters = Parameters {
            width: cfg.plane.width,
            height: cfg.plane.height,
            speed_scale: c_cfg.speed_scale.unwrap_or(1.0),
            heading_max: c_cfg.heading_max,
            speed_max: c_cfg.speed_max,
            heading_step: c_cfg.heading_step,
            speed_step: c_cfg.speed_step,
        };

        // Initial state: craft at its starting point, trajectory seeded,
        // time baseline unset until the priming tick
        let state = SimulationState::new(NVec2::new(cfg.craft.x, cfg.craft.y));

        // Live inputs start at the configured heading/speed
        let controls = Controls {
            heading_deg: cfg.craft.heading,
            speed: cfg.craft.speed,
        };

        Self {
            parameters,
            state,
            controls,
        }
    }
}
