pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{SimulationState, NVec2};
pub use simulation::params::Parameters;
pub use simulation::controls::Controls;
pub use simulation::integrator::{step, wrap_axis};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, PlaneConfig, CraftConfig, ControlsConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
