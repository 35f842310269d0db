pub mod states;
pub mod params;
pub mod controls;
pub mod integrator;
pub mod scenario;
