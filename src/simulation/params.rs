//! Runtime parameters for the simulation
//!
//! `Parameters` holds the plane geometry, the speed-unit conversion factor,
//! and the control-surface ranges/step sizes

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64, // plane width W, plane units
    pub height: f64, // plane height H, plane units
    pub speed_scale: f64, // speed units -> plane units per second
    pub heading_max: f64, // control surface heading range is [0, heading_max] degrees
    pub speed_max: f64, // control surface speed range is [0, speed_max]
    pub heading_step: f64, // degrees added per frame while a heading key is held
    pub speed_step: f64, // speed units added per frame while a speed key is held
}
