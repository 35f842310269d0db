//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`PlaneConfig`]    – dimensions of the wrap-around plane
//! - [`CraftConfig`]    – initial craft position, heading, and speed
//! - [`ControlsConfig`] – control-surface ranges and per-frame step sizes
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! plane:
//!   width: 600.0           # plane width W
//!   height: 600.0          # plane height H
//!
//! craft:
//!   x: 300.0               # initial position
//!   y: 300.0
//!   heading: 0.0           # degrees from the +x axis
//!   speed: 100.0
//!
//! controls:
//!   heading_max: 180.0     # heading range is [0, heading_max]
//!   speed_max: 3000.0      # speed range is [0, speed_max]
//!   heading_step: 1.0      # degrees per frame while a key is held
//!   speed_step: 10.0       # speed units per frame while a key is held
//!   speed_scale: 1.0       # plane units/s per speed unit (optional)
//! ```
//!
//! The viewer then maps this configuration into the runtime scenario
//! representation consumed by the tick and render systems.

use serde::Deserialize;

/// Dimensions of the toroidal plane in plane units
#[derive(Deserialize, Debug, Clone)]
pub struct PlaneConfig {
    pub width: f64, // plane width W
    pub height: f64, // plane height H
}

/// Initial craft state
#[derive(Deserialize, Debug, Clone)]
pub struct CraftConfig {
    pub x: f64, // initial x position
    pub y: f64, // initial y position
    pub heading: f64, // initial heading, degrees from the +x axis
    pub speed: f64, // initial scalar speed
}

/// Control-surface ranges and per-frame adjustment steps
#[derive(Deserialize, Debug, Clone)]
pub struct ControlsConfig {
    pub heading_max: f64, // upper heading bound, degrees (lower bound is 0)
    pub speed_max: f64, // upper speed bound (lower bound is 0)
    pub heading_step: f64, // heading change per held frame
    pub speed_step: f64, // speed change per held frame
    pub speed_scale: Option<f64>, // speed unit conversion, defaults to 1.0
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub plane: PlaneConfig, // plane geometry
    pub craft: CraftConfig, // initial craft state
    pub controls: ControlsConfig, // control-surface configuration
}
