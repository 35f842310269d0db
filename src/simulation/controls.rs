//! Live operator inputs shared between the control surface and the integrator
//!
//! Plain scalars: the viewer's input system writes them, the tick system reads
//! them once at the start of each tick. Both run inside the same chained
//! single-threaded `Update` schedule, so no lock or atomic is needed; a
//! multi-threaded host driving ticks and input from different threads would
//! have to wrap this in a mutex.
//!
//! The setters accept any finite value. Keeping heading/speed inside their
//! advertised ranges is the control surface's job, not this store's.

#[derive(Debug, Clone)]
pub struct Controls {
    pub heading_deg: f64, // direction of travel, degrees from the +x axis
    pub speed: f64, // scalar speed, unit-agnostic
}

impl Controls {
    pub fn set_heading(&mut self, value: f64) {
        self.heading_deg = value;
    }

    pub fn set_speed(&mut self, value: f64) {
        self.speed = value;
    }
}
