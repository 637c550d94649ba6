//! Routing configuration.

use crate::{CoreError, CoreResult};

/// Travel and waiting times are expressed in minutes.
pub type Minutes = f64;

/// Parameters of the time cost model used by the router.
///
/// Typically read from the `routing_settings` object of the input document.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Fixed time spent waiting at a stop before boarding, in minutes.
    pub bus_wait_time: u32,
    /// Travel speed of every line, in km/h.  Must be positive and finite.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::InvalidSettings(format!(
                "bus_velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn wait_minutes(&self) -> Minutes {
        self.bus_wait_time as Minutes
    }

    /// Minutes needed to cover `meters` of road at `bus_velocity`.
    #[inline]
    pub fn travel_minutes(&self, meters: u32) -> Minutes {
        60.0 * meters as f64 / (1000.0 * self.bus_velocity)
    }
}
