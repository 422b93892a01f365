//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Nominal frame-clock rate assumed by duration math, in ticks per second.
/// Matches the refresh-driven clocks the engine targets.
pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Configuration for an interpolator.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Tick frequency the host clock is assumed to deliver. A ramp over
    /// `duration` seconds advances progress by `1 / (duration * tick_rate)`
    /// per tick.
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}
