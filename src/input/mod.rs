//! Gamepad input: stick shaping and the gilrs-backed input source.

mod gamepad;

pub use gamepad::{button_flag, GilrsInput, POLL_TIMEOUT};

use gilrs::Axis;

/// Stick configuration for turning raw gamepad axes into drive axes.
///
/// Customize this at compile-time by creating your own const.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickConfig {
    /// Raw magnitudes below this read as exactly zero.
    pub dead_zone: f32,
    /// Raw magnitudes within this distance of full deflection read as 1.0.
    pub hot_zone: f32,
    /// Axis that steers (positive turns right).
    pub yaw: Axis,
    /// Axis that drives (positive is forward).
    pub throttle: Axis,
}

/// Default stick configuration.
///
/// - Right stick X -> yaw
/// - Left stick Y -> throttle
/// - Dead zone 0.1, hot zone 0.2 on both
pub const DEFAULT_STICK_CONFIG: StickConfig = StickConfig {
    dead_zone: 0.1,
    hot_zone: 0.2,
    yaw: Axis::RightStickX,
    throttle: Axis::LeftStickY,
};

impl Default for StickConfig {
    fn default() -> Self {
        DEFAULT_STICK_CONFIG
    }
}

/// Apply dead zone and hot zone shaping to a raw axis value in `[-1, 1]`.
///
/// Values inside the dead zone become 0; the rest is rescaled so the
/// output reaches ±1.0 once the raw value enters the hot zone.
#[inline]
#[must_use]
pub fn shape_axis(raw: f32, dead_zone: f32, hot_zone: f32) -> f32 {
    let magnitude = raw.abs();
    if magnitude < dead_zone {
        return 0.0;
    }
    let span = 1.0 - dead_zone - hot_zone;
    if span <= 0.0 {
        return raw.signum();
    }
    raw.signum() * ((magnitude - dead_zone) / span).min(1.0)
}

impl StickConfig {
    /// Shape a raw value with this configuration's zones.
    #[inline]
    #[must_use]
    pub fn shape(&self, raw: f32) -> f32 {
        shape_axis(raw, self.dead_zone, self.hot_zone)
    }
}
