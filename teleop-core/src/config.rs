//! Compile-time tuning for the session and the control loop.
//!
//! Customize by building your own const from the defaults:
//!
//! ```
//! use embassy_time::Duration;
//! use teleop_core::config::{SessionConfig, DEFAULT_SESSION_CONFIG};
//!
//! const SLOW: SessionConfig = SessionConfig {
//!     max_power: 60,
//!     ..DEFAULT_SESSION_CONFIG
//! };
//! assert_eq!(SLOW.flash_timeout, Duration::from_secs(2));
//! ```

use embassy_time::Duration;

use crate::mixer::DEFAULT_MAX_POWER;

/// Timing and power limits for the menu/session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Power ceiling handed to the mixer.
    pub max_power: i16,
    /// How long "New Mode" stays up after a selection.
    pub flash_timeout: Duration,
    /// How long oneshot output (IP address, power messages) stays up.
    pub oneshot_timeout: Duration,
    /// Maximum age of the home screen before it is redrawn.
    pub home_refresh_interval: Duration,
}

pub const DEFAULT_SESSION_CONFIG: SessionConfig = SessionConfig {
    max_power: DEFAULT_MAX_POWER,
    flash_timeout: Duration::from_secs(2),
    oneshot_timeout: Duration::from_secs(5),
    home_refresh_interval: Duration::from_secs(60),
};

impl Default for SessionConfig {
    fn default() -> Self {
        DEFAULT_SESSION_CONFIG
    }
}

/// Timing for the outer control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisorConfig {
    /// Wait between attempts to bind a controller.
    pub retry_backoff: Duration,
    /// How long the farewell message stays up before the display blanks.
    pub farewell_hold: Duration,
}

pub const DEFAULT_SUPERVISOR_CONFIG: SupervisorConfig = SupervisorConfig {
    retry_backoff: Duration::from_secs(1),
    farewell_hold: Duration::from_secs(5),
};

impl Default for SupervisorConfig {
    fn default() -> Self {
        DEFAULT_SUPERVISOR_CONFIG
    }
}
