//! Platform-agnostic teleoperation and mode-selection core for a small
//! wheeled robot.
//!
//! This crate holds everything with real state and timing: it turns a
//! stream of gamepad samples into differential-drive commands and drives a
//! two-line menu display for switching between operating modes. Hardware
//! is reached only through traits, so the same core runs against real
//! drivers on the robot and against recording doubles in tests.
//!
//! # Overview
//!
//! - [`mixer`]: yaw/throttle to left/right power ([`mix`])
//! - [`modes`]: operating modes and the single-selection [`ModeRegistry`]
//! - [`session`]: the per-tick menu/mode state machine ([`Session`])
//! - [`supervisor`]: the outer control loop and shutdown ([`Supervisor`])
//! - [`input`], [`motor`], [`display`], [`system`], [`time`]: collaborator
//!   traits ([`InputSource`], [`MotorDriver`], [`TextDisplay`],
//!   [`SystemUtilities`], [`Clock`])
//!
//! # Buttons
//!
//! | Button   | Effect |
//! |----------|--------|
//! | `select` | stop the motors and leave the control loop |
//! | `home`   | open the menu, or leave it without changing mode |
//! | `dup`    | previous mode (menu open) |
//! | `ddown`  | next mode (menu open) |
//! | `circle` | select the highlighted mode (menu open) |
//!
//! # Example
//!
//! ```rust
//! use embassy_time::Instant;
//! use teleop_core::{
//!     Buttons, DriveAxes, ModeRegistry, MotorDriver, MotorError, NoSystem, Session,
//!     TextDisplay, DisplayError, TickInput, TickOutcome, DEFAULT_MODES, DEFAULT_SESSION_CONFIG,
//! };
//!
//! struct Motors;
//! impl MotorDriver for Motors {
//!     fn set_speeds(&mut self, _: i16, _: i16) -> Result<(), MotorError> { Ok(()) }
//!     fn stop(&mut self) -> Result<(), MotorError> { Ok(()) }
//! }
//!
//! struct Screen;
//! impl TextDisplay for Screen {
//!     fn clear(&mut self) {}
//!     fn set_line1(&mut self, _: &str) {}
//!     fn set_line2(&mut self, _: &str) {}
//!     fn flush(&mut self) -> Result<(), DisplayError> { Ok(()) }
//! }
//!
//! let registry = ModeRegistry::new(&DEFAULT_MODES).unwrap();
//! let mut session = Session::new(registry, DEFAULT_SESSION_CONFIG, Motors, Screen, NoSystem);
//!
//! let input = TickInput {
//!     axes: DriveAxes::new(0.0, 0.5),
//!     pressed: Buttons::SELECT,
//!     connected: true,
//!     controller_battery: None,
//!     now: Instant::from_millis(0),
//! };
//! assert_eq!(session.tick(&input), Ok(TickOutcome::StopRequested));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Derive `defmt::Format` on public types (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations;
//! display text lives in fixed-capacity [`Line`] strings.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod display;
pub mod input;
pub mod mixer;
pub mod modes;
pub mod motor;
pub mod session;
pub mod supervisor;
pub mod system;
pub mod time;
pub mod types;

#[cfg(test)]
mod mock;

// Re-export main types at crate root
pub use config::{
    SessionConfig, SupervisorConfig, DEFAULT_SESSION_CONFIG, DEFAULT_SUPERVISOR_CONFIG,
};
pub use display::{format_line, line_from, DisplayError, Line, TextDisplay, LINE_CAPACITY};
pub use input::{InputError, InputSource};
pub use mixer::{mix, DrivePowers, DEFAULT_MAX_POWER};
pub use modes::{Mode, ModeKind, ModeRegistry, RegistryError, DEFAULT_MODES, MAX_MODES};
pub use motor::{MotorDriver, MotorError};
pub use session::{Session, SessionError, TickInput, TickOutcome};
pub use supervisor::{Supervisor, SupervisorError};
pub use system::{NoSystem, SystemUtilities, UtilityError};
pub use time::{Clock, MonotonicClock};
pub use types::{Buttons, DriveAxes, InputSample};
