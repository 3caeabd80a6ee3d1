//! Linux host for the teleop core: a gilrs gamepad, console stand-ins for
//! the motor HAT and OLED, and system utilities backed by shell commands.
//!
//! The state machine itself lives in [`teleop_core`]; this crate only
//! provides the collaborators it is wired to in `src/bin/main.rs`.

pub mod input;
pub mod output;
pub mod system;

pub use input::{shape_axis, GilrsInput, StickConfig, DEFAULT_STICK_CONFIG};
pub use output::{ConsoleDisplay, ConsoleMotors};
pub use system::{CommandError, CommandSet, LinuxSystem, DEFAULT_COMMANDS};
