//! Console stand-ins for the motor HAT and the OLED display.

mod display;
mod motors;

pub use display::ConsoleDisplay;
pub use motors::ConsoleMotors;
