//! Operating system utilities: battery, network address, power control.

use crate::display::Line;

/// Error type for system utility calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UtilityError {
    /// The utility is not available on this system.
    Unsupported,
    /// The underlying command or call failed.
    Failed,
    /// The call succeeded but produced nothing usable.
    InvalidOutput,
}

/// Best-effort access to the host operating system.
///
/// Query failures are rendered as a placeholder by the session and never
/// stop the control loop. `halt` and `reboot` are fire-and-forget: the
/// process may be torn down before they return.
pub trait SystemUtilities {
    /// Main battery voltage, ready for display (e.g. `"7.84V"`).
    fn main_battery_voltage(&mut self) -> Result<Line, UtilityError>;

    /// Primary IP address, ready for display.
    fn ip_address(&mut self) -> Result<Line, UtilityError>;

    fn halt(&mut self) -> Result<(), UtilityError>;

    fn reboot(&mut self) -> Result<(), UtilityError>;
}

/// Utilities for a system without any of the above.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSystem;

impl SystemUtilities for NoSystem {
    fn main_battery_voltage(&mut self) -> Result<Line, UtilityError> {
        Err(UtilityError::Unsupported)
    }

    fn ip_address(&mut self) -> Result<Line, UtilityError> {
        Err(UtilityError::Unsupported)
    }

    fn halt(&mut self) -> Result<(), UtilityError> {
        Err(UtilityError::Unsupported)
    }

    fn reboot(&mut self) -> Result<(), UtilityError> {
        Err(UtilityError::Unsupported)
    }
}
