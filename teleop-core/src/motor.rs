//! Motor driver trait and error types.

/// Error type for motor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Bus/communication I/O error.
    Io,
    /// Driver not ready (e.g., HAT not initialised).
    NotReady,
}

/// Trait for the two-sided drive actuator.
///
/// Powers are signed, one per side, in the range the mixer produced
/// (`[-max_power, max_power]`). Implementations without hardware should
/// log and succeed so the control loop keeps running.
pub trait MotorDriver {
    /// Apply power to both sides.
    fn set_speeds(&mut self, left: i16, right: i16) -> Result<(), MotorError>;

    /// Stop both sides.
    fn stop(&mut self) -> Result<(), MotorError>;
}
