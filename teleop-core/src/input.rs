//! Input source trait and error types.

use core::future::Future;

use crate::types::InputSample;

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// No controller is present to bind to.
    Unavailable,
    /// The bound controller went away.
    Disconnected,
    /// Device or backend I/O error.
    Io,
}

/// Async trait for the gamepad collaborator.
///
/// Implementations bind to a physical (or simulated) controller, report
/// whether it is still connected, and yield one [`InputSample`] per poll.
/// Dead zone and hot zone shaping of the axes is the implementation's job.
pub trait InputSource {
    /// Bind to an available controller.
    ///
    /// Returns [`InputError::Unavailable`] when no device is present; the
    /// caller retries after a backoff.
    fn acquire(&mut self) -> impl Future<Output = Result<(), InputError>>;

    /// Wait for and receive the next input sample.
    ///
    /// The sample carries every button pressed since the previous call.
    fn receive(&mut self) -> impl Future<Output = Result<InputSample, InputError>>;

    /// Check if the bound controller is still connected.
    fn is_connected(&self) -> bool;

    /// Controller battery charge as a fraction in `[0.0, 1.0]`, if known.
    fn battery_level(&self) -> Option<f32> {
        None
    }
}
