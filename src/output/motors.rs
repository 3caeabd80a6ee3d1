use log::info;
use teleop_core::{MotorDriver, MotorError};

/// Motor driver for machines without a motor HAT.
///
/// Logs what it would have sent and never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleMotors {
    last: Option<(i16, i16)>,
}

impl ConsoleMotors {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// The last powers applied, or `None` when stopped.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<(i16, i16)> {
        self.last
    }
}

impl MotorDriver for ConsoleMotors {
    fn set_speeds(&mut self, left: i16, right: i16) -> Result<(), MotorError> {
        info!("Left: {}, Right: {}", left, right);
        self.last = Some((left, right));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        info!("Motors stopping");
        self.last = None;
        Ok(())
    }
}
