//! Supervisor: the outer control loop that binds a controller, runs the
//! session once per input sample and performs the shutdown sequence.

use embedded_hal_async::delay::DelayNs;
use log::{error, info, warn};

use crate::config::SupervisorConfig;
use crate::display::TextDisplay;
use crate::input::{InputError, InputSource};
use crate::motor::MotorDriver;
use crate::session::{Session, SessionError, TickInput, TickOutcome};
use crate::system::SystemUtilities;
use crate::time::Clock;

/// Error type for supervisor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorError {
    /// Error from the input source other than absence or disconnection.
    Input(InputError),
    /// Error from the session's motor driver or display.
    Session(SessionError),
}

impl From<InputError> for SupervisorError {
    fn from(err: InputError) -> Self {
        SupervisorError::Input(err)
    }
}

impl From<SessionError> for SupervisorError {
    fn from(err: SessionError) -> Self {
        SupervisorError::Session(err)
    }
}

/// How a connected stretch of the loop ended.
enum Link {
    Lost,
    Stop,
}

/// Drives a [`Session`] from an [`InputSource`].
///
/// # Error Handling
///
/// A missing controller is retried after a backoff and a disconnect goes
/// back to acquisition; neither is an error. Any other failure stops the
/// motors on a best-effort basis and is returned from [`Supervisor::run`].
pub struct Supervisor<I, M, D, U, C, W> {
    input: I,
    session: Session<M, D, U>,
    clock: C,
    delay: W,
    config: SupervisorConfig,
}

impl<I, M, D, U, C, W> Supervisor<I, M, D, U, C, W>
where
    I: InputSource,
    M: MotorDriver,
    D: TextDisplay,
    U: SystemUtilities,
    C: Clock,
    W: DelayNs,
{
    /// Create a supervisor around an input source and a session.
    pub fn new(
        input: I,
        session: Session<M, D, U>,
        clock: C,
        delay: W,
        config: SupervisorConfig,
    ) -> Self {
        Self {
            input,
            session,
            clock,
            delay,
            config,
        }
    }

    /// Run until a stop is requested, then shut down.
    ///
    /// Returns `Ok(())` only after the shutdown sequence has completed.
    pub async fn run(&mut self) -> Result<(), SupervisorError> {
        match self.supervise().await {
            Ok(()) => self.shutdown().await,
            Err(e) => {
                error!("Control loop failed: {:?}", e);
                if self.session.stop_motors().is_err() {
                    error!("Could not stop motors");
                }
                Err(e)
            }
        }
    }

    async fn supervise(&mut self) -> Result<(), SupervisorError> {
        loop {
            match self.input.acquire().await {
                Ok(()) => {
                    info!("Controller found, press SELECT to exit");
                    match self.drive().await? {
                        Link::Stop => return Ok(()),
                        Link::Lost => {
                            warn!("Controller disconnected");
                            self.session.stop_motors()?;
                            self.session.mark_home_screen_due();
                        }
                    }
                }
                Err(InputError::Unavailable) => self.wait_for_controller().await?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Tick the session for as long as the controller stays connected.
    async fn drive(&mut self) -> Result<Link, SupervisorError> {
        while self.input.is_connected() {
            let sample = match self.input.receive().await {
                Ok(sample) => sample,
                Err(InputError::Disconnected) => return Ok(Link::Lost),
                Err(e) => return Err(e.into()),
            };

            let input = TickInput {
                connected: self.input.is_connected(),
                controller_battery: self.input.battery_level(),
                ..TickInput::from_sample(sample, self.clock.now())
            };

            if let TickOutcome::StopRequested = self.session.tick(&input)? {
                return Ok(Link::Stop);
            }
        }
        Ok(Link::Lost)
    }

    async fn wait_for_controller(&mut self) -> Result<(), SessionError> {
        info!("No controller found yet");
        self.session.show_message("No Controller", "Connected")?;
        self.delay
            .delay_ms(self.config.retry_backoff.as_millis() as u32)
            .await;
        self.session.blank_display()
    }

    async fn shutdown(&mut self) -> Result<(), SupervisorError> {
        info!("Stopping motors");
        self.session.stop_motors()?;
        self.session.show_message("exited to", "command line")?;
        self.delay
            .delay_ms(self.config.farewell_hold.as_millis() as u32)
            .await;
        self.session.blank_display()?;
        Ok(())
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session<M, D, U> {
        &self.session
    }

    /// Decompose the supervisor into its input source and session.
    pub fn into_parts(self) -> (I, Session<M, D, U>) {
        (self.input, self.session)
    }
}
