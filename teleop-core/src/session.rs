//! Menu/session state machine: mode selection, drive arbitration and
//! display lifecycle, advanced once per control-loop tick.
//!
//! # Per-tick protocol
//!
//! 1. **Drive**: mix the sticks; drive only while [`Mode::Manual`] is
//!    armed and the controller is connected, otherwise stop.
//! 2. **Buttons**: `select` requests a stop; `home` opens/closes the menu;
//!    `dup`/`ddown` move the cursor; `circle` commits the cursor.
//! 3. **Display**: expire deadlines, redraw the home screen when due,
//!    flush.
//! 4. **Mode**: run the armed mode's tick action.

use embassy_time::Instant;
use log::{debug, error, info, trace, warn};

use crate::config::SessionConfig;
use crate::display::{format_line, line_from, DisplayError, TextDisplay};
use crate::mixer::mix;
use crate::modes::{Mode, ModeKind, ModeRegistry};
use crate::motor::{MotorDriver, MotorError};
use crate::system::SystemUtilities;
use crate::types::{Buttons, DriveAxes, InputSample};

const SELECT_HINT: &str = "'O' to select";
const NO_MODE: &str = "No mode selected";
const UNKNOWN: &str = "unknown";

/// Everything one tick consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub axes: DriveAxes,
    /// Buttons pressed since the previous tick.
    pub pressed: Buttons,
    pub connected: bool,
    /// Controller battery as a fraction in `[0.0, 1.0]`, if known.
    pub controller_battery: Option<f32>,
    pub now: Instant,
}

impl TickInput {
    /// Input for a connected controller with no battery report.
    #[must_use]
    pub fn from_sample(sample: InputSample, now: Instant) -> Self {
        Self {
            axes: sample.axes,
            pressed: sample.pressed,
            connected: true,
            controller_battery: None,
            now,
        }
    }
}

/// What the control loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum TickOutcome {
    Continue,
    /// Stop the robot and leave the control loop.
    StopRequested,
}

/// Error type for session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    Motor(MotorError),
    Display(DisplayError),
}

impl From<MotorError> for SessionError {
    fn from(err: MotorError) -> Self {
        SessionError::Motor(err)
    }
}

impl From<DisplayError> for SessionError {
    fn from(err: DisplayError) -> Self {
        SessionError::Display(err)
    }
}

/// The menu/session state machine.
///
/// Owns the mode registry, the display timing state and the two output
/// collaborators. Created once per process and advanced by [`Session::tick`].
pub struct Session<M, D, U> {
    motors: M,
    display: D,
    system: U,
    registry: ModeRegistry,
    config: SessionConfig,
    menu_open: bool,
    /// Selection to restore when the menu is left without committing.
    saved_selection: Option<usize>,
    display_deadline: Option<Instant>,
    last_rendered_cursor: usize,
    home_screen_due: bool,
    last_home_refresh: Option<Instant>,
    /// Mode to announce with "New Mode".
    pending_flash: Option<Mode>,
    stop_requested: bool,
}

impl<M: MotorDriver, D: TextDisplay, U: SystemUtilities> Session<M, D, U> {
    /// Create a session; the registry's active mode is the starting mode.
    pub fn new(
        registry: ModeRegistry,
        config: SessionConfig,
        motors: M,
        display: D,
        system: U,
    ) -> Self {
        let last_rendered_cursor = registry.cursor();
        Self {
            motors,
            display,
            system,
            registry,
            config,
            menu_open: false,
            saved_selection: None,
            display_deadline: None,
            last_rendered_cursor,
            home_screen_due: true,
            last_home_refresh: None,
            pending_flash: None,
            stop_requested: false,
        }
    }

    /// Advance the state machine by one tick.
    ///
    /// Once a stop has been requested every later tick only stops the
    /// motors and reports [`TickOutcome::StopRequested`] again.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickOutcome, SessionError> {
        if self.stop_requested {
            self.motors.stop()?;
            return Ok(TickOutcome::StopRequested);
        }

        self.arbitrate_drive(input)?;

        if !input.pressed.is_empty() {
            debug!("Pressed: {:?}", input.pressed);
            if input.pressed.contains(Buttons::SELECT) {
                info!("Select pressed, stop requested");
                return Ok(self.request_stop());
            }
            self.handle_buttons(input.pressed, input.now);
        }

        self.render_flash();
        self.update_display(input.now, input.controller_battery)?;
        self.run_active_mode(input.now)
    }

    fn arbitrate_drive(&mut self, input: &TickInput) -> Result<(), MotorError> {
        let powers = mix(input.axes.yaw, input.axes.throttle, self.config.max_power);

        if !input.connected || powers.is_stopped() {
            self.motors.stop()
        } else if self.registry.is_active(Mode::Manual) {
            trace!("Drive: left {} right {}", powers.left, powers.right);
            self.motors.set_speeds(powers.left, powers.right)
        } else {
            self.motors.stop()
        }
    }

    fn handle_buttons(&mut self, pressed: Buttons, now: Instant) {
        if pressed.contains(Buttons::HOME) {
            if self.menu_open {
                self.close_menu();
            } else {
                self.open_menu();
            }
        }

        if self.menu_open && pressed.contains(Buttons::DUP) {
            self.registry.cycle_prev();
        }

        if self.menu_open && pressed.contains(Buttons::DDOWN) {
            self.registry.cycle_next();
        }

        if self.menu_open && pressed.contains(Buttons::CIRCLE) {
            self.commit_selection(now);
        }

        if self.menu_open && self.registry.cursor() != self.last_rendered_cursor {
            let mode = self.registry.cursor_mode();
            debug!("Cursor on {}", mode.name());
            self.display.set_line1(mode.name());
            self.display.set_line2(SELECT_HINT);
            self.last_rendered_cursor = self.registry.cursor();
        }
    }

    fn open_menu(&mut self) {
        self.saved_selection = self.registry.snapshot();
        self.registry.set_cursor_to_active();
        self.menu_open = true;
        // a pending blank would wipe the menu
        self.display_deadline = None;

        let heading = match self.registry.active_name() {
            Some(name) => format_line(format_args!("MODE: {name}")),
            None => line_from(NO_MODE),
        };
        self.display.set_line1(&heading);
        self.display.set_line2(SELECT_HINT);
        self.last_rendered_cursor = self.registry.cursor();

        // nothing is armed while browsing
        self.registry.deactivate_all();
        info!("Menu opened ({})", heading.as_str());
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.registry.restore(self.saved_selection);
        self.display.clear();
        self.home_screen_due = true;
        info!(
            "Menu exited, mode {}",
            self.registry.active_name().unwrap_or(NO_MODE)
        );
    }

    fn commit_selection(&mut self, now: Instant) {
        self.registry.commit_cursor_as_active();
        self.menu_open = false;

        let mode = self.registry.cursor_mode();
        self.pending_flash = Some(mode);
        self.display_deadline = Some(now + self.config.flash_timeout);
        info!("New mode: {}", mode.name());
    }

    fn render_flash(&mut self) {
        if let Some(mode) = self.pending_flash.take() {
            self.display.clear();
            self.display
                .set_line1(&format_line(format_args!("New Mode: {}", mode.name())));
        }
    }

    fn update_display(
        &mut self,
        now: Instant,
        controller_battery: Option<f32>,
    ) -> Result<(), DisplayError> {
        if let Some(deadline) = self.display_deadline {
            if now > deadline {
                trace!("Display timeout");
                self.display.clear();
                self.display_deadline = None;
                self.home_screen_due = true;
            }
        }

        if !self.menu_open && self.display_deadline.is_none() {
            let stale = self.last_home_refresh.map_or(true, |at| {
                now.saturating_duration_since(at) > self.config.home_refresh_interval
            });
            if self.home_screen_due || stale {
                self.refresh_home_screen(now, controller_battery);
            }
        }

        self.display.flush()
    }

    fn refresh_home_screen(&mut self, now: Instant, controller_battery: Option<f32>) {
        let voltage = self.system.main_battery_voltage().unwrap_or_else(|e| {
            warn!("Battery query failed: {:?}", e);
            line_from(UNKNOWN)
        });
        self.display
            .set_line1(&format_line(format_args!("Battery: {voltage}")));

        let pad = match controller_battery {
            Some(level) => {
                format_line(format_args!("Pad: {:.0}%", level.clamp(0.0, 1.0) * 100.0))
            }
            None => format_line(format_args!("Pad: {UNKNOWN}")),
        };
        self.display.set_line2(&pad);

        self.last_home_refresh = Some(now);
        self.home_screen_due = false;
        debug!("Home screen refreshed");
    }

    fn run_active_mode(&mut self, now: Instant) -> Result<TickOutcome, SessionError> {
        let Some(mode) = self.registry.active() else {
            return Ok(TickOutcome::Continue);
        };

        match mode.kind() {
            // driving already happened during arbitration
            ModeKind::Drive => {}
            // TODO: hook line-following and maze solvers in here once they exist
            ModeKind::Placeholder => {}
            ModeKind::Oneshot => self.run_oneshot(mode, now)?,
            ModeKind::Terminal => {
                info!("{} selected, stop requested", mode.name());
                return Ok(self.request_stop());
            }
        }
        Ok(TickOutcome::Continue)
    }

    fn run_oneshot(&mut self, mode: Mode, now: Instant) -> Result<(), DisplayError> {
        match mode {
            Mode::Ip => {
                let address = self.system.ip_address().unwrap_or_else(|e| {
                    warn!("IP address query failed: {:?}", e);
                    line_from(UNKNOWN)
                });
                info!("IP address: {}", address.as_str());
                self.display.set_line2(&address);
            }
            Mode::Shutdown => {
                self.display.set_line1("Shutting down");
                self.display.flush()?;
                info!("Halting system");
                if let Err(e) = self.system.halt() {
                    error!("Halt failed: {:?}", e);
                }
            }
            Mode::Reboot => {
                self.display.set_line1("Rebooting");
                self.display.flush()?;
                info!("Rebooting system");
                if let Err(e) = self.system.reboot() {
                    error!("Reboot failed: {:?}", e);
                }
            }
            _ => {}
        }

        self.registry.reset_to_first();
        self.display_deadline = Some(now + self.config.oneshot_timeout);
        Ok(())
    }

    fn request_stop(&mut self) -> TickOutcome {
        self.stop_requested = true;
        TickOutcome::StopRequested
    }

    /// Stop both motors outside the normal tick.
    pub fn stop_motors(&mut self) -> Result<(), SessionError> {
        self.motors.stop()?;
        Ok(())
    }

    /// Replace the display contents with two lines and flush.
    pub fn show_message(&mut self, line1: &str, line2: &str) -> Result<(), SessionError> {
        self.display.clear();
        self.display.set_line1(line1);
        self.display.set_line2(line2);
        self.display.flush()?;
        Ok(())
    }

    /// Blank the display and flush.
    pub fn blank_display(&mut self) -> Result<(), SessionError> {
        self.display.clear();
        self.display.flush()?;
        Ok(())
    }

    /// Ask for the home screen to be redrawn on the next idle tick.
    pub fn mark_home_screen_due(&mut self) {
        self.home_screen_due = true;
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    #[inline]
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[inline]
    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested
    }

    #[inline]
    #[must_use]
    pub fn display_deadline(&self) -> Option<Instant> {
        self.display_deadline
    }

    #[inline]
    #[must_use]
    pub fn is_home_screen_due(&self) -> bool {
        self.home_screen_due
    }

    /// Get a reference to the motor driver.
    pub fn motors(&self) -> &M {
        &self.motors
    }

    /// Get a mutable reference to the motor driver.
    pub fn motors_mut(&mut self) -> &mut M {
        &mut self.motors
    }

    /// Get a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get a reference to the system utilities.
    pub fn system(&self) -> &U {
        &self.system
    }

    /// Decompose the session into its collaborators.
    pub fn into_parts(self) -> (M, D, U) {
        (self.motors, self.display, self.system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SESSION_CONFIG;
    use crate::mock::{FakeSystem, MotorCall, RecordingDisplay, RecordingMotors};
    use crate::modes::DEFAULT_MODES;
    use crate::system::UtilityError;
    use embassy_time::Duration;

    type TestSession = Session<RecordingMotors, RecordingDisplay, FakeSystem>;

    fn session() -> TestSession {
        session_with(ModeRegistry::new(&DEFAULT_MODES).unwrap(), FakeSystem::default())
    }

    fn session_with(registry: ModeRegistry, system: FakeSystem) -> TestSession {
        Session::new(
            registry,
            DEFAULT_SESSION_CONFIG,
            RecordingMotors::default(),
            RecordingDisplay::default(),
            system,
        )
    }

    /// Registry with the mode at `index` armed.
    fn armed(index: usize) -> ModeRegistry {
        let mut registry = ModeRegistry::new(&DEFAULT_MODES).unwrap();
        for _ in 0..index {
            registry.cycle_next();
        }
        registry.commit_cursor_as_active();
        registry
    }

    fn at(ms: u64, pressed: Buttons, axes: DriveAxes) -> TickInput {
        TickInput {
            axes,
            pressed,
            connected: true,
            controller_battery: None,
            now: Instant::from_millis(ms),
        }
    }

    fn press(session: &mut TestSession, ms: u64, pressed: Buttons) -> TickOutcome {
        session.tick(&at(ms, pressed, DriveAxes::NEUTRAL)).unwrap()
    }

    const FORWARD: DriveAxes = DriveAxes::new(0.0, 0.5);

    #[test]
    fn test_manual_mode_drives() {
        let mut session = session();
        let outcome = session.tick(&at(0, Buttons::NONE, FORWARD)).unwrap();
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(session.motors().calls, [MotorCall::SetSpeeds(50, 50)]);
    }

    #[test]
    fn test_neutral_sticks_stop() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::NONE);
        assert_eq!(session.motors().calls, [MotorCall::Stop]);
    }

    #[test]
    fn test_disconnected_never_drives() {
        let mut session = session();
        let mut input = at(0, Buttons::NONE, FORWARD);
        input.connected = false;
        let _ = session.tick(&input).unwrap();
        assert_eq!(session.motors().calls, [MotorCall::Stop]);
    }

    #[test]
    fn test_one_motor_command_per_tick() {
        let mut session = session();
        for ms in 0..5 {
            let _ = session.tick(&at(ms, Buttons::NONE, FORWARD)).unwrap();
        }
        assert_eq!(session.motors().calls.len(), 5);
    }

    #[test]
    fn test_select_then_maze_stops_driving() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        assert!(session.is_menu_open());
        assert_eq!(session.registry().active(), None);

        let _ = press(&mut session, 10, Buttons::DDOWN);
        let _ = press(&mut session, 20, Buttons::DDOWN);
        assert_eq!(session.registry().cursor(), 2);

        let _ = press(&mut session, 30, Buttons::CIRCLE);
        assert!(!session.is_menu_open());
        assert_eq!(session.registry().active(), Some(Mode::Maze));
        assert!(!session.registry().is_active(Mode::Manual));

        let _ = session.tick(&at(40, Buttons::NONE, FORWARD)).unwrap();
        assert_eq!(session.motors().last(), Some(MotorCall::Stop));
        assert!(!session.motors().drove());
    }

    #[test]
    fn test_menu_never_drives_while_open() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        let _ = session.tick(&at(10, Buttons::NONE, FORWARD)).unwrap();
        assert!(!session.motors().drove());
    }

    #[test]
    fn test_menu_renders_current_mode_and_cursor() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        assert_eq!(session.display().screen(), ("MODE: Manual", SELECT_HINT));

        let _ = press(&mut session, 10, Buttons::DUP);
        assert_eq!(session.registry().cursor_mode(), Mode::Exit);
        assert_eq!(session.display().screen(), ("Exit", SELECT_HINT));

        let _ = press(&mut session, 20, Buttons::DDOWN | Buttons::DUP);
        assert_eq!(session.display().screen(), ("Exit", SELECT_HINT));
    }

    #[test]
    fn test_menu_opens_on_active_mode() {
        let mut session = session_with(armed(3), FakeSystem::default());
        let _ = press(&mut session, 0, Buttons::HOME);
        assert_eq!(session.registry().cursor(), 3);
        assert_eq!(session.display().screen(), ("MODE: Toxic", SELECT_HINT));
    }

    #[test]
    fn test_cancel_menu_restores_selection() {
        let mut session = session_with(armed(1), FakeSystem::default());
        let _ = press(&mut session, 0, Buttons::HOME);
        let _ = press(&mut session, 10, Buttons::DDOWN);
        let _ = press(&mut session, 20, Buttons::DDOWN);
        let _ = press(&mut session, 30, Buttons::HOME);

        assert!(!session.is_menu_open());
        assert_eq!(session.registry().active(), Some(Mode::Line));
        // home screen replaces the menu on the same tick
        assert_eq!(session.display().screen(), ("Battery: 7.84V", "Pad: unknown"));
    }

    #[test]
    fn test_open_close_round_trip_from_every_mode() {
        for index in 0..4 {
            let mut session = session_with(armed(index), FakeSystem::default());
            let _ = press(&mut session, 0, Buttons::HOME);
            let _ = press(&mut session, 10, Buttons::HOME);
            assert_eq!(session.registry().active_index(), Some(index));
        }
    }

    #[test]
    fn test_commit_flashes_new_mode_then_blanks() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        let _ = press(&mut session, 10, Buttons::DDOWN);
        let _ = press(&mut session, 20, Buttons::CIRCLE);

        assert_eq!(session.display().screen(), ("New Mode: Line", ""));
        assert_eq!(
            session.display_deadline(),
            Some(Instant::from_millis(20) + Duration::from_secs(2))
        );

        // deadline is inclusive
        let _ = press(&mut session, 2_020, Buttons::NONE);
        assert_eq!(session.display().screen(), ("New Mode: Line", ""));

        let _ = press(&mut session, 2_021, Buttons::NONE);
        assert_eq!(session.display_deadline(), None);
        assert_eq!(session.display().screen(), ("Battery: 7.84V", "Pad: unknown"));
    }

    #[test]
    fn test_opening_menu_cancels_deadline() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        let _ = press(&mut session, 10, Buttons::CIRCLE);
        assert!(session.display_deadline().is_some());

        let _ = press(&mut session, 20, Buttons::HOME);
        assert_eq!(session.display_deadline(), None);
        let _ = press(&mut session, 5_000, Buttons::NONE);
        assert_eq!(session.display().screen(), ("MODE: Manual", SELECT_HINT));
    }

    #[test]
    fn test_navigation_ignored_with_menu_closed() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::DDOWN | Buttons::CIRCLE);
        assert_eq!(session.registry().cursor(), 0);
        assert_eq!(session.registry().active(), Some(Mode::Manual));
        assert!(session.display_deadline().is_none());
    }

    #[test]
    fn test_select_stops_in_any_state() {
        for open_menu in [false, true] {
            let mut session = session();
            if open_menu {
                let _ = press(&mut session, 0, Buttons::HOME);
            }
            let outcome = session
                .tick(&at(10, Buttons::SELECT | Buttons::CIRCLE, FORWARD))
                .unwrap();
            assert_eq!(outcome, TickOutcome::StopRequested);
            assert!(session.is_stop_requested());

            let before = session.motors().calls.len();
            let outcome = session.tick(&at(20, Buttons::NONE, FORWARD)).unwrap();
            assert_eq!(outcome, TickOutcome::StopRequested);
            assert_eq!(&session.motors().calls[before..], [MotorCall::Stop]);
        }
    }

    #[test]
    fn test_home_screen_refresh_interval() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::NONE);
        assert_eq!(session.system().battery_queries, 1);
        assert!(!session.is_home_screen_due());

        let _ = press(&mut session, 30_000, Buttons::NONE);
        let _ = press(&mut session, 60_000, Buttons::NONE);
        assert_eq!(session.system().battery_queries, 1);

        let _ = press(&mut session, 60_001, Buttons::NONE);
        assert_eq!(session.system().battery_queries, 2);
    }

    #[test]
    fn test_home_screen_shows_controller_battery() {
        let mut session = session();
        let mut input = at(0, Buttons::NONE, DriveAxes::NEUTRAL);
        input.controller_battery = Some(0.8);
        let _ = session.tick(&input).unwrap();
        assert_eq!(session.display().screen(), ("Battery: 7.84V", "Pad: 80%"));
    }

    #[test]
    fn test_battery_failure_renders_placeholder() {
        let system = FakeSystem {
            voltage: Err(UtilityError::Failed),
            ..FakeSystem::default()
        };
        let mut session = session_with(ModeRegistry::new(&DEFAULT_MODES).unwrap(), system);
        let outcome = press(&mut session, 0, Buttons::NONE);
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(session.display().screen().0, "Battery: unknown");
    }

    #[test]
    fn test_flushes_every_tick() {
        let mut session = session();
        for ms in 0..4 {
            let _ = press(&mut session, ms, Buttons::NONE);
        }
        assert_eq!(session.display().frames.len(), 4);
    }

    #[test]
    fn test_ip_mode_is_oneshot() {
        let mut session = session_with(armed(5), FakeSystem::default());
        assert_eq!(session.registry().active(), Some(Mode::Ip));

        let outcome = press(&mut session, 1_000, Buttons::NONE);
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(session.display().line2, "192.168.1.20");
        assert_eq!(session.registry().active_index(), Some(0));
        assert_eq!(
            session.display_deadline(),
            Some(Instant::from_millis(1_000) + Duration::from_secs(5))
        );

        // address reaches the screen on the next flush and stays until the deadline
        let _ = press(&mut session, 1_010, Buttons::NONE);
        assert_eq!(session.display().screen().1, "192.168.1.20");
        let _ = press(&mut session, 6_001, Buttons::NONE);
        assert_eq!(session.display().screen(), ("Battery: 7.84V", "Pad: unknown"));
    }

    #[test]
    fn test_ip_selected_from_menu_survives_flash() {
        let mut session = session();
        let _ = press(&mut session, 0, Buttons::HOME);
        for ms in 1..=5 {
            let _ = press(&mut session, ms, Buttons::DDOWN);
        }
        let _ = press(&mut session, 10, Buttons::CIRCLE);
        let _ = press(&mut session, 20, Buttons::NONE);
        assert_eq!(session.display().screen(), ("New Mode: IP", "192.168.1.20"));
        assert_eq!(session.registry().active(), Some(Mode::Manual));
    }

    #[test]
    fn test_ip_failure_renders_placeholder() {
        let system = FakeSystem {
            address: Err(UtilityError::Failed),
            ..FakeSystem::default()
        };
        let mut session = session_with(armed(5), system);
        let _ = press(&mut session, 0, Buttons::NONE);
        assert_eq!(session.display().line2, UNKNOWN);
    }

    #[test]
    fn test_shutdown_and_reboot_invoke_once() {
        let mut session = session_with(armed(6), FakeSystem::default());
        let _ = press(&mut session, 0, Buttons::NONE);
        let _ = press(&mut session, 10, Buttons::NONE);
        assert_eq!(session.system().halts, 1);
        assert!(session.display().showed("Shutting down"));
        assert_eq!(session.registry().active(), Some(Mode::Manual));

        let mut session = session_with(armed(7), FakeSystem::default());
        let _ = press(&mut session, 0, Buttons::NONE);
        assert_eq!(session.system().reboots, 1);
        assert!(session.display().showed("Rebooting"));
    }

    #[test]
    fn test_exit_mode_requests_stop() {
        let mut session = session_with(armed(8), FakeSystem::default());
        let outcome = press(&mut session, 0, Buttons::NONE);
        assert_eq!(outcome, TickOutcome::StopRequested);
        assert!(session.is_stop_requested());
    }

    #[test]
    fn test_motor_error_propagates() {
        let mut session = session();
        session.motors.fail = true;
        let result = session.tick(&at(0, Buttons::NONE, FORWARD));
        assert_eq!(result, Err(SessionError::Motor(MotorError::Io)));
    }

    #[test]
    fn test_show_message_and_blank() {
        let mut session = session();
        session.show_message("No Controller", "Connected").unwrap();
        assert_eq!(session.display().screen(), ("No Controller", "Connected"));
        session.blank_display().unwrap();
        assert_eq!(session.display().screen(), ("", ""));
    }
}
