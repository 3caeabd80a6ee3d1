use std::time::Duration;

use gilrs::{Button, EventType, GamepadId, Gilrs, PowerInfo};
use log::{error, info, warn};
use teleop_core::{Buttons, DriveAxes, InputError, InputSample, InputSource};

use super::StickConfig;

/// Longest wait for a gamepad event before a sample is produced anyway.
///
/// Keeps the session ticking (display timeouts, home screen refresh) while
/// the sticks are held still.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(20);

/// Map a gilrs button onto the PlayStation-style menu buttons.
///
/// Buttons without a menu meaning map to [`Buttons::NONE`].
#[must_use]
pub fn button_flag(button: Button) -> Buttons {
    match button {
        Button::Select => Buttons::SELECT,
        Button::Start => Buttons::START,
        Button::Mode => Buttons::HOME,
        Button::DPadUp => Buttons::DUP,
        Button::DPadDown => Buttons::DDOWN,
        Button::DPadLeft => Buttons::DLEFT,
        Button::DPadRight => Buttons::DRIGHT,
        Button::East => Buttons::CIRCLE,
        Button::South => Buttons::CROSS,
        Button::West => Buttons::SQUARE,
        Button::North => Buttons::TRIANGLE,
        Button::LeftTrigger => Buttons::L1,
        Button::RightTrigger => Buttons::R1,
        Button::LeftTrigger2 => Buttons::L2,
        Button::RightTrigger2 => Buttons::R2,
        Button::LeftThumb => Buttons::LS,
        Button::RightThumb => Buttons::RS,
        _ => Buttons::NONE,
    }
}

/// Input source backed by the platform gamepad API through gilrs.
///
/// Binds to whichever pad is connected first and ignores events from any
/// other pad until the bound one goes away.
pub struct GilrsInput {
    gilrs: Gilrs,
    pad: Option<GamepadId>,
    sticks: StickConfig,
}

impl GilrsInput {
    /// Start the gamepad backend.
    ///
    /// On platforms gilrs does not support, the returned source never
    /// finds a controller.
    pub fn new(sticks: StickConfig) -> Result<Self, InputError> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(dummy)) => {
                warn!("Gamepads are not supported on this platform");
                dummy
            }
            Err(e) => {
                error!("Gamepad backend failed to start: {}", e);
                return Err(InputError::Io);
            }
        };

        Ok(Self {
            gilrs,
            pad: None,
            sticks,
        })
    }

    /// The pad currently bound, if any.
    #[inline]
    #[must_use]
    pub fn bound(&self) -> Option<GamepadId> {
        self.pad
    }

    fn axes(&self, id: GamepadId) -> DriveAxes {
        match self.gilrs.connected_gamepad(id) {
            Some(pad) => DriveAxes::new(
                self.sticks.shape(pad.value(self.sticks.yaw)),
                self.sticks.shape(pad.value(self.sticks.throttle)),
            ),
            None => DriveAxes::NEUTRAL,
        }
    }

    fn unbind(&mut self) -> InputError {
        if let Some(id) = self.pad.take() {
            info!("Gamepad {} disconnected", id);
        }
        InputError::Disconnected
    }
}

impl InputSource for GilrsInput {
    async fn acquire(&mut self) -> Result<(), InputError> {
        // Hotplugged pads only show up once their events are pumped
        while self.gilrs.next_event().is_some() {}

        let (id, pad) = self.gilrs.gamepads().next().ok_or(InputError::Unavailable)?;
        info!("Bound gamepad {}: {}", id, pad.name());
        self.pad = Some(id);
        Ok(())
    }

    async fn receive(&mut self) -> Result<InputSample, InputError> {
        let id = self.pad.ok_or(InputError::Disconnected)?;
        let mut pressed = Buttons::NONE;

        let mut next = self.gilrs.next_event_blocking(Some(POLL_TIMEOUT));
        while let Some(event) = next {
            if event.id == id {
                match event.event {
                    EventType::ButtonPressed(button, _) => pressed |= button_flag(button),
                    EventType::Disconnected => return Err(self.unbind()),
                    _ => {}
                }
            }
            next = self.gilrs.next_event();
        }

        if self.gilrs.connected_gamepad(id).is_none() {
            return Err(self.unbind());
        }

        Ok(InputSample {
            axes: self.axes(id),
            pressed,
        })
    }

    fn is_connected(&self) -> bool {
        self.pad
            .is_some_and(|id| self.gilrs.connected_gamepad(id).is_some())
    }

    fn battery_level(&self) -> Option<f32> {
        let pad = self.gilrs.connected_gamepad(self.pad?)?;
        match pad.power_info() {
            PowerInfo::Discharging(level) | PowerInfo::Charging(level) => {
                Some(f32::from(level.min(100)) / 100.0)
            }
            PowerInfo::Charged => Some(1.0),
            _ => None,
        }
    }
}
