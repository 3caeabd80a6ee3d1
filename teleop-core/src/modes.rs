//! Operating modes and the registry that tracks which one is armed.

use heapless::Vec;

/// Maximum number of modes a registry can hold.
pub const MAX_MODES: usize = 16;

/// A named, mutually-exclusive operating behavior of the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Drive directly from the sticks.
    Manual,
    Line,
    Maze,
    Toxic,
    Zombie,
    /// Show the IP address, then fall back to the first mode.
    Ip,
    /// Halt the operating system.
    Shutdown,
    /// Reboot the operating system.
    Reboot,
    /// Leave the control loop.
    Exit,
}

/// How a mode behaves once it is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeKind {
    /// Sticks drive the motors.
    Drive,
    /// Reserved for an autonomous behavior; does nothing in the core.
    Placeholder,
    /// Performs one action and hands control back to the first mode.
    Oneshot,
    /// Requests the control loop to stop.
    Terminal,
}

impl Mode {
    /// Name shown on the display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Manual => "Manual",
            Mode::Line => "Line",
            Mode::Maze => "Maze",
            Mode::Toxic => "Toxic",
            Mode::Zombie => "Zombie",
            Mode::Ip => "IP",
            Mode::Shutdown => "Shutdown",
            Mode::Reboot => "Reboot",
            Mode::Exit => "Exit",
        }
    }

    #[must_use]
    pub const fn kind(self) -> ModeKind {
        match self {
            Mode::Manual => ModeKind::Drive,
            Mode::Line | Mode::Maze | Mode::Toxic | Mode::Zombie => ModeKind::Placeholder,
            Mode::Ip | Mode::Shutdown | Mode::Reboot => ModeKind::Oneshot,
            Mode::Exit => ModeKind::Terminal,
        }
    }
}

/// Menu order used by the robot. The first entry is armed at startup.
pub const DEFAULT_MODES: [Mode; 9] = [
    Mode::Manual,
    Mode::Line,
    Mode::Maze,
    Mode::Toxic,
    Mode::Zombie,
    Mode::Ip,
    Mode::Shutdown,
    Mode::Reboot,
    Mode::Exit,
];

/// Error type for registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No modes were given.
    Empty,
    /// The same mode appears twice.
    Duplicate(Mode),
    /// More than [`MAX_MODES`] modes were given.
    TooMany,
}

/// Ordered set of modes with a single armed selection and a menu cursor.
///
/// At most one mode is active at a time. While the menu is open the
/// session deactivates everything, so `active()` may be `None`; the
/// cursor always points at a valid entry.
#[derive(Clone, Debug)]
pub struct ModeRegistry {
    modes: Vec<Mode, MAX_MODES>,
    active: Option<usize>,
    cursor: usize,
}

impl ModeRegistry {
    /// Build a registry with the first mode active and the cursor on it.
    pub fn new(modes: &[Mode]) -> Result<Self, RegistryError> {
        if modes.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut list = Vec::new();
        for &mode in modes {
            if list.contains(&mode) {
                return Err(RegistryError::Duplicate(mode));
            }
            list.push(mode).map_err(|_| RegistryError::TooMany)?;
        }

        Ok(Self {
            modes: list,
            active: Some(0),
            cursor: 0,
        })
    }

    /// Number of modes (never zero).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[inline]
    #[must_use]
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mode under the menu cursor.
    #[inline]
    #[must_use]
    pub fn cursor_mode(&self) -> Mode {
        self.modes[self.cursor]
    }

    #[inline]
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<Mode> {
        self.active.map(|index| self.modes[index])
    }

    #[must_use]
    pub fn active_name(&self) -> Option<&'static str> {
        self.active().map(Mode::name)
    }

    #[must_use]
    pub fn is_active(&self, mode: Mode) -> bool {
        self.active() == Some(mode)
    }

    /// Move the cursor up one entry, wrapping to the last.
    pub fn cycle_prev(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.modes.len() - 1);
    }

    /// Move the cursor down one entry, wrapping to the first.
    pub fn cycle_next(&mut self) {
        self.cursor = (self.cursor + 1) % self.modes.len();
    }

    /// Arm the mode under the cursor; every other mode becomes inactive.
    pub fn commit_cursor_as_active(&mut self) {
        self.active = Some(self.cursor);
    }

    /// Put the cursor on the active mode, if any.
    pub fn set_cursor_to_active(&mut self) {
        if let Some(index) = self.active {
            self.cursor = index;
        }
    }

    pub fn deactivate_all(&mut self) {
        self.active = None;
    }

    /// Arm the first mode again.
    pub fn reset_to_first(&mut self) {
        self.active = Some(0);
    }

    /// Copy of the current selection, for [`ModeRegistry::restore`].
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<usize> {
        self.active
    }

    /// Restore a selection taken with [`ModeRegistry::snapshot`].
    pub fn restore(&mut self, snapshot: Option<usize>) {
        self.active = snapshot.filter(|&index| index < self.modes.len());
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self {
            modes: DEFAULT_MODES.into_iter().collect(),
            active: Some(0),
            cursor: 0,
        }
    }
}
