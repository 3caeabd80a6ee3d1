//! Core input types: Buttons, DriveAxes, InputSample.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Newly-pressed buttons for one tick, represented as a bitfield.
///
/// Identifiers follow the PlayStation-style names used throughout the
/// menu system (`select`, `home`, `dup`, `circle`, ...). Implements bitwise
/// operators for ergonomic button manipulation.
///
/// # Example
///
/// ```
/// use teleop_core::Buttons;
///
/// let buttons = Buttons::HOME | Buttons::DDOWN;
/// assert!(buttons.contains(Buttons::HOME));
/// assert!(buttons.contains(Buttons::DDOWN));
/// assert!(!buttons.contains(Buttons::SELECT));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u32);

impl Buttons {
    pub const SELECT: Self = Self(1 << 0);
    pub const START: Self = Self(1 << 1);
    pub const HOME: Self = Self(1 << 2); // PS / Guide button
    pub const DUP: Self = Self(1 << 3);
    pub const DDOWN: Self = Self(1 << 4);
    pub const DLEFT: Self = Self(1 << 5);
    pub const DRIGHT: Self = Self(1 << 6);
    pub const CIRCLE: Self = Self(1 << 7); // Confirm
    pub const CROSS: Self = Self(1 << 8);
    pub const SQUARE: Self = Self(1 << 9);
    pub const TRIANGLE: Self = Self(1 << 10);
    pub const L1: Self = Self(1 << 11);
    pub const R1: Self = Self(1 << 12);
    pub const L2: Self = Self(1 << 13);
    pub const R2: Self = Self(1 << 14);
    pub const LS: Self = Self(1 << 15); // Left stick press
    pub const RS: Self = Self(1 << 16); // Right stick press

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    const NAMED: [(Self, &'static str); 17] = [
        (Self::SELECT, "select"),
        (Self::START, "start"),
        (Self::HOME, "home"),
        (Self::DUP, "dup"),
        (Self::DDOWN, "ddown"),
        (Self::DLEFT, "dleft"),
        (Self::DRIGHT, "dright"),
        (Self::CIRCLE, "circle"),
        (Self::CROSS, "cross"),
        (Self::SQUARE, "square"),
        (Self::TRIANGLE, "triangle"),
        (Self::L1, "l1"),
        (Self::R1, "r1"),
        (Self::L2, "l2"),
        (Self::R2, "r2"),
        (Self::LS, "ls"),
        (Self::RS, "rs"),
    ];

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw bitfield value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Look up a single button by its identifier (`"select"`, `"dup"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Buttons> {
        Self::NAMED
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(button, _)| *button)
    }

    /// Identifiers of every pressed button, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(button, _)| self.contains(*button))
            .map(|(_, name)| name)
    }
}

impl core::fmt::Debug for Buttons {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Drive stick readings, already shaped by the input source.
///
/// Both axes range over [-1.0, 1.0]; positive throttle is forward and
/// positive yaw turns right.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveAxes {
    pub yaw: f32,
    pub throttle: f32,
}

impl DriveAxes {
    #[must_use]
    pub const fn new(yaw: f32, throttle: f32) -> Self {
        Self { yaw, throttle }
    }

    pub const NEUTRAL: Self = Self {
        yaw: 0.0,
        throttle: 0.0,
    };
}

/// One poll's worth of controller input.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    pub axes: DriveAxes,
    /// Buttons pressed since the previous poll.
    pub pressed: Buttons,
}

impl InputSample {
    /// Sticks centered, nothing pressed.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            axes: DriveAxes::NEUTRAL,
            pressed: Buttons::NONE,
        }
    }
}
