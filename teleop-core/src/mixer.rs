//! Differential-drive mixing of stick axes into wheel powers.

/// Default power ceiling for either side of the drive.
pub const DEFAULT_MAX_POWER: i16 = 100;

/// Signed power for the left and right sides of the drive.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrivePowers {
    pub left: i16,
    pub right: i16,
}

impl DrivePowers {
    pub const STOPPED: Self = Self { left: 0, right: 0 };

    /// Both sides at zero power.
    #[inline]
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        self.left == 0 && self.right == 0
    }
}

#[inline]
fn magnitude(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// Mix a yaw/throttle pair into left/right powers.
///
/// `left = throttle + yaw` and `right = throttle - yaw`, then both are
/// scaled by `max_power / max(1, |left|, |right|)` and truncated toward
/// zero, so either output stays within `[-max_power, max_power]` and the
/// ratio between the sides is preserved when the sum saturates.
///
/// # Example
///
/// ```
/// use teleop_core::mixer::{mix, DrivePowers};
///
/// assert_eq!(mix(0.0, 1.0, 100), DrivePowers { left: 100, right: 100 });
/// assert_eq!(mix(1.0, 0.0, 100), DrivePowers { left: 100, right: -100 });
/// ```
#[must_use]
pub fn mix(yaw: f32, throttle: f32, max_power: i16) -> DrivePowers {
    let left = throttle + yaw;
    let right = throttle - yaw;
    let scale = f32::from(max_power) / 1.0f32.max(magnitude(left)).max(magnitude(right));
    // `as` truncates toward zero and saturates at the i16 bounds
    DrivePowers {
        left: (left * scale) as i16,
        right: (right * scale) as i16,
    }
}
