//! Time source for the control loop.

use embassy_time::Instant;

/// Monotonic time source read once per tick.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by the embassy time driver.
///
/// Requires a time driver to be linked (e.g. `embassy-time/std` on host).
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
