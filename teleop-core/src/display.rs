//! Two-line text display trait and the fixed-capacity line type.

use core::fmt::{self, Write};

/// Longest line the display is asked to show, in bytes.
pub const LINE_CAPACITY: usize = 32;

/// One line of display text.
pub type Line = heapless::String<LINE_CAPACITY>;

/// Error type for display operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus/communication I/O error.
    Io,
    /// Display not ready.
    NotReady,
}

/// Trait for a small two-line status display.
///
/// `clear`, `set_line1` and `set_line2` only touch the frame being
/// composed; nothing reaches the screen until `flush`.
pub trait TextDisplay {
    fn clear(&mut self);

    fn set_line1(&mut self, text: &str);

    fn set_line2(&mut self, text: &str);

    /// Push the composed frame to the screen.
    fn flush(&mut self) -> Result<(), DisplayError>;
}

struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format into a [`Line`], dropping whatever does not fit.
#[must_use]
pub fn format_line(args: fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    // Truncating never reports an error
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

/// Copy text into a [`Line`], dropping whatever does not fit.
#[must_use]
pub fn line_from(text: &str) -> Line {
    format_line(format_args!("{text}"))
}
