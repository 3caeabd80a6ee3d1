use log::info;
use teleop_core::{line_from, DisplayError, Line, TextDisplay};

/// Two-line display for machines without the OLED.
///
/// Composes frames like the real screen does and logs a frame on flush
/// only when it differs from the one logged before.
#[derive(Debug, Default, Clone)]
pub struct ConsoleDisplay {
    line1: Line,
    line2: Line,
    shown: Option<(Line, Line)>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines currently on the (virtual) screen.
    #[must_use]
    pub fn screen(&self) -> (&str, &str) {
        match &self.shown {
            Some((line1, line2)) => (line1.as_str(), line2.as_str()),
            None => ("", ""),
        }
    }
}

impl TextDisplay for ConsoleDisplay {
    fn clear(&mut self) {
        self.line1.clear();
        self.line2.clear();
    }

    fn set_line1(&mut self, text: &str) {
        self.line1 = line_from(text);
    }

    fn set_line2(&mut self, text: &str) {
        self.line2 = line_from(text);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let frame = (self.line1.clone(), self.line2.clone());
        if self.shown.as_ref() == Some(&frame) {
            return Ok(());
        }

        if frame.0.is_empty() && frame.1.is_empty() {
            info!("Display cleared");
        } else {
            info!("Display: [{}] [{}]", frame.0, frame.1);
        }
        self.shown = Some(frame);
        Ok(())
    }
}
