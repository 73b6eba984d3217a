//! Render targets for the state display.

use std::io::Write;

use crate::error::DisplayError;

/// Something with a settable text and a settable background color.
///
/// [`super::StateDisplay::render`] sets both properties and then calls
/// [`DisplayElement::flush`] once, so a target can present the pair
/// atomically.
pub trait DisplayElement {
    /// Sets the visible text.
    fn set_text(&mut self, text: &str);

    /// Sets the background color. The value is passed through unvalidated.
    fn set_background(&mut self, color: &str);

    /// Presents the pending text and background.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Render`] if the target cannot be written.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// Writes one line per render to a [`Write`] sink.
///
/// ```text
/// [flashlight] ON  background=#ff69b4
/// ```
#[derive(Debug)]
pub struct ConsoleElement<W> {
    writer: W,
    text: String,
    background: String,
}

impl<W: Write> ConsoleElement<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            text: String::new(),
            background: String::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplayElement for ConsoleElement<W> {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_background(&mut self, color: &str) {
        color.clone_into(&mut self.background);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        writeln!(
            self.writer,
            "[flashlight] {:<3} background={}",
            self.text, self.background
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory element that remembers every presented frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingElement {
    text: String,
    background: String,
    history: Vec<(String, String)>,
}

impl RecordingElement {
    /// Creates an empty element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current background color.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Every presented `(text, background)` pair, oldest first.
    #[must_use]
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }
}

impl DisplayElement for RecordingElement {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_background(&mut self, color: &str) {
        color.clone_into(&mut self.background);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.history.push((self.text.clone(), self.background.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_writes_one_line_per_flush() {
        let mut element = ConsoleElement::new(Vec::new());
        element.set_text("ON");
        element.set_background("#ff69b4");
        tokio_test::assert_ok!(element.flush());
        element.set_text("OFF");
        element.set_background("#000");
        tokio_test::assert_ok!(element.flush());

        let output = String::from_utf8(element.into_inner()).unwrap_or_default();
        assert_eq!(
            output,
            "[flashlight] ON  background=#ff69b4\n[flashlight] OFF background=#000\n"
        );
    }

    #[test]
    fn recording_keeps_current_and_history() {
        let mut element = RecordingElement::new();
        element.set_text("ON");
        element.set_background("red");
        tokio_test::assert_ok!(element.flush());

        assert_eq!(element.text(), "ON");
        assert_eq!(element.background(), "red");
        assert_eq!(element.history(), &[("ON".to_string(), "red".to_string())]);
    }
}
