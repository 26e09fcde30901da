//! Console session: reads one line per iteration and presses buttons.
//!
//! Accepted input, surrounding whitespace ignored:
//! - `undo` (any case): press the undo button, then print the current status
//! - an integer in `0..=6`: press that slot's on button, then print the
//!   remote listing and the current status
//!
//! Anything else is reported and the loop carries on. The session ends when
//! the reader reaches end of input.

use std::io::BufRead;

use homeremote_domain::error::RemoteError;
use homeremote_domain::feedback::SharedFeedback;

use crate::remote_control::{RemoteControl, SLOT_COUNT};

/// One parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Press the undo button.
    Undo,
    /// Press the on button of a slot.
    Press(usize),
}

impl Input {
    /// Parse a console line.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SlotOutOfRange`] for integers outside the slot
    /// range and [`InputError::Unrecognized`] for anything else.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("undo") {
            return Ok(Self::Undo);
        }

        let value: i64 = line
            .parse()
            .map_err(|_| InputError::Unrecognized(line.to_string()))?;
        usize::try_from(value)
            .ok()
            .filter(|slot| *slot < SLOT_COUNT)
            .map(Self::Press)
            .ok_or(InputError::SlotOutOfRange(value))
    }
}

/// Why a console line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Neither `undo` nor an integer.
    #[error("unrecognized input {0:?}")]
    Unrecognized(String),

    /// An integer outside the slot range.
    #[error("slot {0} is out of range")]
    SlotOutOfRange(i64),
}

impl From<RemoteError> for InputError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::SlotOutOfRange { slot, .. } => {
                Self::SlotOutOfRange(i64::try_from(slot).unwrap_or(i64::MAX))
            }
        }
    }
}

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading the next line failed.
    #[error("failed to read console input")]
    Read(#[from] std::io::Error),
}

/// Console front-end around a [`RemoteControl`].
pub struct Session {
    remote: RemoteControl,
    feedback: SharedFeedback,
}

impl Session {
    /// Create a session driving `remote` and printing to `feedback`.
    pub fn new(remote: RemoteControl, feedback: SharedFeedback) -> Self {
        Self { remote, feedback }
    }

    /// The remote driven by this session.
    #[must_use]
    pub fn remote(&self) -> &RemoteControl {
        &self.remote
    }

    /// Print the remote listing, the current status and the prompt.
    pub fn start(&self) {
        self.print_listing();
        self.print_status();
        self.feedback.emit(&format!(
            "Enter command (0-{}) or 'undo':",
            SLOT_COUNT - 1
        ));
    }

    /// Parse and dispatch a single line.
    ///
    /// # Errors
    ///
    /// Returns the [`InputError`] when the line is rejected; nothing was
    /// pressed in that case.
    pub fn handle_line(&mut self, line: &str) -> Result<Input, InputError> {
        let input = Input::parse(line)?;
        match input {
            Input::Undo => {
                self.remote.undo_pressed();
                self.feedback.emit("");
                self.print_status();
            }
            Input::Press(slot) => {
                self.remote.on_button_pressed(slot)?;
                self.print_listing();
                self.print_status();
            }
        }
        Ok(input)
    }

    /// Run [`start`](Self::start), then dispatch every line of `reader`
    /// until end of input.
    ///
    /// Lines are decoded lossily: bytes that are not valid UTF-8 make the
    /// line unrecognized instead of ending the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Read`] if reading from `reader` fails.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<(), SessionError> {
        self.start();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Err(err) = self.handle_line(&line) {
                tracing::warn!(%err, "rejected console input");
                self.feedback.emit(&format!(
                    "Invalid input. Please enter a number (0-{}) or 'undo'.",
                    SLOT_COUNT - 1
                ));
            }
        }
        tracing::info!("end of input, leaving session");
        Ok(())
    }

    fn print_listing(&self) {
        self.feedback.emit("");
        self.feedback.emit(&self.remote.to_string());
    }

    fn print_status(&self) {
        self.feedback.emit(&self.remote.current_status());
    }
}
