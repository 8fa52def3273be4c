//! Buffer handler for collecting line input
//!
//! Pushed onto the handler stack when the console needs a line from the
//! user (the text to speak, or a voice number). Keys are echoed manually
//! since the terminal is in raw mode.

use super::{HandlerAction, KeyHandler};
use crate::session::Session;
use crate::term;
use crate::Result;
use log::debug;

/// Callback invoked with the collected line when Enter is pressed
type OnAcceptFn = Box<dyn FnOnce(String, &mut Session) -> Result<()> + Send>;

/// Handler that collects text input until Enter is pressed.
///
/// Escape cancels without invoking the callback.
pub struct BufferHandler {
    buffer: String,
    on_accept: Option<OnAcceptFn>,
}

impl BufferHandler {
    pub fn new(on_accept: OnAcceptFn) -> Self {
        Self {
            buffer: String::new(),
            on_accept: Some(on_accept),
        }
    }
}

impl KeyHandler for BufferHandler {
    fn process(&mut self, key: &[u8], session: &mut Session) -> Result<HandlerAction> {
        match key {
            // Enter - accept input and invoke callback
            b"\r" | b"\n" => {
                debug!("BufferHandler: accepting input '{}'", self.buffer);
                term::write_line("");

                if let Some(callback) = self.on_accept.take() {
                    callback(self.buffer.clone(), session)?;
                }

                Ok(HandlerAction::Remove)
            }

            // Escape - cancel
            b"\x1b" => {
                debug!("BufferHandler: cancelled");
                term::write_line("");
                Ok(HandlerAction::Remove)
            }

            // Backspace - remove last character
            b"\x08" | b"\x7f" => {
                if self.buffer.pop().is_some() {
                    // Erase the character on screen
                    term::write_str("\x08 \x08");
                }
                Ok(HandlerAction::Handled)
            }

            // Regular input - append and echo
            _ => {
                if let Ok(s) = std::str::from_utf8(key) {
                    // Ignore control sequences, keep printable input
                    if !s.chars().any(|c| c.is_control()) {
                        self.buffer.push_str(s);
                        term::write_str(s);
                    }
                }
                Ok(HandlerAction::Handled)
            }
        }
    }
}
