//! Key handler system with modal input support
//!
//! The default handler maps single keys to console commands; text entry
//! pushes a modal buffer handler that intercepts keys until accepted or
//! cancelled.

use crate::session::Session;
use crate::Result;

/// Action to take after processing a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerAction {
    /// Key was handled, nothing more to do
    Handled,
    /// Remove this handler from the stack
    Remove,
    /// Exit the application
    Quit,
}

/// A key handler processes keyboard input against the session
pub trait KeyHandler {
    fn process(&mut self, key: &[u8], session: &mut Session) -> Result<HandlerAction>;
}

/// Stack of key handlers (last one processes input first)
#[derive(Default)]
pub struct HandlerStack {
    handlers: Vec<Box<dyn KeyHandler>>,
}

impl HandlerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handler: Box<dyn KeyHandler>) {
        self.handlers.push(handler);
    }

    pub fn pop(&mut self) -> Option<Box<dyn KeyHandler>> {
        self.handlers.pop()
    }

    /// Process a key with the top handler
    pub fn process(&mut self, key: &[u8], session: &mut Session) -> Result<HandlerAction> {
        if let Some(handler) = self.handlers.last_mut() {
            let action = handler.process(key, session)?;
            if action == HandlerAction::Remove {
                self.pop();
            }
            Ok(action)
        } else {
            Ok(HandlerAction::Handled)
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
