//! Keyboard input handling

pub mod buffer_handler;
pub mod default_handler;
pub mod handler;
pub mod keymap;

pub use buffer_handler::BufferHandler;
pub use default_handler::DefaultKeyHandler;
pub use handler::{HandlerAction, HandlerStack, KeyHandler};
pub use keymap::{create_default_keymap, KeyAction};
