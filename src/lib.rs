//! vaani - An interactive terminal text-to-speech console
//!
//! Reads typed Hindi and English text aloud through the platform speech
//! stack, picking a voice to match the script the user typed in.

pub mod config;
pub mod error;
pub mod input;
pub mod language;
pub mod session;
pub mod speech;
pub mod term;

pub use error::{Result, VaaniError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "vaani";
