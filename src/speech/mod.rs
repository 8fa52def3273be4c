//! Speech synthesis system

pub mod backends;
pub mod catalog;
pub mod engine;

pub use catalog::{Voice, VoiceCatalog};
pub use engine::{create_engine, SpeechEngine, SpeechEvent, Utterance};
