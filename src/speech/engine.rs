//! Speech engine abstraction
//!
//! Narrow interface over the platform speech stack: enumerate voices,
//! submit one utterance, cancel, pause/resume, query state. The session
//! only talks to this trait, so tests can substitute a scripted fake for
//! the real synthesizer.

use crate::speech::catalog::Voice;
use crate::Result;
use log::info;

/// One discrete synthesis request: text plus voice and delivery parameters.
///
/// Rate and pitch are factors where 1.0 is the platform's normal delivery
/// (UI range 0.5-2.0). Volume is 0.0-1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Platform voice id; None lets the platform pick its default
    pub voice_id: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Asynchronous notifications from the platform about the active utterance.
///
/// These are the only asynchronous boundaries in the program; the session's
/// playback state machine is driven exclusively by them.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// The utterance began audibly
    Started,
    /// The utterance completed normally
    Ended,
    /// The utterance was aborted by the platform
    Errored(String),
}

/// Platform speech capability, injected into the session
///
/// Implementations serialize at most one active utterance; `speak` while
/// something is playing replaces it.
pub trait SpeechEngine {
    /// Enumerate available voices in platform order
    fn voices(&self) -> Result<Vec<Voice>>;

    /// Submit an utterance for asynchronous playback
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Cancel any in-flight or queued utterance
    fn cancel(&mut self) -> Result<()>;

    /// Pause the active utterance, if the platform supports it
    fn pause(&mut self) -> Result<()>;

    /// Resume a paused utterance
    fn resume(&mut self) -> Result<()>;

    /// Is the platform currently producing audio?
    fn is_speaking(&self) -> Result<bool>;

    /// Is the platform paused mid-utterance?
    fn is_paused(&self) -> Result<bool>;

    /// Take all pending playback events, oldest first.
    ///
    /// Platform callbacks may fire on a background thread; backends queue
    /// them so the session consumes events on the UI thread only.
    fn drain_events(&mut self) -> Vec<SpeechEvent>;
}

/// Create the platform speech engine.
///
/// Fails when no synthesizer is available (no Speech Dispatcher on Linux,
/// for example); the caller degrades to a static error message instead of
/// starting the console.
pub fn create_engine() -> Result<Box<dyn SpeechEngine>> {
    use super::backends::native::NativeEngine;

    info!(
        "Creating native speech engine for platform: {}",
        std::env::consts::OS
    );

    let engine = NativeEngine::new()?;
    Ok(Box::new(engine))
}
