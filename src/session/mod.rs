//! Session state and playback control
//!
//! The Session is the central data structure of the console: it owns the
//! typed text, the playback parameters, the voice catalog, and the speech
//! engine, and it runs the Idle/Speaking state machine that the platform's
//! playback events drive.

pub mod params;
pub mod samples;

use crate::config::Config;
use crate::language::{classify, Language};
use crate::speech::{SpeechEngine, SpeechEvent, Utterance, VoiceCatalog};
use crate::Result;
use log::{debug, info, warn};
use self::params::PlaybackParams;

/// Playback state, driven by platform events.
///
/// There is no distinct Paused state; pausing is delegated entirely to the
/// platform's own pause flag and the session stays Speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Speaking,
}

/// Central application state for the console
pub struct Session {
    /// Configuration loaded from ~/.vaani.cfg
    pub config: Config,

    /// Speech engine, the injected platform dependency
    engine: Box<dyn SpeechEngine>,

    /// Snapshot of platform voices plus the user's selection
    pub catalog: VoiceCatalog,

    /// Text to be spoken, free-form
    text: String,

    /// Idle or Speaking
    playback: Playback,

    /// Rate, pitch, volume as the user set them
    pub params: PlaybackParams,

    /// User-facing notices pending display (the console's stand-in for a
    /// blocking alert dialog)
    notices: Vec<String>,
}

impl Session {
    /// Create a session around an engine, loading defaults from config
    pub fn new(engine: Box<dyn SpeechEngine>, config: Config) -> Result<Self> {
        let mut session = Self {
            engine,
            config,
            catalog: VoiceCatalog::new(),
            text: String::new(),
            playback: Playback::Idle,
            params: PlaybackParams::default(),
            notices: Vec::new(),
        };

        session.params.set_rate(session.config.rate());
        session.params.set_pitch(session.config.pitch());
        session.params.set_volume(session.config.volume());

        session.refresh_voices()?;

        // A configured voice preference overrides the catalog default
        if let Some(voice_id) = session.config.voice_id() {
            if session.catalog.select(&voice_id) {
                info!("Configured voice selected: {}", voice_id);
            } else {
                warn!("Configured voice {} not available", voice_id);
            }
        }

        Ok(session)
    }

    // ========== Text ==========

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Load one of the built-in sample texts (0-based)
    pub fn load_sample(&mut self, index: usize) -> bool {
        if let Some(sample) = samples::SAMPLE_TEXTS.get(index) {
            self.text = sample.to_string();
            true
        } else {
            false
        }
    }

    /// Reset text to empty; stops playback first if speaking
    pub fn clear(&mut self) -> Result<()> {
        if self.playback == Playback::Speaking {
            self.stop()?;
        }
        self.text.clear();
        Ok(())
    }

    /// Language of the current text, per the script heuristic
    pub fn detected_language(&self) -> Language {
        classify(&self.text)
    }

    // ========== Playback ==========

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Speak the current text, or stop if already speaking.
    ///
    /// Blank text produces a notice and no submission. The transition to
    /// Speaking is driven by the platform's start event, not by submission.
    pub fn speak(&mut self) -> Result<()> {
        if self.text.trim().is_empty() {
            self.notify("Please enter some text to speak");
            return Ok(());
        }

        if self.playback == Playback::Speaking {
            return self.stop();
        }

        let voice_id = self
            .catalog
            .voice_for_text(&self.text)
            .map(|v| v.id.clone());
        if voice_id.is_none() {
            debug!("No voice available, platform default will be used");
        }

        let utterance = Utterance {
            text: self.text.clone(),
            voice_id,
            rate: self.params.rate,
            pitch: self.params.pitch,
            volume: self.params.volume,
        };

        debug!("Submitting utterance");
        if let Err(e) = self.engine.speak(&utterance) {
            // A failed utterance is discarded; the user re-triggers speak
            self.playback = Playback::Idle;
            self.notify("Error occurred while speaking. Please try again.");
            warn!("Submission failed: {}", e);
        }

        Ok(())
    }

    /// Unconditionally cancel playback and force Idle
    pub fn stop(&mut self) -> Result<()> {
        self.engine.cancel()?;
        self.playback = Playback::Idle;
        Ok(())
    }

    /// Pause if the platform is speaking, resume if it is paused
    pub fn pause_resume(&mut self) -> Result<()> {
        if self.engine.is_speaking()? {
            debug!("Pausing playback");
            self.engine.pause()
        } else if self.engine.is_paused()? {
            debug!("Resuming playback");
            self.engine.resume()
        } else {
            Ok(())
        }
    }

    /// Apply one platform playback event to the state machine
    pub fn handle_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started => {
                debug!("Utterance started");
                self.playback = Playback::Speaking;
            }
            SpeechEvent::Ended => {
                debug!("Utterance ended");
                self.playback = Playback::Idle;
            }
            SpeechEvent::Errored(reason) => {
                warn!("Speech synthesis error: {}", reason);
                self.playback = Playback::Idle;
                self.notify("Error occurred while speaking. Please try again.");
            }
        }
    }

    /// Drain and apply all pending platform events
    pub fn poll_events(&mut self) {
        for event in self.engine.drain_events() {
            self.handle_event(event);
        }
    }

    // ========== Voices ==========

    /// Re-enumerate platform voices (keeps any existing selection)
    pub fn refresh_voices(&mut self) -> Result<()> {
        self.catalog.refresh(self.engine.as_ref())
    }

    /// Select a voice by its listed position; persists the choice
    pub fn select_voice(&mut self, index: usize) -> bool {
        let picked = self.catalog.select_index(index).map(|v| v.id.clone());
        match picked {
            Some(id) => {
                self.persist("voice", &id);
                true
            }
            None => false,
        }
    }

    // ========== Parameters ==========

    /// Step a parameter; the new value applies even when persisting fails
    pub fn adjust_rate(&mut self, direction: i32) {
        self.params.step_rate(direction);
        self.persist("rate", &format!("{:.1}", self.params.rate));
    }

    pub fn adjust_pitch(&mut self, direction: i32) {
        self.params.step_pitch(direction);
        self.persist("pitch", &format!("{:.1}", self.params.pitch));
    }

    pub fn adjust_volume(&mut self, direction: i32) {
        self.params.step_volume(direction);
        self.persist("volume", &format!("{:.1}", self.params.volume));
    }

    /// Write one setting back to the config file.
    ///
    /// Persistence is a convenience, never load-bearing: an unwritable
    /// config file must not take down the console, so save failures are
    /// logged and the in-memory setting stands.
    fn persist(&mut self, key: &str, value: &str) {
        self.config.set("playback", key, value);
        if let Err(e) = self.config.save() {
            warn!("Failed to persist {}={}: {}", key, value, e);
        }
    }

    // ========== Notices ==========

    /// Queue a user-facing notice.
    ///
    /// The original form used a blocking alert dialog; the console prints
    /// the notice on the next loop turn instead, which keeps the same
    /// user-visible signal without blocking event dispatch.
    pub fn notify(&mut self, message: &str) {
        info!("Notice: {}", message);
        self.notices.push(message.to_string());
    }

    /// Take pending notices for display
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// One-line status summary for the console
    pub fn status_line(&self) -> String {
        let voice = self
            .catalog
            .selected_voice()
            .map(|v| format!("{} ({})", v.name, v.language))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Speed {:.1}x | Pitch {:.1} | Volume {}% | Voice: {} | Language: {}",
            self.params.rate,
            self.params.pitch,
            self.params.volume_percent(),
            voice,
            self.detected_language().label()
        )
    }
}
