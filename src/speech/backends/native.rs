//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to the platform stack:
//! Speech Dispatcher on Linux, AVFoundation on macOS, SAPI on Windows.
//! Utterance begin/end callbacks may fire on a platform thread, so they
//! are queued and drained on the UI thread.

use crate::speech::catalog::Voice;
use crate::speech::engine::{SpeechEngine, SpeechEvent, Utterance};
use crate::{Result, VaaniError};
use log::{debug, error, warn};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tts::Tts as TtsCrate;

/// Shared event queue filled by platform callbacks
type EventQueue = Arc<Mutex<VecDeque<SpeechEvent>>>;

fn push_event(queue: &EventQueue, event: SpeechEvent) {
    if let Ok(mut queue) = queue.lock() {
        queue.push_back(event);
    }
}

/// Native speech engine backed by the tts crate
pub struct NativeEngine {
    tts: TtsCrate,
    events: EventQueue,
}

impl NativeEngine {
    /// Initialize the platform synthesizer and register playback callbacks
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let mut tts = TtsCrate::default()
            .map_err(|e| VaaniError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        let events: EventQueue = Arc::new(Mutex::new(VecDeque::new()));

        let features = tts.supported_features();
        if features.utterance_callbacks {
            let queue = events.clone();
            tts.on_utterance_begin(Some(Box::new(move |_| {
                push_event(&queue, SpeechEvent::Started);
            })))
            .map_err(|e| VaaniError::Speech(format!("Failed to register callback: {}", e)))?;

            let queue = events.clone();
            tts.on_utterance_end(Some(Box::new(move |_| {
                push_event(&queue, SpeechEvent::Ended);
            })))
            .map_err(|e| VaaniError::Speech(format!("Failed to register callback: {}", e)))?;

            // A cancelled utterance also ends; the state machine treats both
            // the same way
            let queue = events.clone();
            tts.on_utterance_stop(Some(Box::new(move |_| {
                push_event(&queue, SpeechEvent::Ended);
            })))
            .map_err(|e| VaaniError::Speech(format!("Failed to register callback: {}", e)))?;
        } else {
            warn!("Platform does not report utterance callbacks");
        }

        debug!("Native TTS backend created successfully");

        Ok(Self { tts, events })
    }

    /// Map a 0.5-2.0 factor (1.0 = normal) onto the platform's range.
    ///
    /// The tts crate exposes platform-specific min/normal/max values; the
    /// lower half of the factor range interpolates min..normal, the upper
    /// half normal..max.
    fn scale_factor(factor: f32, min: f32, normal: f32, max: f32) -> f32 {
        let factor = factor.clamp(0.5, 2.0);
        if factor < 1.0 {
            normal - (normal - min) * (1.0 - factor) / 0.5
        } else {
            normal + (max - normal) * (factor - 1.0)
        }
    }

    fn apply_parameters(&mut self, utterance: &Utterance) -> Result<()> {
        let features = self.tts.supported_features();

        if features.rate {
            let rate = Self::scale_factor(
                utterance.rate,
                self.tts.min_rate(),
                self.tts.normal_rate(),
                self.tts.max_rate(),
            );
            self.tts
                .set_rate(rate)
                .map_err(|e| VaaniError::Speech(format!("Failed to set rate: {}", e)))?;
        } else {
            warn!("Rate control not supported on this platform");
        }

        if features.pitch {
            let pitch = Self::scale_factor(
                utterance.pitch,
                self.tts.min_pitch(),
                self.tts.normal_pitch(),
                self.tts.max_pitch(),
            );
            self.tts
                .set_pitch(pitch)
                .map_err(|e| VaaniError::Speech(format!("Failed to set pitch: {}", e)))?;
        } else {
            warn!("Pitch control not supported on this platform");
        }

        if features.volume {
            let min = self.tts.min_volume();
            let max = self.tts.max_volume();
            let volume = min + (max - min) * utterance.volume.clamp(0.0, 1.0);
            self.tts
                .set_volume(volume)
                .map_err(|e| VaaniError::Speech(format!("Failed to set volume: {}", e)))?;
        } else {
            warn!("Volume control not supported on this platform");
        }

        Ok(())
    }

    fn apply_voice(&mut self, voice_id: &str) -> Result<()> {
        if !self.tts.supported_features().voice {
            warn!("Voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| VaaniError::Speech(format!("Failed to get voices: {}", e)))?;

        if let Some(voice) = voices.iter().find(|v| v.id() == voice_id) {
            debug!("Selecting voice: {} ({})", voice.name(), voice.language());
            self.tts
                .set_voice(voice)
                .map_err(|e| VaaniError::Speech(format!("Failed to set voice: {}", e)))?;
        } else {
            warn!("Voice {} not found, keeping platform default", voice_id);
        }

        Ok(())
    }
}

impl SpeechEngine for NativeEngine {
    fn voices(&self) -> Result<Vec<Voice>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| VaaniError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(voices
            .into_iter()
            .map(|v| Voice {
                id: v.id().to_string(),
                name: v.name().to_string(),
                language: v.language().to_string(),
            })
            .collect())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        if utterance.text.is_empty() {
            return Ok(());
        }

        if let Some(ref voice_id) = utterance.voice_id {
            self.apply_voice(voice_id)?;
        }
        self.apply_parameters(utterance)?;

        debug!(
            "Speaking {} chars (rate {:.1}, pitch {:.1}, volume {:.1})",
            utterance.text.chars().count(),
            utterance.rate,
            utterance.pitch,
            utterance.volume
        );
        self.tts.speak(&utterance.text, true).map_err(|e| {
            error!("Failed to speak: {}", e);
            VaaniError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            VaaniError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        // The tts crate has no pause control; nothing to do but say so.
        // The session treats an unpausable platform as never paused.
        warn!("Pause not supported by this platform backend");
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        warn!("Resume not supported by this platform backend");
        Ok(())
    }

    fn is_speaking(&self) -> Result<bool> {
        if !self.tts.supported_features().is_speaking {
            return Ok(false);
        }
        self.tts
            .is_speaking()
            .map_err(|e| VaaniError::Speech(format!("Failed to query state: {}", e)))
    }

    fn is_paused(&self) -> Result<bool> {
        Ok(false)
    }

    fn drain_events(&mut self) -> Vec<SpeechEvent> {
        match self.events.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}
