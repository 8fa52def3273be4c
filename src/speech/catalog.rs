//! Voice catalog
//!
//! Read-only snapshot of the platform's synthesis voices, plus the user's
//! current selection and the rules for picking a voice automatically.

use crate::language::{classify, Language};
use crate::speech::engine::SpeechEngine;
use crate::Result;
use log::{debug, info};

/// A platform-provided synthesis voice.
///
/// The name doubles as the provenance label: platform voices carry their
/// engine branding in it (e.g. "Google हिन्दी"), which the default-selection
/// rules use as a substring filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub id: String,
    pub name: String,
    /// BCP 47 language tag, e.g. "en-US" or "hi-IN"
    pub language: String,
}

impl Voice {
    /// Does this voice speak the language with the given primary subtag?
    pub fn speaks(&self, tag: &str) -> bool {
        self.language.starts_with(tag)
    }

    /// Is this a Google-branded voice?
    ///
    /// Google voices are preferred because they handle Devanagari well.
    pub fn is_google(&self) -> bool {
        self.name.contains("Google")
    }
}

/// Ordered snapshot of platform voices plus the current selection
#[derive(Debug, Default)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
    selected: Option<String>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-enumerate voices from the platform.
    ///
    /// Overwrites the snapshot; an existing selection is kept (even if the
    /// voice vanished, selection falls back at speak time). When nothing is
    /// selected yet, applies the default-selection precedence.
    pub fn refresh(&mut self, engine: &dyn SpeechEngine) -> Result<()> {
        let voices = engine.voices()?;
        info!("Voice catalog refreshed: {} voices", voices.len());
        self.replace(voices);
        Ok(())
    }

    /// Replace the snapshot directly (refresh with a pre-built list)
    pub fn replace(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
        if self.selected.is_none() {
            if let Some(voice) = self.default_voice() {
                info!("Default voice: {} ({})", voice.name, voice.language);
                self.selected = Some(voice.id.clone());
            }
        }
    }

    /// Default-selection precedence, first match wins:
    /// Hindi Google voice, then English Google voice, then any voice.
    fn default_voice(&self) -> Option<&Voice> {
        let rules: [&dyn Fn(&Voice) -> bool; 3] = [
            &|v: &Voice| v.speaks("hi") && v.is_google(),
            &|v: &Voice| v.speaks("en") && v.is_google(),
            &|_: &Voice| true,
        ];
        rules
            .iter()
            .find_map(|rule| self.voices.iter().find(|v| rule(v)))
    }

    /// Pick the voice to read `text` with.
    ///
    /// Hindi or mixed text goes to a Hindi Google voice when one exists,
    /// overriding the user's selection; an English voice would mangle the
    /// Devanagari. Otherwise the selected voice, otherwise the first entry.
    /// Empty catalog yields None.
    pub fn voice_for_text(&self, text: &str) -> Option<&Voice> {
        let language = classify(text);

        if matches!(language, Language::Hindi | Language::Mixed) {
            if let Some(voice) = self
                .voices
                .iter()
                .find(|v| v.speaks("hi") && v.is_google())
            {
                debug!("Hindi text, overriding selection with {}", voice.name);
                return Some(voice);
            }
        }

        self.selected
            .as_deref()
            .and_then(|id| self.voices.iter().find(|v| v.id == id))
            .or_else(|| self.voices.first())
    }

    /// Select a voice by id; returns false if it is not in the snapshot
    pub fn select(&mut self, id: &str) -> bool {
        if self.voices.iter().any(|v| v.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Select a voice by its position in the snapshot (as listed to the user)
    pub fn select_index(&mut self, index: usize) -> Option<&Voice> {
        if index < self.voices.len() {
            self.selected = Some(self.voices[index].id.clone());
            Some(&self.voices[index])
        } else {
            None
        }
    }

    /// Currently selected voice id, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Currently selected voice, if it is still in the snapshot
    pub fn selected_voice(&self) -> Option<&Voice> {
        self.selected
            .as_deref()
            .and_then(|id| self.voices.iter().find(|v| v.id == id))
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
