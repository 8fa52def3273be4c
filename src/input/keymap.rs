//! Default key bindings for the console

use std::collections::HashMap;

/// Key sequence type
pub type KeySequence = Vec<u8>;

/// Console commands that can be triggered by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Speak the current text, or stop if already speaking
    SpeakOrStop,
    /// Stop playback unconditionally
    Stop,
    /// Pause or resume, depending on what the platform reports
    PauseResume,
    /// Clear the text (stops playback first)
    Clear,

    /// Enter new text to speak
    EnterText,
    /// Load one of the built-in sample texts (0-based)
    LoadSample(usize),

    /// List available voices
    ListVoices,
    /// Choose a voice by number
    ChooseVoice,
    /// Re-enumerate platform voices
    RefreshVoices,

    /// Parameter adjustment, one 0.1 step at a time
    RateUp,
    RateDown,
    PitchUp,
    PitchDown,
    VolumeUp,
    VolumeDown,

    /// Show the status line (params, voice, detected language)
    Status,
    /// Show key help
    Help,
    /// Exit
    Quit,
}

/// Create the default keymap
pub fn create_default_keymap() -> HashMap<KeySequence, KeyAction> {
    let mut map = HashMap::new();

    // Playback
    map.insert(b"s".to_vec(), KeyAction::SpeakOrStop);
    map.insert(b"\r".to_vec(), KeyAction::SpeakOrStop);
    map.insert(b"\n".to_vec(), KeyAction::SpeakOrStop);
    map.insert(b"x".to_vec(), KeyAction::Stop);
    map.insert(b"p".to_vec(), KeyAction::PauseResume);
    map.insert(b"c".to_vec(), KeyAction::Clear);

    // Text
    map.insert(b"t".to_vec(), KeyAction::EnterText);
    map.insert(b"1".to_vec(), KeyAction::LoadSample(0));
    map.insert(b"2".to_vec(), KeyAction::LoadSample(1));
    map.insert(b"3".to_vec(), KeyAction::LoadSample(2));
    map.insert(b"4".to_vec(), KeyAction::LoadSample(3));

    // Voices
    map.insert(b"v".to_vec(), KeyAction::ListVoices);
    map.insert(b"V".to_vec(), KeyAction::ChooseVoice);
    map.insert(b"r".to_vec(), KeyAction::RefreshVoices);

    // Parameters
    map.insert(b"]".to_vec(), KeyAction::RateUp);
    map.insert(b"[".to_vec(), KeyAction::RateDown);
    map.insert(b"}".to_vec(), KeyAction::PitchUp);
    map.insert(b"{".to_vec(), KeyAction::PitchDown);
    map.insert(b"=".to_vec(), KeyAction::VolumeUp);
    map.insert(b"+".to_vec(), KeyAction::VolumeUp);
    map.insert(b"-".to_vec(), KeyAction::VolumeDown);

    // Misc
    map.insert(b"l".to_vec(), KeyAction::Status);
    map.insert(b"h".to_vec(), KeyAction::Help);
    map.insert(b"?".to_vec(), KeyAction::Help);
    map.insert(b"q".to_vec(), KeyAction::Quit);
    // Ctrl+C
    map.insert(b"\x03".to_vec(), KeyAction::Quit);

    map
}
