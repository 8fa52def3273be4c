//! Default key handler for the console
//!
//! Maps single keys to console commands: playback control, text entry,
//! sample loading, voice selection, and parameter adjustment.

use super::{BufferHandler, HandlerAction, KeyAction};
use crate::session::{samples, Playback, Session};
use crate::term;
use crate::Result;
use log::{debug, trace};
use std::collections::HashMap;

/// Default key handler holding the console keymap
pub struct DefaultKeyHandler {
    keymap: HashMap<Vec<u8>, KeyAction>,
}

impl DefaultKeyHandler {
    pub fn new(keymap: HashMap<Vec<u8>, KeyAction>) -> Self {
        debug!("Creating default key handler with {} bindings", keymap.len());
        Self { keymap }
    }

    /// Process a key against the console bindings.
    ///
    /// Returns the buffer handler to push when the command needs line
    /// input (text entry, voice number).
    pub fn process_key(
        &mut self,
        key: &[u8],
        session: &mut Session,
    ) -> Result<(HandlerAction, Option<BufferHandler>)> {
        if let Some(action) = self.keymap.get(key).copied() {
            trace!("Key action: {:?}", action);
            self.execute_action(action, session)
        } else {
            Ok((HandlerAction::Handled, None))
        }
    }

    fn execute_action(
        &mut self,
        action: KeyAction,
        session: &mut Session,
    ) -> Result<(HandlerAction, Option<BufferHandler>)> {
        match action {
            KeyAction::SpeakOrStop => {
                let was_speaking = session.playback() == Playback::Speaking;
                session.speak()?;
                if was_speaking {
                    term::write_line("Stopped.");
                }
            }

            KeyAction::Stop => {
                session.stop()?;
                term::write_line("Stopped.");
            }

            KeyAction::PauseResume => {
                session.pause_resume()?;
            }

            KeyAction::Clear => {
                session.clear()?;
                term::write_line("Text cleared.");
            }

            KeyAction::EnterText => {
                term::write_str("Text: ");
                let handler = BufferHandler::new(Box::new(|input: String, session: &mut Session| {
                    session.set_text(&input);
                    term::write_line(&format!(
                        "Detected language: {}",
                        session.detected_language().label()
                    ));
                    Ok(())
                }));
                return Ok((HandlerAction::Handled, Some(handler)));
            }

            KeyAction::LoadSample(index) => {
                if session.load_sample(index) {
                    term::write_line(&format!("Sample {}: {}", index + 1, session.text()));
                    term::write_line(&format!(
                        "Detected language: {}",
                        session.detected_language().label()
                    ));
                }
            }

            KeyAction::ListVoices => {
                session.refresh_voices()?;
                Self::print_voices(session);
            }

            KeyAction::ChooseVoice => {
                session.refresh_voices()?;
                Self::print_voices(session);
                term::write_str("Voice number: ");
                let handler = BufferHandler::new(Box::new(|input: String, session: &mut Session| {
                    let number = input.trim().parse::<usize>().ok().filter(|&n| n >= 1);
                    let selected = match number {
                        Some(n) => session.select_voice(n - 1),
                        None => false,
                    };
                    if selected {
                        term::write_line(&format!(
                            "Voice: {}",
                            session
                                .catalog
                                .selected_voice()
                                .map(|v| v.name.as_str())
                                .unwrap_or("none")
                        ));
                    } else {
                        term::write_line("Invalid voice number.");
                    }
                    Ok(())
                }));
                return Ok((HandlerAction::Handled, Some(handler)));
            }

            KeyAction::RefreshVoices => {
                session.refresh_voices()?;
                term::write_line(&format!("{} voices available.", session.catalog.len()));
            }

            KeyAction::RateUp => {
                session.adjust_rate(1);
                term::write_line(&format!("Speed: {:.1}x", session.params.rate));
            }
            KeyAction::RateDown => {
                session.adjust_rate(-1);
                term::write_line(&format!("Speed: {:.1}x", session.params.rate));
            }
            KeyAction::PitchUp => {
                session.adjust_pitch(1);
                term::write_line(&format!("Pitch: {:.1}", session.params.pitch));
            }
            KeyAction::PitchDown => {
                session.adjust_pitch(-1);
                term::write_line(&format!("Pitch: {:.1}", session.params.pitch));
            }
            KeyAction::VolumeUp => {
                session.adjust_volume(1);
                term::write_line(&format!("Volume: {}%", session.params.volume_percent()));
            }
            KeyAction::VolumeDown => {
                session.adjust_volume(-1);
                term::write_line(&format!("Volume: {}%", session.params.volume_percent()));
            }

            KeyAction::Status => {
                term::write_line(&session.status_line());
            }

            KeyAction::Help => {
                Self::print_help();
            }

            KeyAction::Quit => {
                return Ok((HandlerAction::Quit, None));
            }
        }

        Ok((HandlerAction::Handled, None))
    }

    fn print_voices(session: &Session) {
        if session.catalog.is_empty() {
            term::write_line("No voices available.");
            return;
        }
        let selected = session.catalog.selected_id();
        for (i, voice) in session.catalog.voices().iter().enumerate() {
            let marker = if Some(voice.id.as_str()) == selected {
                "*"
            } else {
                " "
            };
            term::write_line(&format!(
                "{} {:2}. {} ({})",
                marker,
                i + 1,
                voice.name,
                voice.language
            ));
        }
    }

    fn print_help() {
        term::write_line("Keys:");
        term::write_line("  t        enter text          1-4      load sample text");
        term::write_line("  s/Enter  speak or stop       x        stop");
        term::write_line("  p        pause/resume        c        clear text");
        term::write_line("  v        list voices         V        choose voice");
        term::write_line("  r        refresh voices      l        status line");
        term::write_line("  [ ]      speed -/+           { }      pitch -/+");
        term::write_line("  - =      volume -/+          q        quit");
        for (i, sample) in samples::SAMPLE_TEXTS.iter().enumerate() {
            term::write_line(&format!("  {}: {}", i + 1, samples::preview(sample)));
        }
    }
}
