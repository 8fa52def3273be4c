//! Integration tests for the session's playback state machine
//!
//! Uses a scripted engine in place of the platform synthesizer, so the
//! Idle/Speaking transitions and voice selection can be verified without
//! audio hardware.

use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use vaani::config::Config;
use vaani::session::{Playback, Session};
use vaani::speech::{SpeechEngine, SpeechEvent, Utterance, Voice};

/// Counters shared between a test and its FakeEngine
#[derive(Default)]
struct EngineLog {
    spoken: Vec<Utterance>,
    cancels: usize,
    pauses: usize,
    resumes: usize,
}

/// Scripted speech engine: records submissions, reports whatever speaking
/// and paused flags the test sets
struct FakeEngine {
    voices: Vec<Voice>,
    log: Arc<Mutex<EngineLog>>,
    speaking: Arc<Mutex<bool>>,
    paused: Arc<Mutex<bool>>,
}

struct FakeHandles {
    log: Arc<Mutex<EngineLog>>,
    speaking: Arc<Mutex<bool>>,
    paused: Arc<Mutex<bool>>,
}

impl FakeEngine {
    fn new(voices: Vec<Voice>) -> (Self, FakeHandles) {
        let log = Arc::new(Mutex::new(EngineLog::default()));
        let speaking = Arc::new(Mutex::new(false));
        let paused = Arc::new(Mutex::new(false));
        let handles = FakeHandles {
            log: log.clone(),
            speaking: speaking.clone(),
            paused: paused.clone(),
        };
        (
            Self {
                voices,
                log,
                speaking,
                paused,
            },
            handles,
        )
    }
}

impl SpeechEngine for FakeEngine {
    fn voices(&self) -> vaani::Result<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    fn speak(&mut self, utterance: &Utterance) -> vaani::Result<()> {
        self.log.lock().unwrap().spoken.push(utterance.clone());
        Ok(())
    }

    fn cancel(&mut self) -> vaani::Result<()> {
        self.log.lock().unwrap().cancels += 1;
        *self.speaking.lock().unwrap() = false;
        Ok(())
    }

    fn pause(&mut self) -> vaani::Result<()> {
        self.log.lock().unwrap().pauses += 1;
        Ok(())
    }

    fn resume(&mut self) -> vaani::Result<()> {
        self.log.lock().unwrap().resumes += 1;
        Ok(())
    }

    fn is_speaking(&self) -> vaani::Result<bool> {
        Ok(*self.speaking.lock().unwrap())
    }

    fn is_paused(&self) -> vaani::Result<bool> {
        Ok(*self.paused.lock().unwrap())
    }

    fn drain_events(&mut self) -> Vec<SpeechEvent> {
        Vec::new()
    }
}

fn voice(id: &str, language: &str, name: &str) -> Voice {
    Voice {
        id: id.to_string(),
        name: name.to_string(),
        language: language.to_string(),
    }
}

fn sample_voices() -> Vec<Voice> {
    vec![
        voice("A", "en-US", "Google US English"),
        voice("B", "hi-IN", "Google हिन्दी"),
    ]
}

/// Session over a fake engine with an isolated config file
fn make_session(voices: Vec<Voice>) -> (Session, FakeHandles, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(dir.path().join("vaani.cfg")).expect("config");
    let (engine, handles) = FakeEngine::new(voices);
    let session = Session::new(Box::new(engine), config).expect("session");
    (session, handles, dir)
}

#[test]
fn test_default_voice_prefers_hindi_google() {
    let (session, _handles, _dir) = make_session(sample_voices());
    // Default selection is catalog-based, not text-based: Hindi wins
    assert_eq!(session.catalog.selected_id(), Some("B"));
}

#[test]
fn test_speak_blank_text_notifies_without_submission() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("   \t ");

    session.speak().unwrap();

    assert_eq!(session.playback(), Playback::Idle);
    assert!(handles.log.lock().unwrap().spoken.is_empty());
    let notices = session.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("enter some text"));
}

#[test]
fn test_speak_submits_with_selected_voice_and_params() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    assert!(session.select_voice(0)); // "A"
    session.adjust_rate(1); // 1.1
    session.adjust_volume(-1); // 0.9

    session.speak().unwrap();

    let log = handles.log.lock().unwrap();
    assert_eq!(log.spoken.len(), 1);
    let utterance = &log.spoken[0];
    assert_eq!(utterance.text, "Hello");
    assert_eq!(utterance.voice_id.as_deref(), Some("A"));
    assert!((utterance.rate - 1.1).abs() < 1e-6);
    assert!((utterance.volume - 0.9).abs() < 1e-6);

    // Still Idle: the Speaking transition waits for the platform's start
    // event, not submission
    assert_eq!(session.playback(), Playback::Idle);
}

#[test]
fn test_hindi_text_overrides_selected_voice_at_speak_time() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    assert!(session.select_voice(0)); // explicit English selection
    session.set_text("नमस्ते");

    session.speak().unwrap();

    let log = handles.log.lock().unwrap();
    assert_eq!(log.spoken[0].voice_id.as_deref(), Some("B"));
}

#[test]
fn test_started_event_transitions_to_speaking() {
    let (mut session, _handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    session.speak().unwrap();

    session.handle_event(SpeechEvent::Started);
    assert_eq!(session.playback(), Playback::Speaking);

    session.handle_event(SpeechEvent::Ended);
    assert_eq!(session.playback(), Playback::Idle);
}

#[test]
fn test_speak_while_speaking_toggles_to_stop() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    session.speak().unwrap();
    session.handle_event(SpeechEvent::Started);

    session.speak().unwrap();

    assert_eq!(session.playback(), Playback::Idle);
    let log = handles.log.lock().unwrap();
    // One cancel issued, no second utterance built
    assert_eq!(log.cancels, 1);
    assert_eq!(log.spoken.len(), 1);
}

#[test]
fn test_error_event_forces_idle_and_notifies() {
    let (mut session, _handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    session.speak().unwrap();
    session.handle_event(SpeechEvent::Started);

    session.handle_event(SpeechEvent::Errored("synthesis-failed".to_string()));

    assert_eq!(session.playback(), Playback::Idle);
    let notices = session.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("Error occurred"));
}

#[test]
fn test_stop_is_unconditional() {
    let (mut session, handles, _dir) = make_session(sample_voices());

    // Stop while Idle is a no-op transition but still cancels
    session.stop().unwrap();
    assert_eq!(session.playback(), Playback::Idle);

    session.set_text("Hello");
    session.speak().unwrap();
    session.handle_event(SpeechEvent::Started);
    session.stop().unwrap();
    assert_eq!(session.playback(), Playback::Idle);

    assert_eq!(handles.log.lock().unwrap().cancels, 2);
}

#[test]
fn test_clear_while_speaking_stops_and_empties_text() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    session.speak().unwrap();
    session.handle_event(SpeechEvent::Started);

    session.clear().unwrap();

    assert_eq!(session.text(), "");
    assert_eq!(session.playback(), Playback::Idle);
    assert_eq!(handles.log.lock().unwrap().cancels, 1);
}

#[test]
fn test_clear_while_idle_does_not_cancel() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");

    session.clear().unwrap();

    assert_eq!(session.text(), "");
    assert_eq!(handles.log.lock().unwrap().cancels, 0);
}

#[test]
fn test_pause_resume_delegates_to_platform_flags() {
    let (mut session, handles, _dir) = make_session(sample_voices());

    // Neither speaking nor paused: nothing happens
    session.pause_resume().unwrap();
    assert_eq!(handles.log.lock().unwrap().pauses, 0);
    assert_eq!(handles.log.lock().unwrap().resumes, 0);

    *handles.speaking.lock().unwrap() = true;
    session.pause_resume().unwrap();
    assert_eq!(handles.log.lock().unwrap().pauses, 1);

    *handles.speaking.lock().unwrap() = false;
    *handles.paused.lock().unwrap() = true;
    session.pause_resume().unwrap();
    assert_eq!(handles.log.lock().unwrap().resumes, 1);

    // Pausing never leaves the Speaking state to the session; there is no
    // distinct Paused state
    assert_eq!(session.playback(), Playback::Idle);
}

#[test]
fn test_load_samples_and_language_labels() {
    let (mut session, _handles, _dir) = make_session(sample_voices());

    assert!(session.load_sample(2));
    assert_eq!(
        session.detected_language().label(),
        "Mixed (Hindi + English)"
    );

    assert!(session.load_sample(1));
    assert_eq!(session.detected_language().label(), "Hindi");

    assert!(!session.load_sample(4));
}

#[test]
fn test_empty_catalog_speaks_with_platform_default() {
    let (mut session, handles, _dir) = make_session(Vec::new());
    session.set_text("Hello");

    session.speak().unwrap();

    let log = handles.log.lock().unwrap();
    assert_eq!(log.spoken.len(), 1);
    assert_eq!(log.spoken[0].voice_id, None);
}

#[test]
fn test_unwritable_config_does_not_break_adjustments() {
    // Config lives in a directory that disappears after startup, so every
    // save fails; the in-memory settings must still apply
    let dir = TempDir::new().expect("temp dir");
    let cfg_dir = dir.path().join("cfg");
    std::fs::create_dir(&cfg_dir).expect("cfg dir");
    let config = Config::load_from(cfg_dir.join("vaani.cfg")).expect("config");
    let (engine, handles) = FakeEngine::new(sample_voices());
    let mut session = Session::new(Box::new(engine), config).expect("session");
    std::fs::remove_dir_all(&cfg_dir).expect("remove cfg dir");

    session.adjust_volume(-1);
    assert!((session.params.volume - 0.9).abs() < 1e-6);
    session.adjust_rate(1);
    assert!((session.params.rate - 1.1).abs() < 1e-6);
    assert!(session.select_voice(0));
    assert_eq!(session.catalog.selected_id(), Some("A"));

    // The console keeps working end to end
    session.set_text("Hello");
    session.speak().unwrap();
    assert_eq!(handles.log.lock().unwrap().spoken.len(), 1);
}

#[test]
fn test_stale_started_after_stop_resolves_on_ended() {
    let (mut session, handles, _dir) = make_session(sample_voices());
    session.set_text("Hello");
    session.speak().unwrap();

    // User stops before the platform's start callback lands
    session.stop().unwrap();
    assert_eq!(session.playback(), Playback::Idle);
    assert_eq!(handles.log.lock().unwrap().cancels, 1);

    // Events apply as they arrive: the stale start flips to Speaking, and
    // the end the cancel produces settles the session back to Idle
    session.handle_event(SpeechEvent::Started);
    assert_eq!(session.playback(), Playback::Speaking);
    session.handle_event(SpeechEvent::Ended);
    assert_eq!(session.playback(), Playback::Idle);
}
