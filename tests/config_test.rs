//! Integration tests for configuration loading and persistence

use tempfile::TempDir;
use vaani::config::Config;

#[test]
fn test_first_run_creates_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vaani.cfg");

    let config = Config::load_from(path.clone()).unwrap();

    assert!(path.exists(), "config file should be created");
    assert_eq!(config.rate(), 1.0);
    assert_eq!(config.pitch(), 1.0);
    assert_eq!(config.volume(), 1.0);
    assert_eq!(config.voice_id(), None);
}

#[test]
fn test_settings_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vaani.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("playback", "rate", "1.5");
    config.set("playback", "volume", "0.7");
    config.set("playback", "voice", "hi-IN-voice-3");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.rate(), 1.5);
    assert_eq!(reloaded.volume(), 0.7);
    assert_eq!(reloaded.voice_id().as_deref(), Some("hi-IN-voice-3"));
}

#[test]
fn test_out_of_range_values_clamp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vaani.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("playback", "rate", "99");
    config.set("playback", "pitch", "0.01");
    config.set("playback", "volume", "-3");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.rate(), 2.0);
    assert_eq!(reloaded.pitch(), 0.5);
    assert_eq!(reloaded.volume(), 0.0);
}

#[test]
fn test_garbage_values_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vaani.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("playback", "rate", "fast");
    config.set("playback", "voice", "");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.rate(), 1.0);
    assert_eq!(reloaded.voice_id(), None);
}
