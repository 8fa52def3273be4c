//! Integration tests for the language heuristic
//!
//! Exercises the classifier over whole character ranges, not just samples.

use vaani::language::{classify, Language};

#[test]
fn test_every_devanagari_char_classifies_as_hindi() {
    for code in 0x0900..=0x097F_u32 {
        if let Some(ch) = char::from_u32(code) {
            let text = ch.to_string();
            assert_eq!(
                classify(&text),
                Language::Hindi,
                "U+{:04X} should classify as Hindi",
                code
            );
        }
    }
}

#[test]
fn test_every_latin_letter_classifies_as_english() {
    for ch in ('a'..='z').chain('A'..='Z') {
        assert_eq!(classify(&ch.to_string()), Language::English);
    }
}

#[test]
fn test_any_devanagari_with_any_latin_is_mixed() {
    for dev in ["क", "ॐ", "ह"] {
        for lat in ["a", "Z", "hello"] {
            let text = format!("{} {}", dev, lat);
            assert_eq!(classify(&text), Language::Mixed, "text: {}", text);
        }
    }
}

#[test]
fn test_digits_and_punctuation_default_to_english() {
    for text in ["", " ", "0123456789", "!@#$%^&*()"] {
        assert_eq!(classify(text), Language::English, "text: {:?}", text);
    }
}

#[test]
fn test_danda_counts_as_devanagari() {
    // U+0964 sits inside the Devanagari block, so punctuation-only Hindi
    // text still classifies as Hindi
    assert_eq!(classify("।"), Language::Hindi);
}

#[test]
fn test_mixed_scenario_label() {
    let text = "Hello नमस्ते, this is a mixed language test.";
    let language = classify(text);
    assert_eq!(language, Language::Mixed);
    assert_eq!(language.label(), "Mixed (Hindi + English)");
}
