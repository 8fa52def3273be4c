//! Script-based language detection
//!
//! Classifies input text as Hindi, English, or a mix of the two by testing
//! for Devanagari and Latin characters. This drives automatic voice
//! selection: Devanagari text should not be read by an English voice.

use once_cell::sync::Lazy;
use regex::Regex;

/// Devanagari block (U+0900-U+097F), the script Hindi is written in
static DEVANAGARI: Lazy<Regex> = Lazy::new(|| {
    // Pattern is a fixed character class, cannot fail to compile
    Regex::new("[\u{0900}-\u{097F}]").unwrap()
});

/// ASCII Latin letters
static LATIN: Lazy<Regex> = Lazy::new(|| Regex::new("[a-zA-Z]").unwrap());

/// Detected language of a piece of input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Mixed,
}

impl Language {
    /// User-facing label shown in the status line
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Mixed => "Mixed (Hindi + English)",
        }
    }

    /// BCP 47 primary subtag this language maps to for voice matching
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            // Mixed text is read by a Hindi voice, which handles both scripts
            Language::Hindi | Language::Mixed => "hi",
        }
    }
}

/// Classify text by the scripts it contains.
///
/// Text with neither Devanagari nor Latin characters (digits, punctuation,
/// other scripts) falls back to English. That misclassifies e.g. Cyrillic,
/// which is accepted: the heuristic only needs to tell Hindi from English.
pub fn classify(text: &str) -> Language {
    let has_devanagari = DEVANAGARI.is_match(text);
    let has_latin = LATIN.is_match(text);

    match (has_devanagari, has_latin) {
        (true, true) => Language::Mixed,
        (true, false) => Language::Hindi,
        (false, _) => Language::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_devanagari_is_hindi() {
        assert_eq!(classify("नमस्ते"), Language::Hindi);
        assert_eq!(classify("यह हिंदी है।"), Language::Hindi);
    }

    #[test]
    fn test_pure_latin_is_english() {
        assert_eq!(classify("Hello"), Language::English);
        assert_eq!(classify("The quick brown fox"), Language::English);
    }

    #[test]
    fn test_both_scripts_is_mixed() {
        assert_eq!(classify("Hello नमस्ते"), Language::Mixed);
        assert_eq!(
            classify("Hello नमस्ते, this is a mixed language test."),
            Language::Mixed
        );
    }

    #[test]
    fn test_neither_script_defaults_to_english() {
        assert_eq!(classify(""), Language::English);
        assert_eq!(classify("1234!?"), Language::English);
        // Known limitation: other scripts also fall through to English
        assert_eq!(classify("Привет"), Language::English);
        assert_eq!(classify("你好"), Language::English);
    }

    #[test]
    fn test_digits_around_devanagari_stay_hindi() {
        assert_eq!(classify("नमस्ते 123"), Language::Hindi);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::English.label(), "English");
        assert_eq!(Language::Hindi.label(), "Hindi");
        assert_eq!(Language::Mixed.label(), "Mixed (Hindi + English)");
    }

    #[test]
    fn test_voice_tags() {
        assert_eq!(Language::English.tag(), "en");
        assert_eq!(Language::Hindi.tag(), "hi");
        assert_eq!(Language::Mixed.tag(), "hi");
    }
}
