//! Sample texts for quick demonstration
//!
//! Loadable with the number keys; they cover the three classifier outcomes.

pub const SAMPLE_TEXTS: [&str; 4] = [
    "Hello, this is a test of English text to speech.",
    "नमस्ते, यह हिंदी टेक्स्ट टू स्पीच का टेस्ट है।",
    "Hello नमस्ते, this is a mixed language test.",
    "Welcome to our multilingual text to speech application.",
];

/// Short preview of a sample for the on-screen menu
pub fn preview(sample: &str) -> String {
    const LIMIT: usize = 30;
    let chars: Vec<char> = sample.chars().collect();
    if chars.len() > LIMIT {
        let head: String = chars[..LIMIT].iter().collect();
        format!("{}...", head)
    } else {
        sample.to_string()
    }
}
