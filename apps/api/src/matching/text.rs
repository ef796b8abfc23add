//! Text normalization shared by the scorer and the summarizer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens are maximal runs of word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("token pattern is valid"));

/// Lowercases `text` and splits it into word tokens. Whitespace and
/// punctuation never form tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts token occurrences in `text`.
pub fn term_frequencies(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Builds a short preview from the first three sentences of `text`.
pub fn summarize(text: &str) -> String {
    if text.trim().is_empty() {
        return "No content extracted.".to_string();
    }
    let sentences: Vec<&str> = text.split(". ").take(3).collect();
    format!("{}...", sentences.join("... "))
}
