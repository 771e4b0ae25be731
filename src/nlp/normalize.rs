// Text normalization ahead of sentence splitting
use once_cell::sync::Lazy;
use regex::Regex;

static NOISE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,!?]").unwrap());

/// Flattens newlines to spaces and drops every character that is not a word
/// character, whitespace or one of `. , ! ?`. The result is trimmed.
pub fn clean_text(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    NOISE_PATTERN.replace_all(&flattened, "").trim().to_string()
}
