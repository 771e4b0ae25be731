// Conclusion detection on the final sentence only
use super::sentences::Sentence;

pub const DEFAULT_KEYWORDS: &[&str] = &["conclusion", "finally", "therefore", "thus", "in summary"];

/// Returns the last sentence when it contains one of `keywords`
/// (case-insensitive substring match), otherwise an empty string.
pub fn detect_conclusion<S: AsRef<str>>(sentences: &[Sentence<'_>], keywords: &[S]) -> String {
    let Some(last) = sentences.last() else {
        return String::new();
    };
    let lowered = last.text.to_lowercase();
    if keywords
        .iter()
        .any(|k| lowered.contains(&k.as_ref().to_lowercase()))
    {
        last.text.to_string()
    } else {
        String::new()
    }
}
