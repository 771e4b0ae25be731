// Word tokenization for scoring and topic extraction
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lowercased alphabetic terms of `text`. A word run containing a digit or
/// underscore is dropped whole rather than trimmed down to its letters.
pub fn terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(String::from)
        .collect()
}

/// Number of whitespace-delimited tokens, punctuation included.
pub fn whitespace_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_basic() {
        assert_eq!(
            terms("Hello World! This is a test."),
            vec!["hello", "world", "this", "is", "a", "test"]
        );
    }

    #[test]
    fn test_terms_discard_alphanumeric_tokens() {
        assert_eq!(terms("test123 hello 42 snake_case ok"), vec!["hello", "ok"]);
    }

    #[test]
    fn test_terms_split_on_punctuation() {
        assert_eq!(terms("don't stop-now"), vec!["don", "t", "stop", "now"]);
    }

    #[test]
    fn test_terms_empty() {
        assert!(terms("").is_empty());
        assert!(terms("123 456.").is_empty());
    }

    #[test]
    fn test_whitespace_token_count() {
        assert_eq!(whitespace_token_count("  one two,  three . "), 4);
        assert_eq!(whitespace_token_count(""), 0);
    }
}
