// Word, character and reading-time statistics for original and summary text.
// Character counts are Unicode scalar values, not UTF-8 bytes.
use serde::{Deserialize, Serialize};

use crate::nlp::tokenize::whitespace_token_count;

pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub original_words: usize,
    pub summary_words: usize,
    pub original_chars: usize,
    pub summary_chars: usize,
    pub reading_time: usize,
    pub summary_reading_time: usize,
}

impl Analysis {
    pub fn compare(original: &str, summary: &str, words_per_minute: usize) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(summary);
        Self {
            original_words,
            summary_words,
            original_chars: char_count(original),
            summary_chars: char_count(summary),
            reading_time: reading_time(original_words, words_per_minute),
            summary_reading_time: reading_time(summary_words, words_per_minute),
        }
    }

    /// Statistics for input that produced no summary: only the raw counts
    /// of the original survive, every derived figure is zero.
    pub fn original_only(original: &str) -> Self {
        Self {
            original_words: word_count(original),
            original_chars: char_count(original),
            ..Self::default()
        }
    }
}

pub fn word_count(text: &str) -> usize {
    whitespace_token_count(text.trim())
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Minutes needed to read `words`, rounded up. Zero words take zero minutes.
pub fn reading_time(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1))
}
