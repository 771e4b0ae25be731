// Sentence segmentation on terminator punctuation.
// A sentence is a run of non-terminators followed by one or more of `.`, `!`, `?`.
// Trailing text without a terminator is not a sentence.
use once_cell::sync::Lazy;
use regex::{Matches, Regex};

static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    /// 0-based position in document order
    pub index: usize,
}

/// Lazy iterator over the sentences of a cleaned text. Call
/// [`split_sentences`] again to restart from the beginning.
pub struct Sentences<'a> {
    matches: Matches<'static, 'a>,
    next_index: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matches.next()?;
        let sentence = Sentence {
            text: m.as_str().trim(),
            index: self.next_index,
        };
        self.next_index += 1;
        Some(sentence)
    }
}

pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences {
        matches: SENTENCE_PATTERN.find_iter(text),
        next_index: 0,
    }
}
