// Term weighting with each sentence treated as one document of the corpus.
// weight(t, s) = (count of t in s / terms in s) * ln(sentences / sentences containing t)
use std::collections::{HashMap, HashSet};

use super::sentences::Sentence;
use super::tokenize::{terms, whitespace_token_count};

/// Sentence-frequency table built once per document and only read afterwards.
#[derive(Debug, Clone)]
pub struct SentenceFrequencies {
    sentence_count: usize,
    containing: HashMap<String, usize>,
}

impl SentenceFrequencies {
    pub fn build<'a, I>(sentence_terms: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut sentence_count = 0;
        let mut containing: HashMap<String, usize> = HashMap::new();
        for toks in sentence_terms {
            sentence_count += 1;
            let mut seen: HashSet<&str> = HashSet::new();
            for t in toks {
                if seen.insert(t.as_str()) {
                    *containing.entry(t.clone()).or_insert(0) += 1;
                }
            }
        }
        Self {
            sentence_count,
            containing,
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Inverse sentence frequency; 0 for terms that appear nowhere.
    pub fn idf(&self, term: &str) -> f64 {
        match self.containing.get(term) {
            Some(&n) if n > 0 => (self.sentence_count as f64 / n as f64).ln(),
            _ => 0.0,
        }
    }

    pub fn weight(&self, term: &str, sentence_terms: &[String]) -> f64 {
        if sentence_terms.is_empty() {
            return 0.0;
        }
        let count = sentence_terms.iter().filter(|t| t.as_str() == term).count();
        let tf = count as f64 / sentence_terms.len() as f64;
        tf * self.idf(term)
    }
}

/// Scores every sentence by the summed weight of its terms, one contribution
/// per occurrence, divided by its whitespace token count.
pub fn score_sentences(sentences: &[Sentence<'_>]) -> Vec<f64> {
    let sentence_terms: Vec<Vec<String>> = sentences.iter().map(|s| terms(s.text)).collect();
    let table = SentenceFrequencies::build(sentence_terms.iter().map(Vec::as_slice));

    sentences
        .iter()
        .zip(sentence_terms.iter())
        .map(|(sentence, toks)| {
            let token_count = whitespace_token_count(sentence.text);
            if token_count == 0 {
                return 0.0;
            }
            let total: f64 = toks.iter().map(|t| table.weight(t, toks)).sum();
            total / token_count as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::sentences::split_sentences;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_sentence_frequency_table() {
        let docs = vec![
            owned(&["docker", "kubernetes", "docker"]),
            owned(&["docker", "container"]),
            owned(&["kubernetes", "pod"]),
        ];
        let table = SentenceFrequencies::build(docs.iter().map(Vec::as_slice));

        assert_eq!(table.sentence_count(), 3);
        assert!((table.idf("docker") - (3.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((table.idf("pod") - 3.0f64.ln()).abs() < 1e-12);
        assert_eq!(table.idf("nginx"), 0.0);
    }

    #[test]
    fn test_weight_matches_formula() {
        let docs = vec![owned(&["alpha", "beta", "alpha"]), owned(&["beta"])];
        let table = SentenceFrequencies::build(docs.iter().map(Vec::as_slice));

        let expected = (2.0 / 3.0) * 2.0f64.ln();
        assert!((table.weight("alpha", &docs[0]) - expected).abs() < 1e-12);
        // beta is in every sentence
        assert_eq!(table.weight("beta", &docs[0]), 0.0);
        assert_eq!(table.weight("alpha", &[]), 0.0);
    }

    #[test]
    fn test_scores_normalised_by_whitespace_tokens() {
        let text = "Rust is fast. Rust is safe 42 times.";
        let sentences: Vec<_> = split_sentences(text).collect();
        let scores = score_sentences(&sentences);

        let ln2 = 2.0f64.ln();
        // "fast": tf 1/3, only in sentence 0; 3 whitespace tokens
        assert!((scores[0] - (ln2 / 3.0) / 3.0).abs() < 1e-12);
        // "safe" and "times": tf 1/4 each; "42" counts toward the 5 tokens only
        assert!((scores[1] - (2.0 * ln2 / 4.0) / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_scores_are_non_negative_and_deterministic() {
        let text = "Cats purr. Dogs bark loudly. Cats and dogs play. Birds sing at dawn.";
        let sentences: Vec<_> = split_sentences(text).collect();
        let first = score_sentences(&sentences);
        let second = score_sentences(&sentences);

        assert_eq!(first, second);
        assert!(first.iter().all(|s| *s >= 0.0));
    }

    #[test]
    fn test_sentence_without_terms_scores_zero() {
        let text = "Numbers only 1 2 3. 123 456.";
        let sentences: Vec<_> = split_sentences(text).collect();
        let scores = score_sentences(&sentences);
        assert_eq!(scores[1], 0.0);
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn test_single_sentence_scores_zero() {
        let sentences: Vec<_> = split_sentences("Only one sentence here.").collect();
        assert_eq!(score_sentences(&sentences), vec![0.0]);
    }
}
