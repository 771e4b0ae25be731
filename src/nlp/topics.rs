// Topic extraction by raw term frequency
use std::collections::HashMap;

use super::stopwords::StopWords;
use super::tokenize::terms;

/// Returns up to `k` non-stopword terms of `text`, most frequent first.
/// Equal counts keep the order in which the terms first appeared.
pub fn main_topics(text: &str, stopwords: &StopWords, k: usize) -> Vec<String> {
    // term -> (first position, count)
    let mut freq: HashMap<String, (usize, usize)> = HashMap::new();
    for (pos, term) in terms(text).into_iter().enumerate() {
        if stopwords.contains(&term) {
            continue;
        }
        freq.entry(term).or_insert((pos, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = freq
        .into_iter()
        .map(|(term, (first, count))| (term, first, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    ranked.into_iter().take(k).map(|(term, _, _)| term).collect()
}
