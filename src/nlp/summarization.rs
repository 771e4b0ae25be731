// Extractive summarization: score sentences by term weight, keep the best
// fraction and put them back in document order.
use tracing::{debug, warn};

use super::conclusion::detect_conclusion;
use super::normalize::clean_text;
use super::sentences::{split_sentences, Sentence};
use super::tfidf::score_sentences;
use super::topics::main_topics;
use crate::analysis::Analysis;
use crate::config::SummarizerConfig;
use crate::summary::SummaryResult;

/// Number of sentences to keep out of `total`: `ceil(total * ratio)` but
/// never fewer than `min_sentences`, and everything when `total` is that small.
pub fn summary_length(total: usize, ratio: f64, min_sentences: usize) -> usize {
    if total <= min_sentences {
        return total;
    }
    // absorb float noise such as 10 * 0.3 = 3.0000000000000004
    let wanted = (total as f64 * ratio - 1e-9).ceil().max(0.0) as usize;
    wanted.max(min_sentences).min(total)
}

/// Picks the top-scoring sentences and returns them in original order.
/// Equal scores keep their document order, so repeated runs agree.
/// Sentences and scores are paired positionally; extras on either side are ignored.
pub fn select_sentences<'a>(
    sentences: &[Sentence<'a>],
    scores: &[f64],
    ratio: f64,
    min_sentences: usize,
) -> Vec<Sentence<'a>> {
    let mut ranked: Vec<(usize, Sentence<'a>, f64)> = sentences
        .iter()
        .zip(scores.iter())
        .enumerate()
        .map(|(pos, (s, score))| (pos, *s, *score))
        .collect();
    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let n = summary_length(ranked.len(), ratio, min_sentences);
    ranked.truncate(n);
    ranked.sort_by_key(|(pos, _, _)| *pos);

    ranked.into_iter().map(|(_, s, _)| s).collect()
}

pub fn join_sentences(sentences: &[Sentence<'_>]) -> String {
    sentences
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn summarize_text_content(text: &str, config: &SummarizerConfig) -> SummaryResult {
    let cleaned = clean_text(text);
    let sentences: Vec<Sentence<'_>> = split_sentences(&cleaned).collect();

    if sentences.is_empty() {
        warn!("no complete sentences in {} characters of input", text.len());
        return SummaryResult {
            topics: Vec::new(),
            summary: config.empty_placeholder.clone(),
            conclusion: String::new(),
            analysis: Analysis::original_only(text),
        };
    }

    let scores = score_sentences(&sentences);
    let selected = select_sentences(
        &sentences,
        &scores,
        config.effective_ratio(),
        config.min_sentences,
    );
    debug!(
        "selected {} of {} sentences",
        selected.len(),
        sentences.len()
    );

    let summary = join_sentences(&selected);
    let conclusion = detect_conclusion(&sentences, &config.conclusion_keywords);
    let topics = main_topics(&cleaned, &config.stopwords, config.max_topics);
    let analysis = Analysis::compare(text, &summary, config.words_per_minute);

    SummaryResult {
        topics,
        summary,
        conclusion,
        analysis,
    }
}
