// Summarizer configuration, passed explicitly at construction time
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::analysis::DEFAULT_WORDS_PER_MINUTE;
use crate::nlp::conclusion::DEFAULT_KEYWORDS;
use crate::nlp::stopwords::StopWords;

pub const DEFAULT_RATIO: f64 = 0.3;
pub const DEFAULT_MIN_SENTENCES: usize = 3;
pub const DEFAULT_MAX_TOPICS: usize = 5;
pub const EMPTY_PLACEHOLDER: &str = "Text too short or no complete sentences.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummarizerConfig {
    /// Fraction of sentences kept by the extractive summary
    pub ratio: f64,
    pub min_sentences: usize,
    pub max_topics: usize,
    pub words_per_minute: usize,
    pub conclusion_keywords: Vec<String>,
    pub stopwords: StopWords,
    /// Summary text returned when the input has no complete sentence
    pub empty_placeholder: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            min_sentences: DEFAULT_MIN_SENTENCES,
            max_topics: DEFAULT_MAX_TOPICS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            conclusion_keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            stopwords: StopWords::english(),
            empty_placeholder: EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl SummarizerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let f = File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let config: Self = serde_json::from_reader(f)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Ratio clamped into `[0, 1]`; NaN falls back to the default.
    pub fn effective_ratio(&self) -> f64 {
        if self.ratio.is_nan() {
            DEFAULT_RATIO
        } else {
            self.ratio.clamp(0.0, 1.0)
        }
    }
}
