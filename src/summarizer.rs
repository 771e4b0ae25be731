// Entry points: extractive and abstractive summarization over one document
use tracing::{info, warn};

use crate::analysis::Analysis;
use crate::config::SummarizerConfig;
use crate::error::ExternalServiceError;
use crate::generate::{build_prompt, parse_response, TextGenerator};
use crate::nlp::summarization::summarize_text_content;
use crate::nlp::topics::main_topics;
use crate::summary::{SummaryMode, SummaryResult};

pub struct Summarizer {
    config: SummarizerConfig,
    generator: Option<Box<dyn TextGenerator>>,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            config,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Box<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn summarize(
        &self,
        text: &str,
        mode: SummaryMode,
    ) -> Result<SummaryResult, ExternalServiceError> {
        match mode {
            SummaryMode::Extractive => Ok(self.summarize_extractive(text)),
            SummaryMode::Abstractive => self.summarize_abstractive(text),
        }
    }

    pub fn summarize_extractive(&self, text: &str) -> SummaryResult {
        summarize_text_content(text, &self.config)
    }

    pub fn summarize_abstractive(&self, text: &str) -> Result<SummaryResult, ExternalServiceError> {
        let generator = self.generator.as_deref().ok_or_else(|| {
            ExternalServiceError::NotConfigured("abstractive mode needs a text generator".to_string())
        })?;

        info!("requesting abstractive summary from {}", generator.name());
        let response = generator.generate(&build_prompt(text)).map_err(|e| {
            warn!("abstractive summary failed: {}", e);
            e
        })?;
        if response.trim().is_empty() {
            return Err(ExternalServiceError::EmptyResponse);
        }

        let parsed = parse_response(&response);
        let topics = main_topics(&response, &self.config.stopwords, self.config.max_topics);
        let analysis = Analysis::compare(text, &parsed.summary, self.config.words_per_minute);

        Ok(SummaryResult {
            topics,
            summary: parsed.summary,
            conclusion: parsed.conclusion,
            analysis,
        })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}

/// Extractive summary with default settings and the given sentence ratio.
pub fn summarize_extractive(text: &str, ratio: f64) -> SummaryResult {
    Summarizer::new(SummarizerConfig::default().with_ratio(ratio)).summarize_extractive(text)
}

/// Abstractive summary with default settings through `generator`.
pub fn summarize_abstractive(
    text: &str,
    generator: Box<dyn TextGenerator>,
) -> Result<SummaryResult, ExternalServiceError> {
    Summarizer::default()
        .with_generator(generator)
        .summarize_abstractive(text)
}
