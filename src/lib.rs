// Text summarization: extractive TF-IDF summaries with topics, conclusion
// detection and reading statistics, plus an abstractive mode backed by an
// external text-generation service.
pub mod analysis;
pub mod batch;
pub mod config;
pub mod error;
pub mod generate;
pub mod input;
pub mod nlp;
pub mod render;
pub mod summarizer;
pub mod summary;

pub use analysis::Analysis;
pub use config::SummarizerConfig;
pub use error::ExternalServiceError;
pub use generate::{GeneratorConfig, Provider, TextGenerator};
pub use summarizer::{summarize_abstractive, summarize_extractive, Summarizer};
pub use summary::{SummaryMode, SummaryResult};
