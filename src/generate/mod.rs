// Abstractive summarization through an external text-generation service.
// The service only sees a prompt and answers with free text; everything
// structured about the result is recovered by keyword heuristics below.
pub mod gemini;
pub mod ollama;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExternalServiceError;

pub use gemini::GeminiClient;
pub use ollama::OllamaCli;

pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, ExternalServiceError>;

    /// Short label used in logs
    fn name(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Ollama,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub provider: Provider,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

impl GeneratorConfig {
    /// Reads `GEMINI_API_KEY` and `GEMINI_MODEL` (or `OLLAMA_MODEL` for the
    /// Ollama provider). Unset variables stay `None`.
    pub fn from_env(provider: Provider) -> Self {
        let model_var = match provider {
            Provider::Gemini => "GEMINI_MODEL",
            Provider::Ollama => "OLLAMA_MODEL",
        };
        Self {
            provider,
            model: std::env::var(model_var).ok().filter(|m| !m.is_empty()),
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            endpoint: None,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if model.is_some() {
            self.model = model;
        }
        self
    }

    pub fn build(&self) -> Result<Box<dyn TextGenerator>, ExternalServiceError> {
        let generator: Box<dyn TextGenerator> = match self.provider {
            Provider::Gemini => {
                let key = self.api_key.clone().ok_or_else(|| {
                    ExternalServiceError::NotConfigured("GEMINI_API_KEY is not set".to_string())
                })?;
                let mut client = GeminiClient::new(key);
                if let Some(model) = &self.model {
                    client = client.with_model(model);
                }
                if let Some(endpoint) = &self.endpoint {
                    client = client.with_endpoint(endpoint);
                }
                Box::new(client)
            }
            Provider::Ollama => Box::new(OllamaCli::new(self.model.clone())),
        };
        info!("using text generator {}", generator.name());
        Ok(generator)
    }
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "Please summarize the following text in 25-30% length, covering main ideas and structure clearly:\n\
         \n\
         {text}\n\
         \n\
         Format:\n\
         1. List 3-5 main topics\n\
         2. Provide summary\n\
         3. Include any conclusion if present\n\
         4. No extra commentary."
    )
}

/// Summary body and conclusion recovered from a free-text model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub summary: String,
    pub conclusion: String,
}

/// Splits the response into blank-line separated paragraphs. The summary is
/// the first paragraph mentioning neither "main" nor "topic" (the whole
/// response if every paragraph does); the conclusion is the first paragraph
/// mentioning "conclusion", or empty.
pub fn parse_response(response: &str) -> ParsedResponse {
    let paragraphs: Vec<&str> = response.split("\n\n").collect();

    let summary = paragraphs
        .iter()
        .find(|p| {
            let lowered = p.to_lowercase();
            !lowered.contains("main") && !lowered.contains("topic")
        })
        .copied()
        .unwrap_or(response);
    let conclusion = paragraphs
        .iter()
        .find(|p| p.to_lowercase().contains("conclusion"))
        .copied()
        .unwrap_or("");

    ParsedResponse {
        summary: summary.trim().to_string(),
        conclusion: conclusion.trim().to_string(),
    }
}
