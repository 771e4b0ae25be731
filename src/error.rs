// Error types surfaced by the summarization engine.
// Extractive summarization never fails; only the external text-generation
// collaborator can.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalServiceError {
    /// No text-generation client was attached to the summarizer
    #[error("no text-generation client configured: {0}")]
    NotConfigured(String),

    /// The service could not be reached
    #[error("text-generation service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status
    #[error("text-generation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The local generator process failed
    #[error("text-generation process failed: {0}")]
    Process(String),

    /// The response could not be decoded
    #[error("malformed response from text-generation service: {0}")]
    Malformed(String),

    #[error("text-generation service returned no content")]
    EmptyResponse,
}

impl From<reqwest::Error> for ExternalServiceError {
    fn from(err: reqwest::Error) -> Self {
        // request URLs may carry credentials
        let err = err.without_url();
        if err.is_decode() {
            ExternalServiceError::Malformed(err.to_string())
        } else {
            ExternalServiceError::Unreachable(err.to_string())
        }
    }
}
