// Structured summarization result and the mode flag that selects how it is produced
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// At most five terms, most frequent first
    pub topics: Vec<String>,
    pub summary: String,
    /// Empty when no conclusion was detected
    pub conclusion: String,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    #[default]
    Extractive,
    Abstractive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_shape() {
        let result = SummaryResult {
            topics: vec!["rust".to_string()],
            summary: "Rust is fast.".to_string(),
            conclusion: String::new(),
            analysis: Analysis::compare("Rust is fast. Rust is safe.", "Rust is fast.", 200),
        };
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["topics"][0], "rust");
        assert_eq!(json["summary"], "Rust is fast.");
        assert_eq!(json["conclusion"], "");
        assert_eq!(json["analysis"]["originalWords"], 6);
        assert_eq!(json["analysis"]["summaryWords"], 3);
        assert_eq!(json["analysis"]["readingTime"], 1);
    }

    #[test]
    fn test_mode_serde() {
        let mode: SummaryMode = serde_json::from_str("\"abstractive\"").unwrap();
        assert_eq!(mode, SummaryMode::Abstractive);
        assert_eq!(SummaryMode::default(), SummaryMode::Extractive);
    }
}
