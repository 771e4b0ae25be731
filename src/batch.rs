// Summarize every text file under a directory, one independent request per file
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::input::{read_file_content, validate_length, TEXT_EXTENSIONS};
use crate::summarizer::Summarizer;
use crate::summary::{SummaryMode, SummaryResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SummaryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| TEXT_EXTENSIONS.contains(&ext))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn summarize_file(summarizer: &Summarizer, path: &Path, mode: SummaryMode, force: bool) -> Result<SummaryResult> {
    let text = read_file_content(path)?;
    if !force {
        validate_length(&text)?;
    }
    Ok(summarizer.summarize(&text, mode)?)
}

/// Summaries for each file, in sorted path order. Per-file failures are
/// recorded in the entry instead of aborting the batch.
pub fn summarize_dir(
    dir: &Path,
    summarizer: &Summarizer,
    mode: SummaryMode,
    force: bool,
) -> Result<Vec<BatchEntry>> {
    let files = collect_files(dir);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|p| {
            let entry = match summarize_file(summarizer, p, mode, force) {
                Ok(result) => BatchEntry {
                    path: p.to_string_lossy().to_string(),
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!("skipping {}: {}", p.display(), e);
                    BatchEntry {
                        path: p.to_string_lossy().to_string(),
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_with_message("summarized files");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = "Solar panels convert sunlight into electricity. \
        Wind turbines spin in coastal regions. \
        Batteries store surplus solar electricity overnight. \
        Grid operators balance supply and demand. \
        Hydro dams release water through turbines.";

    #[test]
    fn test_collect_files_filters_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("b.md"), DOC)?;
        std::fs::write(dir.path().join("a.txt"), DOC)?;
        std::fs::write(dir.path().join("image.png"), "binary")?;

        let files = collect_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.md"));
        Ok(())
    }

    #[test]
    fn test_summarize_dir() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("energy.txt"), DOC)?;
        std::fs::write(dir.path().join("short.txt"), "Too short.")?;

        let entries = summarize_dir(dir.path(), &Summarizer::default(), SummaryMode::Extractive, false)?;
        assert_eq!(entries.len(), 2);

        let energy = &entries[0];
        assert!(energy.path.ends_with("energy.txt"));
        let result = energy.result.as_ref().expect("energy.txt should summarize");
        assert_eq!(result.topics[0], "solar");
        assert!(energy.error.is_none());

        let short = &entries[1];
        assert!(short.result.is_none());
        assert!(short.error.as_deref().unwrap_or("").starts_with("Text is too short"));
        Ok(())
    }

    #[test]
    fn test_summarize_dir_force_skips_length_gate() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("short.txt"), "Too short.")?;

        let entries = summarize_dir(dir.path(), &Summarizer::default(), SummaryMode::Extractive, true)?;
        let result = entries[0].result.as_ref().expect("forced summary");
        assert_eq!(result.summary, "Too short.");
        Ok(())
    }

    #[test]
    fn test_summarize_empty_dir() -> Result<()> {
        let dir = TempDir::new()?;
        let entries = summarize_dir(dir.path(), &Summarizer::default(), SummaryMode::Extractive, false)?;
        assert!(entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_batch_entry_serialization() {
        let entry = BatchEntry {
            path: "a.txt".to_string(),
            result: None,
            error: Some("boom".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"path":"a.txt","error":"boom"}"#);
    }
}
