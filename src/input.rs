// Reading and validating caller input before it reaches the summarizer
use anyhow::{anyhow, bail, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const MIN_INPUT_CHARS: usize = 100;
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "pdf"];

/// Rejects text shorter than [`MIN_INPUT_CHARS`] characters.
pub fn validate_length(text: &str) -> Result<()> {
    if text.chars().count() < MIN_INPUT_CHARS {
        bail!(
            "Text is too short. Please provide at least {} characters.",
            MIN_INPUT_CHARS
        );
    }
    Ok(())
}

pub fn read_text_file(p: &Path) -> Result<String> {
    let mut s = String::new();
    let mut f = File::open(p)?;
    f.read_to_string(&mut s)?;
    Ok(s)
}

pub fn read_file_content(p: &Path) -> Result<String> {
    let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("");
    match ext {
        "pdf" => pdf_extract::extract_text(p).map_err(|e| anyhow!("PDF extraction failed: {}", e)),
        "txt" | "md" | "csv" | "json" => read_text_file(p),
        _ => Err(anyhow!("Unsupported file format: {}", ext)),
    }
}

pub fn read_stdin() -> Result<String> {
    let mut s = String::new();
    std::io::stdin().read_to_string(&mut s)?;
    Ok(s)
}
