// Local generation through the `ollama` command-line tool
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

use super::TextGenerator;
use crate::error::ExternalServiceError;

pub const FALLBACK_MODEL: &str = "mistral";

pub struct OllamaCli {
    model: String,
}

impl OllamaCli {
    /// Uses `model` when given, otherwise `OLLAMA_MODEL`, otherwise the
    /// smallest installed model, otherwise [`FALLBACK_MODEL`].
    pub fn new(model: Option<String>) -> Self {
        let model = model
            .or_else(|| std::env::var("OLLAMA_MODEL").ok().filter(|m| !m.is_empty()))
            .or_else(probe_smallest_model)
            .unwrap_or_else(|| FALLBACK_MODEL.to_string());
        Self { model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaCli {
    fn generate(&self, prompt: &str) -> Result<String, ExternalServiceError> {
        debug!("ollama run {} ({} prompt chars)", self.model, prompt.len());
        let mut cmd = Command::new("ollama");
        cmd.arg("run").arg(&self.model);
        run_with_stdin(cmd, prompt).map_err(|e| {
            warn!("ollama run failed ({}): {}", self.model, e);
            e
        })
    }

    fn name(&self) -> String {
        format!("ollama:{}", self.model)
    }
}

/// Runs `cmd` with `prompt` on stdin and returns its stdout. The prompt is
/// not passed as an argument since long documents exceed the argv limit.
fn run_with_stdin(mut cmd: Command, prompt: &str) -> Result<String, ExternalServiceError> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ExternalServiceError::Unreachable(format!("failed to invoke ollama: {}", e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ExternalServiceError::Process("child stdin unavailable".to_string()))?;
    let input = prompt.to_string();
    // the child may fill stdout before it has read all of stdin
    let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

    let output = child
        .wait_with_output()
        .map_err(|e| ExternalServiceError::Process(e.to_string()))?;
    match writer.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(ExternalServiceError::Process(format!("failed to send prompt: {}", e))),
        Err(_) => return Err(ExternalServiceError::Process("prompt writer panicked".to_string())),
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(ExternalServiceError::Process(stderr));
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    if text.trim().is_empty() {
        return Err(ExternalServiceError::EmptyResponse);
    }
    Ok(text)
}

fn probe_smallest_model() -> Option<String> {
    let out = Command::new("ollama").arg("list").output().ok()?;
    if !out.status.success() {
        return None;
    }
    smallest_model(&String::from_utf8_lossy(&out.stdout))
}

/// Picks the model with the smallest size from `ollama list` output.
/// Lines look like: NAME  ID  SIZE UNIT  MODIFIED
pub fn smallest_model(listing: &str) -> Option<String> {
    let mut best: Option<(String, f64)> = None;
    for line in listing.lines() {
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() < 3 {
            continue;
        }
        let size = cols
            .windows(2)
            .skip(2)
            .find_map(|pair| {
                let v = pair[0].parse::<f64>().ok()?;
                let bytes = match pair[1].to_uppercase().as_str() {
                    "GB" => v * 1024.0 * 1024.0 * 1024.0,
                    "MB" => v * 1024.0 * 1024.0,
                    "KB" => v * 1024.0,
                    _ => v,
                };
                Some(bytes)
            });
        if let Some(sz) = size {
            match &best {
                Some((_, bsz)) if *bsz <= sz => {}
                _ => best = Some((cols[0].to_string(), sz)),
            }
        }
    }
    best.map(|(name, _)| name)
}
