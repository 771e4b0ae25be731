// Command-line front end: read text, validate it, summarize, print the result.
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

use textdigest::batch::summarize_dir;
use textdigest::input::{read_file_content, read_stdin, validate_length};
use textdigest::render::write_summary;
use textdigest::{GeneratorConfig, Provider, Summarizer, SummarizerConfig, SummaryMode};

#[derive(Parser)]
#[command(name = "textdigest", about = "Extractive and abstractive text summaries with topics and reading stats")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct EngineArgs {
    #[arg(long, value_enum, default_value_t = SummaryMode::Extractive)]
    mode: SummaryMode,
    /// Fraction of sentences kept in extractive mode (0.0 - 1.0)
    #[arg(short, long, value_parser = parse_ratio)]
    ratio: Option<f64>,
    /// JSON file with summarizer settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Provider::Gemini)]
    provider: Provider,
    /// Model override for the abstractive provider (e.g. gemini-2.0-flash, gemma3:4b)
    #[arg(short = 'm', long = "model")]
    model: Option<String>,
    /// Summarize even when the text is shorter than 100 characters
    #[arg(long)]
    force: bool,
}

#[derive(Subcommand)]
enum Commands {
    Summarize {
        /// Read text from a .txt/.md/.csv/.json/.pdf file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Text to summarize; stdin is read when neither --file nor --text is given
        #[arg(short, long)]
        text: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "textdigest_summaries.json")]
        out: PathBuf,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("ratio must be between 0 and 1, got {}", ratio))
    }
}

fn build_summarizer(engine: &EngineArgs) -> Result<Summarizer> {
    let mut config = match &engine.config {
        Some(path) => SummarizerConfig::from_file(path)?,
        None => SummarizerConfig::default(),
    };
    if let Some(ratio) = engine.ratio {
        config = config.with_ratio(ratio);
    }

    let mut summarizer = Summarizer::new(config);
    if engine.mode == SummaryMode::Abstractive {
        let generator = GeneratorConfig::from_env(engine.provider)
            .with_model(engine.model.clone())
            .build()?;
        summarizer = summarizer.with_generator(generator);
    }
    Ok(summarizer)
}

fn load_text(file: Option<&Path>, text: Option<String>) -> Result<String> {
    match (file, text) {
        (Some(p), _) => read_file_content(p),
        (None, Some(t)) => Ok(t),
        (None, None) => {
            if io::stdin().is_terminal() {
                return Err(anyhow!("no input: pass --file, --text or pipe text on stdin"));
            }
            read_stdin()
        }
    }
}

fn summarize_cmd(file: Option<PathBuf>, text: Option<String>, json: bool, engine: EngineArgs) -> Result<()> {
    let text = load_text(file.as_deref(), text)?;
    if !engine.force {
        validate_length(&text)?;
    }

    let summarizer = build_summarizer(&engine)?;
    let result = summarizer.summarize(&text, engine.mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        write_summary(&mut stdout, &result)?;
    }
    Ok(())
}

fn batch_cmd(dir: &Path, out: &Path, engine: EngineArgs) -> Result<()> {
    let summarizer = build_summarizer(&engine)?;
    let entries = summarize_dir(dir, &summarizer, engine.mode, engine.force)?;
    let failed = entries.iter().filter(|e| e.error.is_some()).count();

    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, &entries)?;
    info!("{} files summarized, {} failed", entries.len() - failed, failed);
    println!("Wrote {} summaries to {}", entries.len(), out.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summarize { file, text, json, engine } => summarize_cmd(file, text, json, engine)?,
        Commands::Batch { dir, out, engine } => batch_cmd(&dir, &out, engine)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    const DOC: &str = "Solar panels convert sunlight into electricity. \
        Wind turbines spin in coastal regions. \
        Batteries store surplus solar electricity overnight. \
        Grid operators balance supply and demand. \
        Hydro dams release water through turbines.";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("0.5"), Ok(0.5));
        assert!(parse_ratio("1.5").is_err());
        assert!(parse_ratio("abc").is_err());
    }

    #[test]
    fn test_parse_summarize_args() {
        let cli = Cli::try_parse_from([
            "textdigest", "summarize", "--text", "hello", "--mode", "abstractive",
            "--provider", "ollama", "-m", "phi3", "--ratio", "0.4", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Summarize { text, json, engine, .. } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert!(json);
                assert_eq!(engine.mode, SummaryMode::Abstractive);
                assert_eq!(engine.provider, Provider::Ollama);
                assert_eq!(engine.model.as_deref(), Some("phi3"));
                assert_eq!(engine.ratio, Some(0.4));
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_file_and_text_conflict() {
        let parsed = Cli::try_parse_from(["textdigest", "summarize", "--file", "a.txt", "--text", "b"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_build_summarizer_applies_ratio() -> Result<()> {
        let cli = Cli::try_parse_from(["textdigest", "batch", "--dir", ".", "--ratio", "0.8"])?;
        let Commands::Batch { engine, .. } = cli.command else {
            panic!("expected batch");
        };
        let summarizer = build_summarizer(&engine)?;
        assert_eq!(summarizer.config().ratio, 0.8);
        Ok(())
    }

    #[test]
    fn test_load_text_prefers_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, DOC)?;

        assert_eq!(load_text(Some(path.as_path()), None)?, DOC);
        assert_eq!(load_text(None, Some("inline".to_string()))?, "inline");
        Ok(())
    }

    #[test]
    fn test_batch_cmd_writes_json() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("doc.txt"), DOC)?;
        let out = dir.path().join("out.json");

        let cli = Cli::try_parse_from(["textdigest", "batch", "--dir", "unused"])?;
        let Commands::Batch { engine, .. } = cli.command else {
            panic!("expected batch");
        };
        batch_cmd(dir.path(), &out, engine)?;

        let written: serde_json::Value = serde_json::from_reader(File::open(&out)?)?;
        assert_eq!(written.as_array().map(|a| a.len()), Some(1));
        assert_eq!(written[0]["result"]["topics"][0], "solar");
        Ok(())
    }
}
