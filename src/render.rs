// Human-readable terminal output for a summary result
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::summary::SummaryResult;

fn heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(out, "{}", title)?;
    out.reset()
}

pub fn write_summary<W: WriteColor>(out: &mut W, result: &SummaryResult) -> io::Result<()> {
    heading(out, "Topics")?;
    if result.topics.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        writeln!(out, "  {}", result.topics.join(", "))?;
    }

    writeln!(out)?;
    heading(out, "Summary")?;
    writeln!(out, "  {}", result.summary)?;

    if !result.conclusion.is_empty() {
        writeln!(out)?;
        heading(out, "Conclusion")?;
        writeln!(out, "  {}", result.conclusion)?;
    }

    let a = &result.analysis;
    writeln!(out)?;
    heading(out, "Analysis")?;
    writeln!(out, "  words:        {} -> {}", a.original_words, a.summary_words)?;
    writeln!(out, "  characters:   {} -> {}", a.original_chars, a.summary_chars)?;
    writeln!(
        out,
        "  reading time: {} min -> {} min",
        a.reading_time, a.summary_reading_time
    )?;
    Ok(())
}
