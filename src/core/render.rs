//! Renderer module
//!
//! Renders a frequency report to different output formats: text, json, jsonl

use crate::core::model::{FrequencyEntry, Report};
use std::io::Write;

/// Number of entries a report prints unless told otherwise
pub const DEFAULT_TOP: usize = 25;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub top: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            top: DEFAULT_TOP,
        }
    }
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self {
            format,
            pretty,
            ..Self::default()
        }
    }

    /// Limit the number of printed entries
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

/// Renderer for frequency reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string; the report is cut to `top` entries
    pub fn render(&self, report: &Report) -> String {
        let entries = &report.entries[..report.entries.len().min(self.config.top)];
        match self.config.format {
            OutputFormat::Text => self.render_text(entries),
            OutputFormat::Json => self.render_json(report, entries),
            OutputFormat::Jsonl => self.render_jsonl(entries),
        }
    }

    /// Render to a writer, one trailing newline when there is output
    pub fn render_to<W: Write + ?Sized>(
        &self,
        report: &Report,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = self.render(report);
        if !output.is_empty() {
            writeln!(writer, "{}", output)?;
        }
        Ok(())
    }

    /// Render as `word - count` lines
    fn render_text(&self, entries: &[FrequencyEntry]) -> String {
        entries
            .iter()
            .map(format_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a single JSON object with totals
    fn render_json(&self, report: &Report, entries: &[FrequencyEntry]) -> String {
        let value = serde_json::json!({
            "total_words": report.total_words,
            "distinct_words": report.distinct_words,
            "entries": entries,
        });
        if self.config.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render as JSON Lines (one entry per line)
    fn render_jsonl(&self, entries: &[FrequencyEntry]) -> String {
        entries
            .iter()
            .filter_map(|entry| serde_json::to_string(entry).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The `word - count` line used by every text report
pub fn format_entry(entry: &FrequencyEntry) -> String {
    format!("{} - {}", entry.word(), entry.count())
}

/// Write the top `n` entries as text lines
pub fn write_top<W: Write + ?Sized>(
    entries: &[FrequencyEntry],
    n: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    for entry in entries.iter().take(n) {
        writeln!(writer, "{}", format_entry(entry))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frequency::FrequencyTable;

    fn sample_report() -> Report {
        let table: FrequencyTable = ["cat", "cat", "sat", "ran", "cat", "ran"].iter().collect();
        Report::from_table(&table)
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("jsonl".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert!("md".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let renderer = Renderer::with_config(RenderConfig::default());
        assert_eq!(
            renderer.render(&sample_report()),
            "cat - 3\nran - 2\nsat - 1"
        );
    }

    #[test]
    fn test_render_respects_top() {
        let renderer = Renderer::with_config(RenderConfig::default().with_top(2));
        assert_eq!(renderer.render(&sample_report()), "cat - 3\nran - 2");
    }

    #[test]
    fn test_render_json_has_totals() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, false);
        let out = Renderer::with_config(config).render(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_words"], 6);
        assert_eq!(value["distinct_words"], 3);
        assert_eq!(value["entries"][0]["word"], "cat");
    }

    #[test]
    fn test_render_jsonl_one_line_per_entry() {
        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, false);
        let out = Renderer::with_config(config).render(&sample_report());
        assert_eq!(out.lines().count(), 3);
        for line in out.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["count"].as_u64().unwrap() >= 1);
        }
    }

    #[test]
    fn test_render_to_empty_report_writes_nothing() {
        let mut out = Vec::new();
        Renderer::with_config(RenderConfig::default())
            .render_to(&Report::default(), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_top_caps_entries() {
        let report = sample_report();
        let mut out = Vec::new();
        write_top(&report.entries, 1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat - 3\n");
    }
}
