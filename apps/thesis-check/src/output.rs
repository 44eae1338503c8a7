//! Report rendering

use anyhow::{Context, Result};
use clap::ValueEnum;
use shared_types::StructureReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Full report as JSON
    Json,
    /// Human-readable summary
    Text,
}

pub fn render(report: &StructureReport, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
        OutputFormat::Json => serde_json::to_string(report).context("Failed to serialize report"),
        OutputFormat::Text => Ok(report.to_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::SourceBlock;
    use structure_engine::StructureAnalyzer;

    fn report() -> StructureReport {
        StructureAnalyzer::new().analyze(&[
            SourceBlock::plain("Zahvala"),
            SourceBlock::plain("1. UVOD"),
            SourceBlock::plain("Cilj dela"),
        ])
    }

    #[test]
    fn test_render_json() {
        let compact = render(&report(), OutputFormat::Json, false).unwrap();
        assert!(!compact.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["uvod"][0], "Cilj dela");
        assert_eq!(value["front_matter_found"]["Zahvala"], true);

        let pretty = render(&report(), OutputFormat::Json, true).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_render_text() {
        let text = render(&report(), OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("Thesis Structure Report"));
        assert!(text.contains("✓ Zahvala"));
    }
}
