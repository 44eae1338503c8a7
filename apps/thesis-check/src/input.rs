//! Block sources

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use shared_types::SourceBlock;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum InputFormat {
    /// JSON array of `{"text", "style"}` objects or plain strings
    Json,
    /// One paragraph per line, no style hints
    Text,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlock {
    Text(String),
    Block(SourceBlock),
}

impl From<RawBlock> for SourceBlock {
    fn from(raw: RawBlock) -> Self {
        match raw {
            RawBlock::Text(text) => SourceBlock::plain(text),
            RawBlock::Block(block) => block,
        }
    }
}

/// Read the whole input; `-` means stdin
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path))
}

pub fn parse_blocks(raw: &str, format: InputFormat) -> Result<Vec<SourceBlock>> {
    match format {
        InputFormat::Json => {
            let blocks: Vec<RawBlock> =
                serde_json::from_str(raw).context("Input is not a JSON array of blocks")?;
            Ok(blocks.into_iter().map(SourceBlock::from).collect())
        }
        InputFormat::Text => Ok(raw.lines().map(SourceBlock::plain).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_json_blocks() {
        let raw = r#"[
            {"text": "1. UVOD", "style": "Heading 1"},
            {"text": "Besedilo"},
            "Zahvala"
        ]"#;
        let blocks = parse_blocks(raw, InputFormat::Json).unwrap();
        assert_eq!(
            blocks,
            vec![
                SourceBlock::new("1. UVOD", Some("Heading 1")),
                SourceBlock::plain("Besedilo"),
                SourceBlock::plain("Zahvala"),
            ]
        );
    }

    #[test]
    fn test_parse_text_lines() {
        let blocks = parse_blocks("Zahvala\n\nHvala.\n", InputFormat::Text).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], SourceBlock::plain(""));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = parse_blocks("{\"text\": 1}", InputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_input("/nonexistent/thesis.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/thesis.json"));
    }
}
