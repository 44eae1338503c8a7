//! Thesis structure checker binary
//!
//! Logs go to stderr so stdout carries only the report.

use anyhow::{Context, Result};
use clap::Parser;
use structure_engine::{AnalyzerConfig, StructureAnalyzer, Vocabulary};
use thesis_check::{parse_blocks, read_input, render, InputFormat, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "thesis-check")]
#[command(version, about = "Check a thesis against the required document structure")]
struct Args {
    /// Input file, or - for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Input format
    #[arg(short, long, value_enum, default_value = "json")]
    format: InputFormat,

    /// Report format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Analyzer configuration (JSON); missing fields use defaults
    #[arg(long)]
    config: Option<String>,

    /// Vocabulary template (JSON) replacing the built-in Slovenian one
    #[arg(long)]
    vocabulary: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path))?;
            AnalyzerConfig::from_json(&raw).with_context(|| format!("Invalid config {}", path))?
        }
        None => AnalyzerConfig::default(),
    };

    let vocabulary = match &args.vocabulary {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read vocabulary {}", path))?;
            tracing::info!("Using vocabulary from {}", path);
            Vocabulary::from_json(&raw).with_context(|| format!("Invalid vocabulary {}", path))?
        }
        None => Vocabulary::slovenian(),
    };

    let analyzer = StructureAnalyzer::with_vocabulary(vocabulary, config)?;

    let raw = read_input(&args.input)?;
    let blocks = parse_blocks(&raw, args.format)?;
    tracing::info!("Analyzing {} blocks from {}", blocks.len(), args.input);

    let report = analyzer.analyze(&blocks);
    println!("{}", render(&report, args.output, args.pretty)?);

    Ok(())
}
