//! Command-line harness for the thesis structure analyzer
//!
//! Reads `(text, style)` blocks from a file or stdin, runs
//! [`structure_engine::StructureAnalyzer`] and renders the report.

pub mod input;
pub mod output;

pub use input::{parse_blocks, read_input, InputFormat};
pub use output::{render, OutputFormat};
