//! Value objects shared between the structure engine and its callers

pub mod paragraph;
pub mod report;

pub use paragraph::{Paragraph, SourceBlock, Style, TocEntry};
pub use report::{
    SectionResult, SectionResults, StructureAnalysis, StructureReport, TitlePageInfo,
};
