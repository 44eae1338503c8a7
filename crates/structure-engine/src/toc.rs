//! Table-of-contents extraction

use crate::patterns::{segment_count, TOC_ENTRY};
use crate::vocabulary::Vocabulary;
use shared_types::{Paragraph, TocEntry};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InToc,
    Done,
}

/// Scanner over normalized paragraphs
///
/// Collection starts after the paragraph naming the table of contents and
/// stops for good at the first sibling index heading.
pub struct TocParser<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> TocParser<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn parse(&self, paragraphs: &[Paragraph]) -> Vec<TocEntry> {
        let mut entries = Vec::new();
        let mut state = ScanState::Searching;

        for paragraph in paragraphs {
            let text = paragraph.content.as_str();
            state = match state {
                ScanState::Searching if self.vocabulary.toc_heading.is_match(text) => {
                    ScanState::InToc
                }
                ScanState::Searching => ScanState::Searching,
                ScanState::InToc if self.vocabulary.toc_end.is_match(text) => ScanState::Done,
                ScanState::InToc => {
                    entries.extend(parse_entry(text));
                    ScanState::InToc
                }
                ScanState::Done => break,
            };
            if state == ScanState::Done {
                break;
            }
        }

        entries
    }
}

/// Parse a single leader-dot line; wrapped or blank lines yield `None`
pub fn parse_entry(text: &str) -> Option<TocEntry> {
    let caps = TOC_ENTRY.captures(text)?;
    let number = caps["num"].to_string();
    let page = caps["page"].parse().ok()?;
    Some(TocEntry {
        level: segment_count(&number),
        title: caps["title"].trim().to_string(),
        number,
        page,
    })
}

/// Level lookup keyed by `(number, title)`; later duplicates win
#[derive(Debug, Clone, Default)]
pub struct TocIndex {
    levels: HashMap<(String, String), usize>,
}

impl TocIndex {
    pub fn new(entries: &[TocEntry]) -> Self {
        let levels = entries
            .iter()
            .map(|e| ((e.number.clone(), e.title.clone()), e.level))
            .collect();
        Self { levels }
    }

    pub fn level(&self, number: &str, title: &str) -> Option<usize> {
        self.levels
            .get(&(number.to_string(), title.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
