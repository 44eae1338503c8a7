//! Final paragraph stream cleanup
//!
//! Passes run in a fixed order. The trim before the acknowledgments anchor is
//! always last, whatever order the options list them in.

use crate::patterns::{
    is_listing_line, is_roman_numeral, is_toc_artifact, NUMBERED_PREFIX, NUMERIC_REFERENCE_LABEL,
    PAGE_NUMBER,
};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use shared_types::Paragraph;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupPass {
    /// "2.1 Title ..... 12" lines anywhere in the stream
    TocArtifacts,
    /// Front-matter page numbers ("iv")
    RomanNumerals,
    /// Body page numbers ("12")
    PageNumbers,
    /// Wrapped "[...]" lines in the references list
    CitationContinuations,
    /// Everything before the acknowledgments heading
    TrimBeforeAcknowledgments,
}

impl CleanupPass {
    pub const ALL: [CleanupPass; 5] = [
        CleanupPass::TocArtifacts,
        CleanupPass::RomanNumerals,
        CleanupPass::PageNumbers,
        CleanupPass::CitationContinuations,
        CleanupPass::TrimBeforeAcknowledgments,
    ];
}

/// Which cleanup passes run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    pub passes: Vec<CleanupPass>,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            passes: CleanupPass::ALL.to_vec(),
        }
    }
}

impl CleanupOptions {
    pub fn none() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn without(mut self, pass: CleanupPass) -> Self {
        self.passes.retain(|p| *p != pass);
        self
    }

    pub fn is_enabled(&self, pass: CleanupPass) -> bool {
        self.passes.contains(&pass)
    }
}

pub struct Cleanup<'a> {
    vocabulary: &'a Vocabulary,
    options: &'a CleanupOptions,
}

impl<'a> Cleanup<'a> {
    pub fn new(vocabulary: &'a Vocabulary, options: &'a CleanupOptions) -> Self {
        Self {
            vocabulary,
            options,
        }
    }

    pub fn run(&self, mut paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
        for pass in CleanupPass::ALL {
            if !self.options.is_enabled(pass) {
                continue;
            }
            let before = paragraphs.len();
            paragraphs = match pass {
                CleanupPass::TocArtifacts => drop_matching(paragraphs, is_toc_artifact),
                CleanupPass::RomanNumerals => drop_matching(paragraphs, is_roman_numeral),
                CleanupPass::PageNumbers => {
                    drop_matching(paragraphs, |text| PAGE_NUMBER.is_match(text))
                }
                CleanupPass::CitationContinuations => {
                    self.merge_citation_continuations(paragraphs)
                }
                CleanupPass::TrimBeforeAcknowledgments => {
                    self.trim_before_acknowledgments(paragraphs)
                }
            };
            debug!(?pass, removed = before - paragraphs.len(), "cleanup pass");
        }
        paragraphs
    }

    fn merge_citation_continuations(&self, paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
        let mut merged: Vec<Paragraph> = Vec::with_capacity(paragraphs.len());
        let mut in_references = false;

        for paragraph in paragraphs {
            let text = paragraph.content.trim();
            if !in_references {
                // A TOC line naming the references list does not open it
                in_references =
                    self.vocabulary.references.is_match(text) && !is_listing_line(text);
                merged.push(paragraph);
                continue;
            }

            if text.starts_with('[') && !NUMERIC_REFERENCE_LABEL.is_match(text) {
                if let Some(previous) = merged.last_mut() {
                    previous.content.push(' ');
                    previous.content.push_str(text);
                    continue;
                }
            }
            merged.push(paragraph);
        }

        merged
    }

    fn trim_before_acknowledgments(&self, mut paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
        // No anchor: keep the stream as is
        if let Some(anchor) = paragraphs
            .iter()
            .position(|p| self.vocabulary.acknowledgments.is_match(p.content.trim()))
        {
            paragraphs.drain(..anchor);
        }
        paragraphs
    }
}

fn drop_matching<F>(paragraphs: Vec<Paragraph>, predicate: F) -> Vec<Paragraph>
where
    F: Fn(&str) -> bool,
{
    paragraphs
        .into_iter()
        .filter(|p| !predicate(p.content.trim()))
        .collect()
}

/// Drop index listings (table of contents, lists of figures, graphs and
/// tables) from the stream
///
/// An index heading opens a region that closes at the next paragraph with a
/// numbered prefix; that paragraph is kept.
pub fn filter_index_regions(paragraphs: &[Paragraph], vocabulary: &Vocabulary) -> Vec<Paragraph> {
    let mut kept = Vec::with_capacity(paragraphs.len());
    let mut skipping = false;

    for paragraph in paragraphs {
        let text = paragraph.content.trim();
        if vocabulary.index_heading.is_match(text) {
            skipping = true;
            continue;
        }
        if skipping && NUMBERED_PREFIX.is_match(text) {
            skipping = false;
        }
        if !skipping {
            kept.push(paragraph.clone());
        }
    }

    kept
}
