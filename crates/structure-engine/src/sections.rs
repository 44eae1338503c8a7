//! Required-section detection
//!
//! Ordinary sections are present when any paragraph matches any of their
//! patterns. Title pages cannot be recognised by one keyword, so their
//! validators demand every signal at once.

use crate::config::AnalyzerConfig;
use crate::intro::subsection_coverage;
use crate::patterns::is_listing_line;
use crate::vocabulary::{CompiledSection, ValidatorKind, Vocabulary};
use shared_types::{Paragraph, SectionResult, SectionResults};
use std::collections::BTreeMap;

/// Cover page evidence found in the leading paragraphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverPageSignals {
    pub person_name: bool,
    pub thesis_type: bool,
    pub city_date: bool,
    pub title: bool,
}

impl CoverPageSignals {
    pub fn is_complete(&self) -> bool {
        self.person_name && self.thesis_type && self.city_date && self.title
    }

    fn into_map(self) -> BTreeMap<String, bool> {
        [
            ("person_name", self.person_name),
            ("thesis_type", self.thesis_type),
            ("city_date", self.city_date),
            ("title", self.title),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

pub struct SectionDetector<'a> {
    vocabulary: &'a Vocabulary,
    config: &'a AnalyzerConfig,
}

impl<'a> SectionDetector<'a> {
    pub fn new(vocabulary: &'a Vocabulary, config: &'a AnalyzerConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn front_matter(&self, paragraphs: &[Paragraph], introduction: &[String]) -> SectionResults {
        self.vocabulary
            .front_matter
            .iter()
            .map(|section| self.evaluate(section, paragraphs, introduction))
            .collect()
    }

    pub fn body_sections(&self, paragraphs: &[Paragraph], introduction: &[String]) -> SectionResults {
        self.vocabulary
            .body_sections
            .iter()
            .map(|section| self.evaluate(section, paragraphs, introduction))
            .collect()
    }

    fn evaluate(
        &self,
        section: &CompiledSection,
        paragraphs: &[Paragraph],
        introduction: &[String],
    ) -> SectionResult {
        let (present, matched_keywords) = match section.validator {
            Some(ValidatorKind::CoverPage) => {
                let signals = self.cover_page_signals(paragraphs);
                (signals.is_complete(), signals.into_map())
            }
            Some(ValidatorKind::InternalTitlePage) => {
                let signals = self.internal_title_page_signals(paragraphs);
                (signals.values().all(|found| *found), signals)
            }
            Some(ValidatorKind::IntroductionSubsections) => {
                let coverage: BTreeMap<String, bool> =
                    subsection_coverage(introduction, self.vocabulary).into_iter().collect();
                let present = !introduction.is_empty() && coverage.values().all(|found| *found);
                (present, coverage)
            }
            None => {
                let matched: BTreeMap<String, bool> = section
                    .patterns
                    .iter()
                    .map(|pattern| {
                        let hit = paragraphs.iter().any(|p| pattern.is_match(&p.content));
                        (pattern.source.clone(), hit)
                    })
                    .collect();
                (matched.values().any(|hit| *hit), matched)
            }
        };

        SectionResult {
            name: section.name.clone(),
            present,
            matched_keywords,
        }
    }

    /// Signals over the first `cover_page_window` paragraphs
    pub fn cover_page_signals(&self, paragraphs: &[Paragraph]) -> CoverPageSignals {
        let vocab = self.vocabulary;
        let mut signals = CoverPageSignals::default();

        for paragraph in paragraphs.iter().take(self.config.cover_page_window) {
            let line = paragraph.content.trim();
            let is_name = vocab.person_name.is_match(line);
            let is_type = vocab.thesis_type.is_match(line);
            let is_city_date = vocab.city_date.is_match(line);

            signals.person_name |= is_name;
            signals.thesis_type |= is_type;
            signals.city_date |= is_city_date;
            signals.title |= line.chars().count() > self.config.min_title_length
                && !is_name
                && !is_type
                && !is_city_date;
        }

        signals
    }

    pub fn validate_cover_page(&self, paragraphs: &[Paragraph]) -> bool {
        self.cover_page_signals(paragraphs).is_complete()
    }

    /// Thesis type anywhere plus one line starting with each field label
    fn internal_title_page_signals(&self, paragraphs: &[Paragraph]) -> BTreeMap<String, bool> {
        let mut signals = BTreeMap::new();
        signals.insert(
            "thesis_type".to_string(),
            paragraphs
                .iter()
                .any(|p| self.vocabulary.thesis_type.is_match(&p.content)),
        );
        for label in &self.vocabulary.title_page_labels {
            let found = paragraphs
                .iter()
                .any(|p| p.content.trim().starts_with(label.as_str()));
            signals.insert(label.clone(), found);
        }
        signals
    }

    pub fn validate_internal_title_page(&self, paragraphs: &[Paragraph]) -> bool {
        self.internal_title_page_signals(paragraphs)
            .values()
            .all(|found| *found)
    }

    /// Sections whose first occurrence comes after a section that should
    /// follow them
    ///
    /// Listing lines (TOC entries and other leader-dot lines) are ignored;
    /// validator-only and absent sections are skipped.
    pub fn out_of_order(&self, paragraphs: &[Paragraph]) -> Vec<String> {
        let mut flagged = Vec::new();
        let mut latest: Option<usize> = None;

        for name in &self.vocabulary.canonical_order {
            let Some(section) = self.vocabulary.section(name) else {
                continue;
            };
            if section.patterns.is_empty() {
                continue;
            }
            let Some(position) = paragraphs
                .iter()
                .position(|p| !is_listing_line(&p.content) && section.matches(&p.content))
            else {
                continue;
            };

            match latest {
                Some(max) if position < max => flagged.push(name.clone()),
                _ => latest = Some(position),
            }
        }

        flagged
    }
}
