//! Heading-level inference
//!
//! Authoring tools tag headings inconsistently, so the level is inferred from
//! the text itself. Rules are an ordered list evaluated first-match-wins; the
//! priority lives in [`HeadingClassifier::standard`], not in nested branches.

use crate::annotate::Annotations;
use crate::patterns::{is_upper_title, segment_count, SIMPLE_NUMBERED, SUBSECTION, TOC_ENTRY};
use crate::toc::TocIndex;
use crate::vocabulary::Vocabulary;
use regex::Regex;
use shared_types::{Paragraph, Style};

/// Outcome of one rule for one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Rule does not apply, try the next one
    Skip,
    /// Rule applies but the paragraph stays unstyled
    Leave,
    /// Rule applies and assigns this style
    Assign(Style),
}

pub trait HeadingRule: Send + Sync {
    fn name(&self) -> &str;

    fn classify(&self, text: &str, toc: &TocIndex) -> Classification;
}

/// "Slika 3: ..." / "Tabela 2.1: ..."
pub struct CaptionRule {
    pattern: Regex,
}

impl CaptionRule {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl HeadingRule for CaptionRule {
    fn name(&self) -> &str {
        "caption"
    }

    fn classify(&self, text: &str, _toc: &TocIndex) -> Classification {
        if self.pattern.is_match(text) {
            Classification::Assign(Style::Caption)
        } else {
            Classification::Skip
        }
    }
}

/// "2.1 Title", "5.5.4 Title": level is the segment count
pub struct SubsectionRule;

impl HeadingRule for SubsectionRule {
    fn name(&self) -> &str {
        "subsection"
    }

    fn classify(&self, text: &str, _toc: &TocIndex) -> Classification {
        match SUBSECTION.captures(text) {
            Some(caps) => Classification::Assign(Style::heading(segment_count(&caps["num"]))),
            None => Classification::Skip,
        }
    }
}

/// TOC-shaped line in the body: level from the TOC, else the segment count
pub struct TocLeaderRule;

impl HeadingRule for TocLeaderRule {
    fn name(&self) -> &str {
        "toc_leader"
    }

    fn classify(&self, text: &str, toc: &TocIndex) -> Classification {
        let Some(caps) = TOC_ENTRY.captures(text) else {
            return Classification::Skip;
        };
        let number = &caps["num"];
        let level = toc
            .level(number, caps["title"].trim())
            .unwrap_or_else(|| segment_count(number));
        Classification::Assign(Style::heading(level))
    }
}

/// Numbered prefix glued to its title, e.g. "1.UVOD"
///
/// Promoted only when the TOC knows it, the title is all caps or the prefix
/// is at least three levels deep. A lone "1" in front of text is often a list
/// bullet and stays unstyled.
pub struct SimpleNumberedRule;

impl HeadingRule for SimpleNumberedRule {
    fn name(&self) -> &str {
        "simple_numbered"
    }

    fn classify(&self, text: &str, toc: &TocIndex) -> Classification {
        let Some(caps) = SIMPLE_NUMBERED.captures(text) else {
            return Classification::Skip;
        };
        let number = &caps["num"];
        let title = caps["title"].trim();
        let segments = segment_count(number);

        if let Some(level) = toc.level(number, title) {
            Classification::Assign(Style::heading(level))
        } else if is_upper_title(title) || segments >= 3 {
            Classification::Assign(Style::heading(segments))
        } else {
            Classification::Leave
        }
    }
}

pub struct HeadingClassifier {
    rules: Vec<Box<dyn HeadingRule>>,
}

impl HeadingClassifier {
    /// Caption, explicit subsection, TOC leader, simple numbered
    pub fn standard(vocabulary: &Vocabulary) -> Self {
        Self::with_rules(vec![
            Box::new(CaptionRule::new(vocabulary.caption.clone())),
            Box::new(SubsectionRule),
            Box::new(TocLeaderRule),
            Box::new(SimpleNumberedRule),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn HeadingRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Style inferred for a single text, `None` when left unmodified
    pub fn classify(&self, text: &str, toc: &TocIndex) -> Option<Style> {
        for rule in &self.rules {
            match rule.classify(text, toc) {
                Classification::Skip => continue,
                Classification::Leave => return None,
                Classification::Assign(style) => return Some(style),
            }
        }
        None
    }

    pub fn annotate(&self, paragraphs: &[Paragraph], toc: &TocIndex) -> Annotations {
        let mut annotations = Annotations::new();
        for paragraph in paragraphs {
            if let Some(style) = self.classify(&paragraph.content, toc) {
                annotations.insert(paragraph.id.clone(), style);
            }
        }
        annotations
    }
}
