//! Paragraph-level value objects shared by the analyzer and its callers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One raw block handed over by the ingestion collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBlock {
    pub text: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl SourceBlock {
    pub fn new(text: impl Into<String>, style: Option<&str>) -> Self {
        Self {
            text: text.into(),
            style: style.map(str::to_string),
        }
    }

    /// Block without any style hint
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

/// Symbolic paragraph style label
///
/// Unknown labels are preserved verbatim in `Other` and carry no signal for
/// heading inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Normal,
    Heading(u8),
    Caption,
    Other(String),
}

impl Style {
    /// Interpret an optional style hint from the source document
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(str::trim) {
            None | Some("") => Style::Normal,
            Some(label) => Self::from_label(label),
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Normal" => Style::Normal,
            "Caption" => Style::Caption,
            _ => label
                .strip_prefix("Heading ")
                .and_then(|level| level.trim().parse::<u8>().ok())
                .filter(|level| *level > 0)
                .map(Style::Heading)
                .unwrap_or_else(|| Style::Other(label.to_string())),
        }
    }

    /// Heading style for a numbering depth, saturating at `u8::MAX`
    pub fn heading(level: usize) -> Self {
        Style::Heading(u8::try_from(level.max(1)).unwrap_or(u8::MAX))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Normal => f.write_str("Normal"),
            Style::Heading(level) => write!(f, "Heading {}", level),
            Style::Caption => f.write_str("Caption"),
            Style::Other(label) => f.write_str(label),
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Style::from_label(&label))
    }
}

/// A normalized, non-empty paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: String,
    pub style: Style,
    pub content: String,
}

impl Paragraph {
    pub fn new(id: impl Into<String>, style: Style, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style,
            content: content.into(),
        }
    }

    /// Copy of this paragraph carrying a different style
    pub fn with_style(&self, style: Style) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}

/// One entry of the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Dotted numeric path, e.g. "2.1.1"
    pub number: String,
    pub title: String,
    pub level: usize,
    pub page: u32,
}

impl TocEntry {
    /// Numeric path segments; non-numeric segments are skipped
    pub fn segments(&self) -> Vec<u32> {
        self.number
            .split('.')
            .filter_map(|s| s.parse().ok())
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing never panics and a style label always survives a round trip
        #[test]
        fn from_label_never_panics(label in "\\PC{0,40}") {
            let style = Style::from_label(&label);
            prop_assert_eq!(Style::from_label(&style.to_string()), style);
        }

        /// Heading levels keep their numeric depth through the label form
        #[test]
        fn heading_label_keeps_level(level in 1u8..=u8::MAX) {
            let label = Style::Heading(level).to_string();
            prop_assert_eq!(Style::from_label(&label), Style::Heading(level));
        }
    }
}
