//! Style annotations produced by the styling passes
//!
//! Passes never mutate paragraphs. Each returns an [`Annotations`] set keyed by
//! paragraph id; sets are merged in pass order and applied once.

use shared_types::{Paragraph, Style};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    styles: HashMap<String, Style>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, style: Style) {
        self.styles.insert(id.into(), style);
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Combine with a later pass; the later pass wins on conflicts
    pub fn merge(mut self, later: Annotations) -> Self {
        self.styles.extend(later.styles);
        self
    }

    /// Styled copies of `paragraphs`
    pub fn apply(&self, paragraphs: &[Paragraph]) -> Vec<Paragraph> {
        paragraphs
            .iter()
            .map(|p| match self.styles.get(&p.id) {
                Some(style) => p.with_style(style.clone()),
                None => p.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(id: &str) -> Paragraph {
        Paragraph::new(id, Style::Normal, format!("content {}", id))
    }

    #[test]
    fn test_apply_leaves_unannotated_paragraphs() {
        let mut annotations = Annotations::new();
        annotations.insert("b", Style::Heading(2));

        let styled = annotations.apply(&[para("a"), para("b")]);
        assert_eq!(styled[0].style, Style::Normal);
        assert_eq!(styled[1].style, Style::Heading(2));
    }

    #[test]
    fn test_later_pass_wins() {
        let mut first = Annotations::new();
        first.insert("a", Style::Heading(1));
        first.insert("b", Style::Heading(2));
        let mut second = Annotations::new();
        second.insert("a", Style::Caption);

        let merged = first.merge(second);
        assert_eq!(merged.get("a"), Some(&Style::Caption));
        assert_eq!(merged.get("b"), Some(&Style::Heading(2)));
        assert_eq!(merged.len(), 2);
    }
}
