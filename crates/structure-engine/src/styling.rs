//! Fixed heading styles for front-matter labels (acknowledgments, abstracts,
//! keyword and classification lines)

use crate::annotate::Annotations;
use crate::vocabulary::Vocabulary;
use shared_types::Paragraph;

pub fn style_special_sections(paragraphs: &[Paragraph], vocabulary: &Vocabulary) -> Annotations {
    let mut annotations = Annotations::new();
    for paragraph in paragraphs {
        let text = paragraph.content.trim();
        if let Some((_, style)) = vocabulary
            .special_headings
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
        {
            annotations.insert(paragraph.id.clone(), style.clone());
        }
    }
    annotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Style;

    #[test]
    fn test_style_special_sections() {
        let lines = [
            "Zahvala",
            "ZAHVALA",
            "Povzetek",
            "Abstract",
            "Ključne besede: test, example",
            "Keywords: test, example",
            "UDK: 004.8",
            "UDC: 004.8",
            "Regular text",
        ];
        let paragraphs: Vec<_> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| Paragraph::new(i.to_string(), Style::Normal, *l))
            .collect();

        let styled = style_special_sections(&paragraphs, &Vocabulary::slovenian()).apply(&paragraphs);
        let styles: Vec<_> = styled.iter().map(|p| p.style.clone()).collect();

        assert_eq!(
            styles,
            vec![
                Style::Heading(1),
                Style::Normal,
                Style::Heading(2),
                Style::Heading(2),
                Style::Heading(2),
                Style::Heading(2),
                Style::Heading(2),
                Style::Heading(2),
                Style::Normal,
            ]
        );
    }

    #[test]
    fn test_label_needs_following_text() {
        let paragraphs = vec![
            Paragraph::new("a", Style::Normal, "Keywords"),
            Paragraph::new("b", Style::Normal, "Povzetek raziskave"),
        ];
        let annotations = style_special_sections(&paragraphs, &Vocabulary::slovenian());
        assert!(annotations.is_empty());
    }
}
