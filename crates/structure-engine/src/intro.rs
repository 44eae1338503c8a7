//! Introduction block extraction and subsection coverage

use crate::patterns::NUMBERED_HEADING;
use crate::vocabulary::Vocabulary;
use shared_types::Paragraph;

/// Lines between the introduction heading and the next numbered heading
pub fn extract_introduction(paragraphs: &[Paragraph], vocabulary: &Vocabulary) -> Vec<String> {
    extract_introduction_lines(paragraphs.iter().map(|p| p.content.as_str()), vocabulary)
}

pub fn extract_introduction_lines<'a, I>(lines: I, vocabulary: &Vocabulary) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collected = Vec::new();
    let mut active = false;

    for line in lines {
        if vocabulary.is_introduction_heading(line) {
            active = true;
            continue;
        }
        if !active {
            continue;
        }
        if NUMBERED_HEADING.is_match(line) {
            break;
        }
        collected.push(line.to_string());
    }

    collected
}

/// Per-pattern presence in the joined introduction text
pub fn subsection_coverage(introduction: &[String], vocabulary: &Vocabulary) -> Vec<(String, bool)> {
    let joined = introduction.join("\n");
    vocabulary
        .introduction_subsections
        .iter()
        .map(|p| (p.source.clone(), p.is_match(&joined)))
        .collect()
}

/// Number of subsection patterns found anywhere in the introduction
pub fn introduction_quality(introduction: &[String], vocabulary: &Vocabulary) -> usize {
    subsection_coverage(introduction, vocabulary)
        .iter()
        .filter(|(_, found)| *found)
        .count()
}
