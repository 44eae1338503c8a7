//! Internal title page field extraction

use crate::vocabulary::Vocabulary;
use shared_types::{Paragraph, TitlePageInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Student,
    Program,
    Direction,
    Mentor,
    CoMentor,
    Lecturer,
}

/// Fill [`TitlePageInfo`] in one forward pass
///
/// The title is the run of lines collected since the previous boundary
/// (thesis type, city/date or labeled field line) when a thesis-type line is
/// reached.
pub fn extract_title_page(paragraphs: &[Paragraph], vocabulary: &Vocabulary) -> TitlePageInfo {
    let mut info = TitlePageInfo::default();
    let mut pending_title: Vec<&str> = Vec::new();

    for (idx, paragraph) in paragraphs.iter().enumerate() {
        let line = paragraph.content.trim();

        if vocabulary.thesis_type.is_match(line) {
            info.kind = Some(line.to_string());
            if !pending_title.is_empty() {
                info.title = Some(pending_title.join(" "));
            }
            pending_title.clear();
            continue;
        }

        if let Some(field) = labeled_field(line, vocabulary) {
            pending_title.clear();
            let Some((_, value)) = line.split_once(':') else {
                continue;
            };
            let mut value = value.trim().to_string();
            let slot = match field {
                Field::Student => &mut info.student,
                Field::Program => {
                    let next = paragraphs.get(idx + 1).map(|p| p.content.trim());
                    if let Some(next) = next.filter(|n| !n.contains(':')) {
                        value = format!("{} — {}", value, next);
                    }
                    &mut info.program
                }
                Field::Direction => &mut info.direction,
                Field::Mentor => &mut info.mentor,
                Field::CoMentor => &mut info.co_mentor,
                Field::Lecturer => &mut info.lecturer,
            };
            *slot = Some(value);
            continue;
        }

        if vocabulary.city_date.is_match(line) {
            pending_title.clear();
            continue;
        }

        pending_title.push(line);
    }

    info
}

fn labeled_field(line: &str, vocabulary: &Vocabulary) -> Option<Field> {
    let labels = &vocabulary.title_page_fields;
    // "Somentor" is checked before "Mentor" in case a template prefixes one with the other
    [
        (&labels.student, Field::Student),
        (&labels.program, Field::Program),
        (&labels.direction, Field::Direction),
        (&labels.co_mentor, Field::CoMentor),
        (&labels.mentor, Field::Mentor),
        (&labels.lecturer, Field::Lecturer),
    ]
    .into_iter()
    .find(|(label, _)| !label.is_empty() && line.starts_with(label.as_str()))
    .map(|(_, field)| field)
}
