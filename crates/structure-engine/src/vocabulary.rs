//! Section vocabulary for the thesis template
//!
//! A [`VocabularyTemplate`] is plain data (and can be loaded from JSON); a
//! [`Vocabulary`] is the validated, compiled form the pipeline consumes.
//! All patterns are compiled verbatim, so case-insensitive entries carry an
//! inline `(?i)` flag.

use crate::error::StructureError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::Style;
use std::collections::HashSet;

/// Specialized check used instead of plain pattern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    /// Multi-signal check over the first paragraphs of the document
    CoverPage,
    /// Thesis-type label plus every labeled field line
    InternalTitlePage,
    /// Introduction block must cover every subsection pattern
    IntroductionSubsections,
}

/// A required section and how to detect it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTemplate {
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub validator: Option<ValidatorKind>,
}

impl SectionTemplate {
    fn patterns(name: &str, patterns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            validator: None,
        }
    }

    fn validated(name: &str, validator: ValidatorKind) -> Self {
        Self {
            name: name.to_string(),
            patterns: Vec::new(),
            validator: Some(validator),
        }
    }
}

/// Paragraph that receives a fixed heading style before inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialHeadingTemplate {
    pub pattern: String,
    pub level: u8,
}

/// Line prefixes of the internal title page fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePageFields {
    pub student: String,
    pub program: String,
    pub direction: String,
    pub mentor: String,
    pub co_mentor: String,
    pub lecturer: String,
}

/// Recommendation texts; `{count}` is replaced in `missing_critical`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub major_fixes: String,
    pub incomplete: String,
    pub excellent: String,
    pub missing_critical: String,
    pub short_introduction: String,
}

/// Uncompiled template description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTemplate {
    pub front_matter: Vec<SectionTemplate>,
    pub body_sections: Vec<SectionTemplate>,
    pub introduction_subsections: Vec<String>,
    /// Bare title of the introduction chapter, e.g. "UVOD"
    pub introduction_title: String,
    pub canonical_order: Vec<String>,
    pub critical_sections: Vec<String>,
    pub person_name_pattern: String,
    pub thesis_type_pattern: String,
    pub city_date_pattern: String,
    pub title_page_labels: Vec<String>,
    pub title_page_fields: TitlePageFields,
    pub special_headings: Vec<SpecialHeadingTemplate>,
    pub toc_heading_pattern: String,
    pub toc_end_pattern: String,
    pub index_heading_pattern: String,
    pub caption_pattern: String,
    pub acknowledgments_pattern: String,
    pub references_pattern: String,
    pub messages: Messages,
}

impl VocabularyTemplate {
    /// Template for Slovenian master's and bachelor's theses
    pub fn slovenian() -> Self {
        Self {
            front_matter: vec![
                SectionTemplate::validated("Naslovna stran na platnici", ValidatorKind::CoverPage),
                SectionTemplate::validated(
                    "Notranja naslovna stran v zaključnem delu",
                    ValidatorKind::InternalTitlePage,
                ),
                SectionTemplate::patterns(
                    "Naslednja notranja naslovna stran",
                    &[r"(?i)naslov(na)? stran", r"(?i)univerza", r"(?i)fakulteta"],
                ),
                SectionTemplate::patterns("Zahvala", &[r"(?i)\bzahvala\b"]),
                SectionTemplate::patterns(
                    "Povzetek SI",
                    &[r"(?i)\bpovzetek\b", r"(?i)ključne besede", r"(?i)udk"],
                ),
                SectionTemplate::patterns(
                    "Povzetek EN",
                    &[r"(?i)\babstract\b", r"(?i)keywords", r"(?i)udc"],
                ),
                SectionTemplate::patterns("Izjava o avtorstvu", &[r"(?i)izjava o avtorstvu"]),
                SectionTemplate::patterns("Kazalo vsebine", &[r"(?i)kazalo vsebine"]),
                SectionTemplate::patterns("Kazalo slik", &[r"(?i)kazalo slik"]),
                SectionTemplate::patterns("Kazalo grafov", &[r"(?i)kazalo grafov"]),
                SectionTemplate::patterns("Kazalo tabel", &[r"(?i)kazalo tabel"]),
                SectionTemplate::patterns(
                    "Seznam simbolov in kratic",
                    &[
                        r"(?i)seznam.*simbol",
                        r"(?i)seznam.*kratic",
                        r"(?i)uporabljene.*kratice",
                    ],
                ),
                SectionTemplate::patterns("Vsebina zaključnega dela", &[r"(?i)\buvod\b", r"^1\."]),
                SectionTemplate::patterns(
                    "Seznam virov in literature",
                    &[r"(?i)viri in literatura", r"(?i)seznam virov"],
                ),
                SectionTemplate::patterns("Priloge", &[r"(?i)priloge"]),
            ],
            body_sections: vec![
                SectionTemplate::validated(
                    "Uvod (s podsekcijami)",
                    ValidatorKind::IntroductionSubsections,
                ),
                SectionTemplate::patterns("Uvod", &[r"(?i)^\d+\.\s*UVOD|^UVOD"]),
                SectionTemplate::patterns(
                    "Pregled literature",
                    &[r"(?i)^\d+\.\s*Pregled literature|^Pregled literature"],
                ),
                SectionTemplate::patterns(
                    "Metodologija",
                    &[r"(?i)^\d+\.\s*Metodologija|^Metodologija"],
                ),
                SectionTemplate::patterns("Rezultati", &[r"(?i)^\d+\.\s*Rezultati|^Rezultati"]),
                SectionTemplate::patterns(
                    "Zaključek",
                    &[r"(?i)^\d+\.\s*(?:Zaključek|Sklep)|^(?:Zaključek|Sklep)"],
                ),
            ],
            introduction_subsections: vec![
                r"(?i)cilj".to_string(),
                r"(?i)predpostavk".to_string(),
                r"(?i)raziskovaln".to_string(),
                r"(?i)omejit".to_string(),
            ],
            introduction_title: "UVOD".to_string(),
            canonical_order: [
                "Naslovna stran na platnici",
                "Notranja naslovna stran v zaključnem delu",
                "Naslednja notranja naslovna stran",
                "Zahvala",
                "Povzetek SI",
                "Povzetek EN",
                "Izjava o avtorstvu",
                "Kazalo vsebine",
                "Kazalo slik",
                "Kazalo grafov",
                "Kazalo tabel",
                "Seznam simbolov in kratic",
                "Uvod",
                "Pregled literature",
                "Metodologija",
                "Rezultati",
                "Zaključek",
                "Seznam virov in literature",
                "Priloge",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            critical_sections: ["Povzetek SI", "Povzetek EN", "Uvod", "Zaključek"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            // Two or three capitalised words; longer capitalised lines are titles
            person_name_pattern: r"^\p{Lu}\p{Ll}+(?:\s+\p{Lu}\p{Ll}+){1,2}$".to_string(),
            thesis_type_pattern:
                r"(?i)\b(Magistrsko delo|Diplomsko delo|Doktorska disertacija|Kandidatensko delo)\b"
                    .to_string(),
            city_date_pattern: r"^\p{Lu}\p{Ll}+,\s*(?:januar|februar|marec|april|maj|junij|julij|avgust|september|oktober|november|december)\s+\d{4}$"
                .to_string(),
            title_page_labels: [
                "Študent(ka):",
                "Študijski program:",
                "Smer:",
                "Mentor(ica):",
                "Lektor(ica):",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            title_page_fields: TitlePageFields {
                student: "Študent".to_string(),
                program: "Študijski program".to_string(),
                direction: "Smer".to_string(),
                mentor: "Mentor".to_string(),
                co_mentor: "Somentor".to_string(),
                lecturer: "Lektor".to_string(),
            },
            special_headings: vec![
                SpecialHeadingTemplate {
                    pattern: r"^Zahvala$".to_string(),
                    level: 1,
                },
                SpecialHeadingTemplate {
                    pattern: r"(?i)^(?:povzetek|abstract)$".to_string(),
                    level: 2,
                },
                SpecialHeadingTemplate {
                    pattern: r"(?i)^(?:ključne besede|udk|keywords|udc):? ".to_string(),
                    level: 2,
                },
            ],
            toc_heading_pattern: r"(?i)kazalo vsebine".to_string(),
            toc_end_pattern: r"(?i)^(?:kazalo slik|kazalo tabel|seznam virov|priloge)".to_string(),
            index_heading_pattern:
                r"(?i)^(?:kazalo vsebine|kazalo slik|kazalo grafov|kazalo tabel)".to_string(),
            caption_pattern: r"(?i)^(?:Slika|Tabela|Graf)\s*\d+(?:\.\d+)*:".to_string(),
            acknowledgments_pattern: r"(?i)^zahvala\b".to_string(),
            references_pattern:
                r"(?i)^(?:\d+(?:\.\d+)*\.?\s*)?(?:viri in literatura|seznam virov)".to_string(),
            messages: Messages {
                major_fixes: "Struktura dokumenta potrebuje večje popravke, manjka veliko obveznih delov."
                    .to_string(),
                incomplete: "Struktura je dobra, vendar nekateri obvezni deli še manjkajo."
                    .to_string(),
                excellent: "Odlična struktura dokumenta, vsi ključni deli so prisotni.".to_string(),
                missing_critical: "Manjka {count} kritičnih sekcij (povzetek, abstract, uvod ali zaključek)."
                    .to_string(),
                short_introduction: "Uvod je prekratek. Razširite ga s cilji, predpostavkami, raziskovalnimi vprašanji in omejitvami."
                    .to_string(),
            },
        }
    }
}

/// A compiled pattern that remembers its source text
#[derive(Debug, Clone)]
pub struct Pattern {
    pub source: String,
    pub regex: Regex,
}

impl Pattern {
    fn compile(section: &str, source: &str) -> Result<Self, StructureError> {
        let regex = Regex::new(source).map_err(|e| StructureError::InvalidPattern {
            section: section.to_string(),
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug, Clone)]
pub struct CompiledSection {
    pub name: String,
    pub patterns: Vec<Pattern>,
    pub validator: Option<ValidatorKind>,
}

impl CompiledSection {
    fn compile(template: &SectionTemplate) -> Result<Self, StructureError> {
        if template.patterns.is_empty() && template.validator.is_none() {
            return Err(StructureError::InvalidVocabulary(format!(
                "section '{}' has neither patterns nor a validator",
                template.name
            )));
        }
        let patterns = template
            .patterns
            .iter()
            .map(|p| Pattern::compile(&template.name, p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: template.name.clone(),
            patterns,
            validator: template.validator,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Validated, compiled vocabulary
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub front_matter: Vec<CompiledSection>,
    pub body_sections: Vec<CompiledSection>,
    pub introduction_subsections: Vec<Pattern>,
    pub introduction_title: String,
    pub numbered_introduction: Regex,
    pub canonical_order: Vec<String>,
    pub critical_sections: Vec<String>,
    pub person_name: Regex,
    pub thesis_type: Regex,
    pub city_date: Regex,
    pub title_page_labels: Vec<String>,
    pub title_page_fields: TitlePageFields,
    pub special_headings: Vec<(Regex, Style)>,
    pub toc_heading: Regex,
    pub toc_end: Regex,
    pub index_heading: Regex,
    pub caption: Regex,
    pub acknowledgments: Regex,
    pub references: Regex,
    pub messages: Messages,
}

lazy_static! {
    static ref SLOVENIAN: Vocabulary = Vocabulary::compile(&VocabularyTemplate::slovenian()).unwrap();
}

impl Vocabulary {
    /// Built-in Slovenian template
    pub fn slovenian() -> Self {
        SLOVENIAN.clone()
    }

    /// Compile a JSON-encoded [`VocabularyTemplate`]
    pub fn from_json(json: &str) -> Result<Self, StructureError> {
        let template: VocabularyTemplate = serde_json::from_str(json)?;
        Self::compile(&template)
    }

    /// Validate and compile a template description
    pub fn compile(template: &VocabularyTemplate) -> Result<Self, StructureError> {
        let front_matter = template
            .front_matter
            .iter()
            .map(CompiledSection::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let body_sections = template
            .body_sections
            .iter()
            .map(CompiledSection::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut names = HashSet::new();
        for section in front_matter.iter().chain(&body_sections) {
            if !names.insert(section.name.as_str()) {
                return Err(StructureError::InvalidVocabulary(format!(
                    "duplicate section name '{}'",
                    section.name
                )));
            }
        }
        for name in template.canonical_order.iter().chain(&template.critical_sections) {
            if !names.contains(name.as_str()) {
                return Err(StructureError::InvalidVocabulary(format!(
                    "unknown section '{}' in ordering or critical list",
                    name
                )));
            }
        }
        if template.introduction_title.trim().is_empty() {
            return Err(StructureError::InvalidVocabulary(
                "introduction title is empty".to_string(),
            ));
        }

        let compile = |name: &str, source: &str| Pattern::compile(name, source).map(|p| p.regex);

        let introduction_subsections = template
            .introduction_subsections
            .iter()
            .map(|p| Pattern::compile("introduction", p))
            .collect::<Result<Vec<_>, _>>()?;
        let numbered_introduction = compile(
            "introduction",
            &format!(
                r"(?i)^\d+\.\s+{}",
                regex::escape(template.introduction_title.trim())
            ),
        )?;

        let special_headings = template
            .special_headings
            .iter()
            .map(|h| {
                compile("special heading", &h.pattern)
                    .map(|re| (re, Style::heading(h.level as usize)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            front_matter,
            body_sections,
            introduction_subsections,
            introduction_title: template.introduction_title.trim().to_string(),
            numbered_introduction,
            canonical_order: template.canonical_order.clone(),
            critical_sections: template.critical_sections.clone(),
            person_name: compile("cover page", &template.person_name_pattern)?,
            thesis_type: compile("cover page", &template.thesis_type_pattern)?,
            city_date: compile("cover page", &template.city_date_pattern)?,
            title_page_labels: template.title_page_labels.clone(),
            title_page_fields: template.title_page_fields.clone(),
            special_headings,
            toc_heading: compile("table of contents", &template.toc_heading_pattern)?,
            toc_end: compile("table of contents", &template.toc_end_pattern)?,
            index_heading: compile("index", &template.index_heading_pattern)?,
            caption: compile("caption", &template.caption_pattern)?,
            acknowledgments: compile("acknowledgments", &template.acknowledgments_pattern)?,
            references: compile("references", &template.references_pattern)?,
            messages: template.messages.clone(),
        })
    }

    /// Is `text` the heading that opens the introduction block?
    pub fn is_introduction_heading(&self, text: &str) -> bool {
        text.trim().to_uppercase() == self.introduction_title.to_uppercase()
            || self.numbered_introduction.is_match(text)
    }

    pub fn section(&self, name: &str) -> Option<&CompiledSection> {
        self.front_matter
            .iter()
            .chain(&self.body_sections)
            .find(|s| s.name == name)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::slovenian()
    }
}
