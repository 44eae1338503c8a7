//! Structure analysis results

use crate::paragraph::{Paragraph, TocEntry};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Detection outcome for one required section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub name: String,
    pub present: bool,
    /// Pattern -> whether any paragraph matched it
    pub matched_keywords: BTreeMap<String, bool>,
}

impl SectionResult {
    pub fn new(name: impl Into<String>, present: bool) -> Self {
        Self {
            name: name.into(),
            present,
            matched_keywords: BTreeMap::new(),
        }
    }
}

/// Ordered section results, serialized as a `name -> present` map in
/// vocabulary order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResults(pub Vec<SectionResult>);

impl SectionResults {
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.iter().find(|r| r.name == name).map(|r| r.present)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn found(&self) -> usize {
        self.0.iter().filter(|r| r.present).count()
    }

    pub fn missing(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|r| !r.present)
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionResult> {
        self.0.iter()
    }

    /// Override the outcome for `name`, appending it if unknown
    pub fn set(&mut self, name: &str, present: bool) {
        match self.0.iter_mut().find(|r| r.name == name) {
            Some(result) => result.present = present,
            None => self.0.push(SectionResult::new(name, present)),
        }
    }
}

impl FromIterator<SectionResult> for SectionResults {
    fn from_iter<I: IntoIterator<Item = SectionResult>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<(&'static str, bool)> for SectionResults {
    fn from_iter<I: IntoIterator<Item = (&'static str, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, present)| SectionResult::new(name, present))
            .collect()
    }
}

impl Serialize for SectionResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for result in &self.0 {
            map.serialize_entry(&result.name, &result.present)?;
        }
        map.end()
    }
}

/// Fields read from the internal title page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePageInfo {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub student: Option<String>,
    pub program: Option<String>,
    pub direction: Option<String>,
    pub mentor: Option<String>,
    pub co_mentor: Option<String>,
    pub lecturer: Option<String>,
}

/// Numeric completeness summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    /// 0..=100
    pub score: u8,
    pub total_sections: usize,
    pub found_sections: usize,
    pub missing_critical: usize,
    /// Number of introduction subsection patterns present (0..=4 with the
    /// built-in vocabulary)
    pub uvod_quality: usize,
    pub recommendations: Vec<String>,
}

/// Complete result of one structural analysis
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureReport {
    pub internal_title_page: TitlePageInfo,
    pub front_matter_found: SectionResults,
    pub missing_sections: Vec<String>,
    pub body_sections_found: SectionResults,
    pub missing_body_sections: Vec<String>,
    pub uvod: Vec<String>,
    pub table_of_contents: Vec<TocEntry>,
    pub out_of_order_sections: Vec<String>,
    pub structure_analysis: StructureAnalysis,
    pub paragraphs: Vec<Paragraph>,
}

impl StructureReport {
    /// Generate a text summary
    pub fn to_text(&self) -> String {
        let analysis = &self.structure_analysis;
        let mut output = String::new();

        output.push_str("Thesis Structure Report\n");
        output.push_str(&"=".repeat(60));
        output.push_str("\n\n");

        output.push_str(&format!("Score: {}/100\n", analysis.score));
        output.push_str(&format!(
            "Sections: {} of {} found, {} critical missing\n",
            analysis.found_sections, analysis.total_sections, analysis.missing_critical
        ));
        output.push_str(&format!(
            "Introduction: {} lines, {} subsections covered\n",
            self.uvod.len(),
            analysis.uvod_quality
        ));
        output.push_str(&format!(
            "Table of contents: {} entries\n\n",
            self.table_of_contents.len()
        ));

        for (heading, results) in [
            ("Front Matter", &self.front_matter_found),
            ("Body Sections", &self.body_sections_found),
        ] {
            output.push_str(&format!("{}:\n", heading));
            output.push_str(&"-".repeat(40));
            output.push('\n');
            for result in results.iter() {
                let status = if result.present { "✓" } else { "✗" };
                output.push_str(&format!("{} {}\n", status, result.name));
            }
            output.push('\n');
        }

        if !self.out_of_order_sections.is_empty() {
            output.push_str(&format!(
                "Out of order: {}\n\n",
                self.out_of_order_sections.join(", ")
            ));
        }

        output.push_str("Recommendations:\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_results_serialize_in_order() {
        let results: SectionResults = [("Zahvala", true), ("Abstract", false), ("Priloge", true)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(json, r#"{"Zahvala":true,"Abstract":false,"Priloge":true}"#);
    }

    #[test]
    fn test_section_results_counts() {
        let mut results: SectionResults =
            [("Uvod", true), ("Zaključek", false)].into_iter().collect();
        assert_eq!(results.found(), 1);
        assert_eq!(results.missing(), vec!["Zaključek".to_string()]);

        results.set("Zaključek", true);
        assert_eq!(results.get("Zaključek"), Some(true));
        assert_eq!(results.get("Rezultati"), None);
    }

    #[test]
    fn test_title_page_info_type_field_name() {
        let info = TitlePageInfo {
            kind: Some("Magistrsko delo".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "Magistrsko delo");
        assert!(json["student"].is_null());
    }

    #[test]
    fn test_report_to_text() {
        let report = StructureReport {
            front_matter_found: [("Zahvala", true)].into_iter().collect(),
            body_sections_found: [("Uvod", false)].into_iter().collect(),
            structure_analysis: StructureAnalysis {
                score: 42,
                total_sections: 2,
                found_sections: 1,
                recommendations: vec!["Prva".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let text = report.to_text();
        assert!(text.contains("Score: 42/100"));
        assert!(text.contains("✓ Zahvala"));
        assert!(text.contains("✗ Uvod"));
        assert!(text.contains("1. Prva"));
    }
}
