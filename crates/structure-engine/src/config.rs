//! Analyzer tuning knobs

use crate::cleanup::CleanupOptions;
use crate::error::StructureError;
use serde::{Deserialize, Serialize};

/// Thresholds and weights of the completeness score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Bonus when at least two introduction subsections are present
    pub rich_intro_bonus: u32,
    /// Bonus when exactly one introduction subsection is present
    pub partial_intro_bonus: u32,
    /// Deducted per missing critical section
    pub critical_penalty: u32,
    /// Completeness percentage below which major fixes are recommended
    pub major_fixes_threshold: u32,
    /// Completeness percentage below which the structure counts as incomplete
    pub incomplete_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rich_intro_bonus: 5,
            partial_intro_bonus: 2,
            critical_penalty: 5,
            major_fixes_threshold: 70,
            incomplete_threshold: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Leading paragraphs inspected by the cover-page validator
    pub cover_page_window: usize,
    /// A cover line longer than this (in characters) may be the title
    pub min_title_length: usize,
    /// Introductions with fewer captured lines get a recommendation
    pub min_introduction_lines: usize,
    pub scoring: ScoringConfig,
    pub cleanup: CleanupOptions,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            cover_page_window: 6,
            min_title_length: 10,
            min_introduction_lines: 3,
            scoring: ScoringConfig::default(),
            cleanup: CleanupOptions::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, StructureError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StructureError> {
        if self.cover_page_window == 0 {
            return Err(StructureError::InvalidConfig(
                "cover_page_window must be at least 1".to_string(),
            ));
        }

        let scoring = &self.scoring;
        if scoring.major_fixes_threshold > 100 || scoring.incomplete_threshold > 100 {
            return Err(StructureError::InvalidConfig(
                "score thresholds must be within 0..=100".to_string(),
            ));
        }
        if scoring.incomplete_threshold < scoring.major_fixes_threshold {
            return Err(StructureError::InvalidConfig(format!(
                "incomplete_threshold ({}) is below major_fixes_threshold ({})",
                scoring.incomplete_threshold, scoring.major_fixes_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"cover_page_window": 8, "scoring": {"critical_penalty": 10}}"#)
                .unwrap();
        assert_eq!(config.cover_page_window, 8);
        assert_eq!(config.min_title_length, 10);
        assert_eq!(config.scoring.critical_penalty, 10);
        assert_eq!(config.scoring.rich_intro_bonus, 5);
    }

    #[test]
    fn test_from_json_validates() {
        assert!(AnalyzerConfig::from_json("{}").is_ok());
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"cover_page_window": 0}"#),
            Err(StructureError::InvalidConfig(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_json("not json"),
            Err(StructureError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = AnalyzerConfig {
            scoring: ScoringConfig {
                major_fixes_threshold: 95,
                incomplete_threshold: 90,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StructureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_empty_cover_window() {
        let config = AnalyzerConfig {
            cover_page_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
