//! Completeness score and recommendations

use crate::config::AnalyzerConfig;
use crate::intro::introduction_quality;
use crate::vocabulary::Vocabulary;
use shared_types::{SectionResults, StructureAnalysis};

pub struct StructureScorer<'a> {
    vocabulary: &'a Vocabulary,
    config: &'a AnalyzerConfig,
}

impl<'a> StructureScorer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, config: &'a AnalyzerConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn score(
        &self,
        front_matter: &SectionResults,
        body_sections: &SectionResults,
        introduction: &[String],
    ) -> StructureAnalysis {
        let weights = &self.config.scoring;
        let total = front_matter.len() + body_sections.len();
        let found = front_matter.found() + body_sections.found();
        let quality = introduction_quality(introduction, self.vocabulary);
        let missing_critical = self.missing_critical(front_matter, body_sections);

        let base = completeness(found, total);
        let bonus = match quality {
            0 => 0,
            1 => weights.partial_intro_bonus,
            _ => weights.rich_intro_bonus,
        };
        let penalty = weights.critical_penalty as f64 * missing_critical as f64;
        let score = (base + bonus as f64 - penalty).clamp(0.0, 100.0).round() as u8;

        StructureAnalysis {
            score,
            total_sections: total,
            found_sections: found,
            missing_critical,
            uvod_quality: quality,
            recommendations: self.recommendations(found, total, missing_critical, introduction),
        }
    }

    /// Critical sections marked absent in either result set
    pub fn missing_critical(
        &self,
        front_matter: &SectionResults,
        body_sections: &SectionResults,
    ) -> usize {
        self.vocabulary
            .critical_sections
            .iter()
            .filter(|name| {
                front_matter.get(name) == Some(false) || body_sections.get(name) == Some(false)
            })
            .count()
    }

    /// Exactly one overall verdict, then the critical count and introduction
    /// length findings when they apply
    pub fn recommendations(
        &self,
        found: usize,
        total: usize,
        missing_critical: usize,
        introduction: &[String],
    ) -> Vec<String> {
        let messages = &self.vocabulary.messages;
        let weights = &self.config.scoring;
        let ratio = completeness(found, total);

        let verdict = if ratio < weights.major_fixes_threshold as f64 {
            &messages.major_fixes
        } else if ratio < weights.incomplete_threshold as f64 {
            &messages.incomplete
        } else {
            &messages.excellent
        };

        let mut recommendations = vec![verdict.clone()];
        if missing_critical > 0 {
            recommendations.push(
                messages
                    .missing_critical
                    .replace("{count}", &missing_critical.to_string()),
            );
        }
        if introduction.len() < self.config.min_introduction_lines.max(1) {
            recommendations.push(messages.short_introduction.clone());
        }
        recommendations
    }
}

/// Percentage of found sections, 0 for an empty template
fn completeness(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * found as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::SectionResult;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn results(sections: &[crate::vocabulary::CompiledSection], present: bool) -> SectionResults {
        sections
            .iter()
            .map(|s| SectionResult::new(s.name.clone(), present))
            .collect()
    }

    #[test]
    fn test_perfect_score() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);

        let intro = lines(&[
            "Cilj tega dela je raziskovanje...",
            "Raziskovalna vprašanja vključujejo...",
            "Predpostavke naše raziskave...",
            "Omejitve raziskave so...",
        ]);
        let analysis = scorer.score(
            &results(&vocab.front_matter, true),
            &results(&vocab.body_sections, true),
            &intro,
        );

        assert!(analysis.score >= 95);
        assert_eq!(analysis.found_sections, analysis.total_sections);
        assert_eq!(analysis.total_sections, 21);
        assert_eq!(analysis.missing_critical, 0);
        assert_eq!(analysis.uvod_quality, 4);
        assert!(analysis.recommendations[0].contains("Odlična struktura"));
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_poor_score() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);

        let mut front = results(&vocab.front_matter, false);
        front.set("Povzetek SI", true);
        front.set("Povzetek EN", true);
        let mut body = results(&vocab.body_sections, false);
        body.set("Uvod", true);
        body.set("Zaključek", true);

        let analysis = scorer.score(&front, &body, &[]);
        assert!(analysis.score < 50);
        assert!(analysis.found_sections < analysis.total_sections);
        assert_eq!(analysis.missing_critical, 0);
        assert_eq!(analysis.uvod_quality, 0);
    }

    #[test]
    fn test_critical_penalty_and_clamp() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);

        let analysis = scorer.score(
            &results(&vocab.front_matter, false),
            &results(&vocab.body_sections, false),
            &[],
        );
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.missing_critical, 4);
    }

    #[test]
    fn test_intro_bonus_tiers() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);

        let mut front = results(&vocab.front_matter, true);
        front.set("Kazalo grafov", false);
        let body = results(&vocab.body_sections, true);
        // 20 of 21 found: 95.238...
        let none = scorer.score(&front, &body, &lines(&["Besedilo"]));
        let one = scorer.score(&front, &body, &lines(&["Cilj"]));
        let two = scorer.score(&front, &body, &lines(&["Cilj", "Omejitve"]));
        assert_eq!(none.score, 95);
        assert_eq!(one.score, 97);
        assert_eq!(two.score, 100);
    }

    #[test]
    fn test_empty_template_scores_zero() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);
        let analysis = scorer.score(&SectionResults::default(), &SectionResults::default(), &[]);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.total_sections, 0);
    }

    #[test]
    fn test_generate_recommendations() {
        let vocab = Vocabulary::slovenian();
        let config = AnalyzerConfig::default();
        let scorer = StructureScorer::new(&vocab, &config);

        let recommendations = scorer.recommendations(5, 10, 2, &[]);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("večje popravke"));
        assert!(recommendations[1].contains("kritičnih sekcij"));
        assert!(recommendations[1].contains('2'));
        assert!(recommendations[2].contains("prekratek"));

        let intro = lines(&["Cilj", "Raziskovalna vprašanja", "Predpostavke"]);
        let recommendations = scorer.recommendations(9, 10, 0, &intro);
        assert_eq!(recommendations.len(), 1);
        assert!(recommendations[0].contains("Odlična struktura"));

        let recommendations = scorer.recommendations(8, 10, 0, &intro[..2]);
        assert_eq!(
            recommendations,
            vec![
                vocab.messages.incomplete.clone(),
                vocab.messages.short_introduction.clone(),
            ]
        );
    }
}
