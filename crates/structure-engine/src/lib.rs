//! Structural analysis of academic theses
//!
//! Input is the flat `(text, style)` block sequence produced by an ingestion
//! step; output is a [`StructureReport`] with detected sections, the parsed
//! table of contents, inferred heading styles and a completeness score.
//!
//! ```no_run
//! use shared_types::SourceBlock;
//! use structure_engine::StructureAnalyzer;
//!
//! let analyzer = StructureAnalyzer::new();
//! let report = analyzer.analyze(&[SourceBlock::plain("1. UVOD")]);
//! println!("{}", report.to_text());
//! ```

pub mod annotate;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod headings;
pub mod intro;
pub mod normalize;
pub mod patterns;
pub mod scoring;
pub mod sections;
pub mod styling;
pub mod title_page;
pub mod toc;
pub mod vocabulary;

pub use annotate::Annotations;
pub use cleanup::{filter_index_regions, Cleanup, CleanupOptions, CleanupPass};
pub use config::{AnalyzerConfig, ScoringConfig};
pub use error::StructureError;
pub use headings::{Classification, HeadingClassifier, HeadingRule};
pub use intro::{extract_introduction, introduction_quality};
pub use normalize::{normalize, normalize_with};
pub use scoring::StructureScorer;
pub use sections::{CoverPageSignals, SectionDetector};
pub use styling::style_special_sections;
pub use title_page::extract_title_page;
pub use toc::{TocIndex, TocParser};
pub use vocabulary::{Vocabulary, VocabularyTemplate};

use patterns::is_toc_artifact;
use shared_types::{Paragraph, SourceBlock, StructureReport};
use tracing::{debug, info, instrument};

/// Runs the whole pipeline for one document at a time
///
/// Holds only read-only state, so one analyzer can serve any number of
/// documents, including from several threads.
pub struct StructureAnalyzer {
    vocabulary: Vocabulary,
    config: AnalyzerConfig,
    classifier: HeadingClassifier,
}

impl StructureAnalyzer {
    /// Analyzer with the built-in Slovenian vocabulary and default settings
    pub fn new() -> Self {
        let vocabulary = Vocabulary::slovenian();
        let classifier = HeadingClassifier::standard(&vocabulary);
        Self {
            vocabulary,
            config: AnalyzerConfig::default(),
            classifier,
        }
    }

    pub fn with_vocabulary(
        vocabulary: Vocabulary,
        config: AnalyzerConfig,
    ) -> Result<Self, StructureError> {
        config.validate()?;
        let classifier = HeadingClassifier::standard(&vocabulary);
        Ok(Self {
            vocabulary,
            config,
            classifier,
        })
    }

    pub fn with_config(config: AnalyzerConfig) -> Result<Self, StructureError> {
        Self::with_vocabulary(Vocabulary::slovenian(), config)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Normalize `blocks` and analyze the result
    #[instrument(skip_all, fields(blocks = blocks.len()))]
    pub fn analyze(&self, blocks: &[SourceBlock]) -> StructureReport {
        let paragraphs = normalize(blocks);
        debug!(paragraphs = paragraphs.len(), "normalized");
        self.analyze_paragraphs(&paragraphs)
    }

    /// Analyze already normalized paragraphs
    pub fn analyze_paragraphs(&self, paragraphs: &[Paragraph]) -> StructureReport {
        let vocab = &self.vocabulary;

        let table_of_contents = TocParser::new(vocab).parse(paragraphs);
        debug!(entries = table_of_contents.len(), "table of contents parsed");

        let special = style_special_sections(paragraphs, vocab);

        let uvod = intro::extract_introduction_lines(
            paragraphs
                .iter()
                .map(|p| p.content.as_str())
                .filter(|text| !is_toc_artifact(text)),
            vocab,
        );
        debug!(lines = uvod.len(), "introduction extracted");

        let internal_title_page = extract_title_page(paragraphs, vocab);

        let detector = SectionDetector::new(vocab, &self.config);
        let front_matter_found = detector.front_matter(paragraphs, &uvod);
        let body_sections_found = detector.body_sections(paragraphs, &uvod);
        let out_of_order_sections = detector.out_of_order(paragraphs);
        debug!(
            front_matter = front_matter_found.found(),
            body = body_sections_found.found(),
            out_of_order = out_of_order_sections.len(),
            "sections detected"
        );

        let body = filter_index_regions(paragraphs, vocab);
        let headings = self
            .classifier
            .annotate(&body, &TocIndex::new(&table_of_contents));
        debug!(
            special = special.len(),
            headings = headings.len(),
            "styles inferred"
        );
        let styled = special.merge(headings).apply(&body);

        let cleaned = Cleanup::new(vocab, &self.config.cleanup).run(styled);

        let structure_analysis = StructureScorer::new(vocab, &self.config).score(
            &front_matter_found,
            &body_sections_found,
            &uvod,
        );
        info!(
            score = structure_analysis.score,
            found = structure_analysis.found_sections,
            total = structure_analysis.total_sections,
            "structure analyzed"
        );

        StructureReport {
            internal_title_page,
            missing_sections: front_matter_found.missing(),
            front_matter_found,
            missing_body_sections: body_sections_found.missing(),
            body_sections_found,
            uvod,
            table_of_contents,
            out_of_order_sections,
            structure_analysis,
            paragraphs: cleaned,
        }
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
