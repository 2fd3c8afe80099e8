//! Main analysis engine combining normalization, extraction, keyword
//! matching, scoring and optimization planning

use crate::processing::ats_matcher::{match_keywords, KeywordMatch};
use crate::processing::contact::{ContactDetails, ContactExtractor};
use crate::processing::document::{detect_sections, SectionCoverage};
use crate::processing::keywords::KeywordCatalogue;
use crate::processing::metrics::MetricsCalculator;
use crate::processing::optimizer::{self, OptimizationResult, OptimizeOptions};
use crate::processing::scoring::{self, AtsReport};
use crate::processing::text_processor::TextProcessor;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Canonical intermediate representation of one analysed document.
///
/// Recomputed from scratch on every analysis, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub readability: f64,
    pub contact: ContactDetails,
    pub experience_years: u32,
    pub section_coverage: Vec<SectionCoverage>,
    pub keyword_matches: Vec<KeywordMatch>,
}

/// Everything `analyze` needs besides the engine itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub text: String,
    #[serde(default)]
    pub job_target: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub custom_keywords: Vec<String>,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_job_target(mut self, job_target: impl Into<String>) -> Self {
        self.job_target = Some(job_target.into());
        self
    }

    pub fn with_job_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = Some(job_description.into());
        self
    }

    pub fn with_custom_keywords(mut self, keywords: Vec<String>) -> Self {
        self.custom_keywords = keywords;
        self
    }
}

/// Result of one analysis: the report plus the stats it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub stats: CvStats,
    pub report: AtsReport,
}

/// Stateless analysis engine.
///
/// Holds only compiled, immutable patterns, so one engine can be shared
/// across threads and used for any number of concurrent analyses.
pub struct AnalysisEngine {
    text_processor: TextProcessor,
    contact_extractor: ContactExtractor,
    metrics: MetricsCalculator,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            text_processor: TextProcessor::new(),
            contact_extractor: ContactExtractor::new(),
            metrics: MetricsCalculator::new(),
        }
    }

    /// Analyse a document, stamping the report with the current time
    pub fn analyze(&self, input: &AnalysisInput) -> Analysis {
        self.analyze_at(input, Utc::now())
    }

    /// Analyse a document with a caller-supplied evaluation timestamp
    pub fn analyze_at(&self, input: &AnalysisInput, evaluated_at: DateTime<Utc>) -> Analysis {
        let start = Instant::now();

        let stats = self.compute_stats(input);
        let report = scoring::score(&stats, evaluated_at);

        info!(
            "Analysis complete: score {} ({} of {} keywords matched) in {}ms",
            report.score,
            report.keywords_matched.len(),
            stats.keyword_matches.len(),
            start.elapsed().as_millis()
        );

        Analysis { stats, report }
    }

    /// Build `CvStats` for a document without scoring it
    pub fn compute_stats(&self, input: &AnalysisInput) -> CvStats {
        let text = self.text_processor.normalize(&input.text);
        debug!(
            "Normalized {} input characters to {}",
            input.text.chars().count(),
            text.len()
        );

        let metrics = self.metrics.compute(&self.text_processor, &text);
        let contact = self.contact_extractor.extract(&text);
        let section_coverage = detect_sections(&text);

        let catalogue = KeywordCatalogue::build(
            input.job_target.as_deref(),
            input.job_description.as_deref(),
            &input.custom_keywords,
        );
        debug!("Keyword catalogue holds {} entries", catalogue.keywords().len());

        let keyword_matches = match_keywords(&text, catalogue.keywords());

        CvStats {
            word_count: metrics.word_count,
            sentence_count: metrics.sentence_count,
            readability: metrics.readability,
            contact,
            experience_years: metrics.experience_years,
            section_coverage,
            keyword_matches,
        }
    }

    /// Turn an analysis into editing suggestions, stamped with the current time
    pub fn optimize(
        &self,
        stats: &CvStats,
        report: &AtsReport,
        options: &OptimizeOptions,
    ) -> OptimizationResult {
        self.optimize_at(stats, report, options, Utc::now())
    }

    pub fn optimize_at(
        &self,
        stats: &CvStats,
        report: &AtsReport,
        options: &OptimizeOptions,
        updated_at: DateTime<Utc>,
    ) -> OptimizationResult {
        let result = optimizer::plan(stats, report, options, updated_at);

        info!(
            "Optimization planned: {} keyword recommendations, projected score {}",
            result.keyword_recommendations.len(),
            result.raised_score
        );

        result
    }
}
