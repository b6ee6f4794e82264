//! Scoring Engine: tokenizes once, runs the four sub-scorers, aggregates.
//!
//! # Pipeline
//! raw text → `normalize` → Keywords → Length → Formatting → Readability → sum.
//! Sub-scores are independent; evaluation order only fixes suggestion order.
//!
//! # Failure containment
//! Sub-scorers are total functions. The only place a fault is caught is
//! `ScoringEngine::analyze`, which turns a panic into an `ANALYSIS_FAILED`
//! result instead of returning a partial score.

use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;
use tracing::{debug, error, warn};

use crate::scoring::formatting::score_formatting;
use crate::scoring::keywords::{compile_patterns, score_keywords, KeywordPattern};
use crate::scoring::length::score_length;
use crate::scoring::readability::score_readability;
use crate::scoring::report::{AnalysisResult, CategoryReport, FailureKind};
use crate::scoring::rubric::Rubric;
use crate::scoring::text::{normalize, EnglishTextProcessor, TextProcessor};

const EXTRACTION_FAILED_MESSAGE: &str = "Unable to extract text from PDF.";
const RETRY_SUGGESTION: &str = "Ensure the resume is a valid PDF and try again.";

/// Immutable scorer shared across requests. Holds no per-call state.
pub struct ScoringEngine {
    rubric: Rubric,
    patterns: Vec<KeywordPattern>,
    processor: Box<dyn TextProcessor>,
}

impl ScoringEngine {
    pub fn new(rubric: Rubric, processor: Box<dyn TextProcessor>) -> Self {
        let patterns = compile_patterns(&rubric.keywords, rubric.matching, processor.as_ref());
        Self {
            rubric,
            patterns,
            processor,
        }
    }

    /// Engine over the standard English tokenizer and stop words.
    pub fn english(rubric: Rubric) -> Self {
        Self::new(rubric, Box::new(EnglishTextProcessor::new()))
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Scores `text`. `None` or an empty string means extraction failed upstream.
    pub fn analyze(&self, text: Option<&str>) -> AnalysisResult {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("No document text to analyze");
                return AnalysisResult::failed(
                    FailureKind::ExtractionFailed,
                    EXTRACTION_FAILED_MESSAGE.to_string(),
                    Vec::new(),
                );
            }
        };

        match panic::catch_unwind(AssertUnwindSafe(|| self.run_pipeline(text))) {
            Ok(result) => result,
            Err(payload) => {
                let fault = panic_message(payload.as_ref());
                error!("Resume analysis failed: {fault}");
                AnalysisResult::failed(
                    FailureKind::AnalysisFailed,
                    format!("Analysis failed: {fault}"),
                    vec![RETRY_SUGGESTION.to_string()],
                )
            }
        }
    }

    fn run_pipeline(&self, text: &str) -> AnalysisResult {
        let tokens = normalize(text, self.processor.as_ref());

        let reports: [CategoryReport; 4] = [
            score_keywords(&tokens, &self.patterns),
            score_length(tokens.len()),
            score_formatting(text),
            score_readability(&tokens, text),
        ];

        let mut total = 0.0_f64;
        let mut feedback = IndexMap::with_capacity(reports.len());
        let mut suggestions = Vec::new();
        let mut categories = Vec::with_capacity(reports.len());

        for report in reports {
            debug!(
                category = report.score.name.as_str(),
                value = report.score.value,
                "Category scored"
            );
            total += report.score.value;
            feedback.insert(
                report.score.name.as_str().to_string(),
                report.score.explanation.clone(),
            );
            suggestions.extend(report.suggestions);
            categories.push(report.score);
        }

        AnalysisResult {
            score: round_one_decimal(total.clamp(0.0, 100.0)),
            feedback,
            suggestions,
            categories,
            failure: None,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown fault".to_string()
    }
}
