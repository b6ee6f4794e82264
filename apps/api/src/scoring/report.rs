//! Output data models shared by the sub-scorers, the engine, and the HTTP layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Rubric category. The display name doubles as the feedback map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Keywords,
    Length,
    Formatting,
    Readability,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keywords => "Keywords",
            Category::Length => "Length",
            Category::Formatting => "Formatting",
            Category::Readability => "Readability",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: Category,
    pub value: f64,
    pub max: f64,
    pub explanation: String,
}

/// What a single sub-scorer hands back to the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub score: CategoryScore,
    pub suggestions: Vec<String>,
}

/// Why an analysis produced no rubric breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// Upstream extraction produced no text. Not retried here.
    ExtractionFailed,
    /// A fault inside scoring. Deterministic for the same input.
    AnalysisFailed,
}

/// Full analysis returned to callers.
///
/// On success `feedback` holds exactly the four category keys in evaluation
/// order. On failure it holds a single `"error"` key and `failure` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub feedback: IndexMap<String, String>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl AnalysisResult {
    pub(crate) fn failed(kind: FailureKind, message: String, suggestions: Vec<String>) -> Self {
        let mut feedback = IndexMap::new();
        feedback.insert("error".to_string(), message);
        Self {
            score: 0.0,
            feedback,
            suggestions,
            categories: Vec::new(),
            failure: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Sub-score for one category, if the analysis succeeded.
    #[cfg(test)]
    pub fn category(&self, name: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_has_single_error_key() {
        let result = AnalysisResult::failed(
            FailureKind::ExtractionFailed,
            "no text".to_string(),
            vec![],
        );
        assert_eq!(result.score, 0.0);
        assert_eq!(result.feedback.len(), 1);
        assert_eq!(result.feedback["error"], "no text");
        assert!(!result.is_success());
        assert!(result.category(Category::Keywords).is_none());
    }

    #[test]
    fn test_failure_kind_serializes_as_code() {
        let json = serde_json::to_string(&FailureKind::AnalysisFailed).unwrap();
        assert_eq!(json, r#""ANALYSIS_FAILED""#);
        let json = serde_json::to_string(&FailureKind::ExtractionFailed).unwrap();
        assert_eq!(json, r#""EXTRACTION_FAILED""#);
    }

    #[test]
    fn test_failed_result_omits_empty_breakdown_in_json() {
        let result = AnalysisResult::failed(
            FailureKind::ExtractionFailed,
            "no text".to_string(),
            vec![],
        );
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("categories").is_none());
        assert_eq!(value["failure"], "EXTRACTION_FAILED");
    }
}
