//! Keyword coverage: rewards presence of rubric vocabulary (max 40).

use crate::scoring::report::{Category, CategoryReport, CategoryScore};
use crate::scoring::rubric::{KeywordMatching, KeywordSet, KEYWORD_WEIGHT};
use crate::scoring::text::{normalize, TextProcessor};

/// Fewer distinct matches than this triggers the keyword suggestion.
const MIN_MATCHED_KEYWORDS: usize = 5;

const ADD_KEYWORDS_SUGGESTION: &str =
    "Add more job-specific keywords like 'Python', 'SQL', or 'teamwork' to match job descriptions.";

/// A rubric term prepared for lookup in a normalized token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordPattern {
    pub term: String,
    /// Contiguous token run that must appear. Empty means the term can never match.
    pub tokens: Vec<String>,
}

impl KeywordPattern {
    fn matches(&self, document: &[String]) -> bool {
        match self.tokens.as_slice() {
            [] => false,
            [single] => document.iter().any(|t| t == single),
            run => document.windows(run.len()).any(|w| w == run),
        }
    }
}

/// Prepares every rubric term once, at engine construction.
pub fn compile_patterns(
    keywords: &KeywordSet,
    matching: KeywordMatching,
    processor: &dyn TextProcessor,
) -> Vec<KeywordPattern> {
    keywords
        .iter()
        .map(|term| {
            let tokens = match matching {
                KeywordMatching::Phrase => normalize(term, processor),
                KeywordMatching::Token => vec![term.to_string()],
            };
            KeywordPattern {
                term: term.to_string(),
                tokens,
            }
        })
        .collect()
}

/// Terms from `patterns` present in `tokens`, in rubric order.
pub fn matched_terms<'a>(tokens: &[String], patterns: &'a [KeywordPattern]) -> Vec<&'a str> {
    patterns
        .iter()
        .filter(|p| p.matches(tokens))
        .map(|p| p.term.as_str())
        .collect()
}

pub fn score_keywords(tokens: &[String], patterns: &[KeywordPattern]) -> CategoryReport {
    let matched_count = matched_terms(tokens, patterns).len();
    let value = if patterns.is_empty() {
        0.0
    } else {
        (matched_count as f64 / patterns.len() as f64 * KEYWORD_WEIGHT).min(KEYWORD_WEIGHT)
    };

    let mut suggestions = Vec::new();
    if matched_count < MIN_MATCHED_KEYWORDS {
        suggestions.push(ADD_KEYWORDS_SUGGESTION.to_string());
    }

    CategoryReport {
        score: CategoryScore {
            name: Category::Keywords,
            value,
            max: KEYWORD_WEIGHT,
            explanation: format!(
                "Found {matched_count} relevant keywords. Score: {value:.1}/{KEYWORD_WEIGHT}"
            ),
        },
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::text::EnglishTextProcessor;

    fn tokens(text: &str) -> Vec<String> {
        normalize(text, &EnglishTextProcessor::new())
    }

    fn patterns(terms: &[&str], matching: KeywordMatching) -> Vec<KeywordPattern> {
        let set = KeywordSet::new(terms.iter().copied()).unwrap();
        compile_patterns(&set, matching, &EnglishTextProcessor::new())
    }

    #[test]
    fn test_no_matches_scores_zero_and_suggests() {
        let p = patterns(&["rust", "sql"], KeywordMatching::Phrase);
        let report = score_keywords(&tokens("gardening and cooking"), &p);
        assert_eq!(report.score.value, 0.0);
        assert_eq!(report.suggestions, vec![ADD_KEYWORDS_SUGGESTION.to_string()]);
        assert_eq!(report.score.explanation, "Found 0 relevant keywords. Score: 0.0/40");
    }

    #[test]
    fn test_all_terms_present_caps_at_forty() {
        let p = patterns(&["rust", "sql"], KeywordMatching::Phrase);
        let report = score_keywords(&tokens("Rust services backed by SQL"), &p);
        assert_eq!(report.score.value, 40.0);
        assert_eq!(report.score.max, 40.0);
    }

    #[test]
    fn test_score_scales_linearly() {
        let p = patterns(&["rust", "sql", "go", "zig"], KeywordMatching::Phrase);
        let report = score_keywords(&tokens("rust and go"), &p);
        assert!((report.score.value - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_term_counts_once() {
        let p = patterns(&["rust", "sql"], KeywordMatching::Phrase);
        let report = score_keywords(&tokens("rust rust rust rust"), &p);
        assert!((report.score.value - 20.0).abs() < 1e-9);
        assert!(report.score.explanation.starts_with("Found 1 relevant"));
    }

    #[test]
    fn test_five_matches_suppresses_suggestion() {
        let p = patterns(&["a1", "b2", "c3", "d4", "e5", "f6"], KeywordMatching::Phrase);
        let report = score_keywords(&tokens("a1 b2 c3 d4 e5"), &p);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_phrase_mode_matches_multi_word_terms() {
        let p = patterns(&["machine learning", "problem-solving"], KeywordMatching::Phrase);
        let doc = tokens("Applied machine learning; strong problem solving.");
        assert_eq!(matched_terms(&doc, &p), vec!["machine learning", "problem-solving"]);
    }

    #[test]
    fn test_phrase_mode_requires_adjacent_tokens() {
        let p = patterns(&["machine learning"], KeywordMatching::Phrase);
        let doc = tokens("machine shop, learning fast");
        assert!(matched_terms(&doc, &p).is_empty());
    }

    #[test]
    fn test_phrase_mode_ignores_stop_words_inside_phrase() {
        let p = patterns(&["quality of service"], KeywordMatching::Phrase);
        let doc = tokens("Owned quality of service for the API");
        assert_eq!(matched_terms(&doc, &p), vec!["quality of service"]);
    }

    #[test]
    fn test_token_mode_never_matches_multi_word_terms() {
        let p = patterns(&["machine learning", "python"], KeywordMatching::Token);
        let doc = tokens("machine learning with python");
        assert_eq!(matched_terms(&doc, &p), vec!["python"]);
    }

    #[test]
    fn test_term_of_only_stop_words_never_matches() {
        let p = patterns(&["the"], KeywordMatching::Phrase);
        assert!(p[0].tokens.is_empty());
        assert!(matched_terms(&tokens("the the the"), &p).is_empty());
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let p = patterns(&["rust"], KeywordMatching::Phrase);
        let report = score_keywords(&[], &p);
        assert_eq!(report.score.value, 0.0);
    }
}
