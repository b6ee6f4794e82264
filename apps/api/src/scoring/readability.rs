//! Readability proxy (max 20, deductive).
//!
//! Counts very long tokens and literal periods. This is a deliberately coarse
//! stand-in for a linguistic metric; keep it that way.

use crate::scoring::report::{Category, CategoryReport, CategoryScore};
use crate::scoring::rubric::READABILITY_WEIGHT;

/// Tokens with more characters than this count as complex words.
const LONG_WORD_CHARS: usize = 15;
const MAX_LONG_WORDS: usize = 5;
const MIN_PERIODS: usize = 5;
const PENALTY: f64 = 5.0;

const COMPLEX_WORDS_SUGGESTION: &str = "Avoid overly complex words to improve readability.";
const SENTENCES_SUGGESTION: &str = "Use more sentences or bullet points for clarity.";

pub fn long_word_count(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| t.chars().count() > LONG_WORD_CHARS)
        .count()
}

pub fn period_count(text: &str) -> usize {
    text.matches('.').count()
}

pub fn score_readability(tokens: &[String], text: &str) -> CategoryReport {
    let mut value = READABILITY_WEIGHT;
    let mut suggestions = Vec::new();

    if long_word_count(tokens) > MAX_LONG_WORDS {
        value -= PENALTY;
        suggestions.push(COMPLEX_WORDS_SUGGESTION.to_string());
    }
    if period_count(text) < MIN_PERIODS {
        value -= PENALTY;
        suggestions.push(SENTENCES_SUGGESTION.to_string());
    }

    CategoryReport {
        score: CategoryScore {
            name: Category::Readability,
            value,
            max: READABILITY_WEIGHT,
            explanation: format!("Score: {value}/{READABILITY_WEIGHT}"),
        },
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_plain_prose_keeps_full_score() {
        let report = score_readability(&words(&["built", "tools"]), "A. B. C. D. E.");
        assert_eq!(report.score.value, 20.0);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_both_deductions_are_additive() {
        let long = "internationalization";
        let tokens = words(&[long, long, long, long, long, long]);
        let report = score_readability(&tokens, "no periods here");
        assert_eq!(report.score.value, 10.0);
        assert_eq!(
            report.suggestions,
            vec![
                COMPLEX_WORDS_SUGGESTION.to_string(),
                SENTENCES_SUGGESTION.to_string()
            ]
        );
    }

    #[test]
    fn test_five_long_words_is_tolerated() {
        let long = "characterization";
        assert_eq!(long.len(), 16);
        let tokens = words(&[long, long, long, long, long]);
        let report = score_readability(&tokens, ".....");
        assert_eq!(report.score.value, 20.0);
    }

    #[test]
    fn test_fifteen_characters_is_not_long() {
        let tokens = words(&["abcdefghijklmno"; 10]);
        assert_eq!(long_word_count(&tokens), 0);
    }

    #[test]
    fn test_long_word_length_counts_characters_not_bytes() {
        // 15 characters, 30 bytes.
        let tokens = words(&["ééééééééééééééé"; 6]);
        assert_eq!(long_word_count(&tokens), 0);
    }

    #[test]
    fn test_period_count_includes_decimals_and_abbreviations() {
        assert_eq!(period_count("GPA 3.9, e.g. this."), 4);
    }

    #[test]
    fn test_few_periods_only() {
        let report = score_readability(&[], "One. Two.");
        assert_eq!(report.score.value, 15.0);
        assert_eq!(report.suggestions, vec![SENTENCES_SUGGESTION.to_string()]);
    }
}
