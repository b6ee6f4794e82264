//! Formatting heuristics on the raw text (max 20, deductive).
//!
//! Structure cues live in line breaks and literal substrings, so this
//! scorer never looks at tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::report::{Category, CategoryReport, CategoryScore};
use crate::scoring::rubric::FORMATTING_WEIGHT;

/// A standalone run of exactly four digits, e.g. a graduation year.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern is valid"));

const MIN_LINES: usize = 10;
const FEW_LINES_PENALTY: f64 = 10.0;
const NO_YEAR_PENALTY: f64 = 5.0;

const SECTIONS_SUGGESTION: &str =
    "Ensure proper formatting with clear sections (e.g., Education, Projects).";
const YEARS_SUGGESTION: &str = "Include years for education or experience.";

/// Newline-delimited line count. A text without any '\n' is one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn has_year(text: &str) -> bool {
    YEAR_PATTERN.is_match(text)
}

pub fn score_formatting(text: &str) -> CategoryReport {
    let mut value = FORMATTING_WEIGHT;
    let mut suggestions = Vec::new();

    if line_count(text) < MIN_LINES {
        value -= FEW_LINES_PENALTY;
        suggestions.push(SECTIONS_SUGGESTION.to_string());
    }
    if !has_year(text) {
        value -= NO_YEAR_PENALTY;
        suggestions.push(YEARS_SUGGESTION.to_string());
    }

    CategoryReport {
        score: CategoryScore {
            name: Category::Formatting,
            value,
            max: FORMATTING_WEIGHT,
            explanation: format!("Score: {value}/{FORMATTING_WEIGHT}"),
        },
        suggestions,
    }
}
