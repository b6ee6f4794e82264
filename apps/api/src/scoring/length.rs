//! Length band scoring on the post-stop-word token count (max 20).

use crate::scoring::report::{Category, CategoryReport, CategoryScore};
use crate::scoring::rubric::LENGTH_WEIGHT;

const IDEAL_MIN_WORDS: usize = 150;
const IDEAL_MAX_WORDS: usize = 400;
const ACCEPTABLE_MIN_WORDS: usize = 100;
const ACCEPTABLE_MAX_WORDS: usize = 500;

const ACCEPTABLE_SCORE: f64 = 15.0;
const OUT_OF_BAND_SCORE: f64 = 10.0;

const TOO_SHORT_SUGGESTION: &str =
    "Your resume is too short. Add more details about projects or skills.";
const TOO_LONG_SUGGESTION: &str = "Your resume is too long. Aim for 1 page with concise content.";

/// Step function over word count. First matching band wins.
pub fn length_points(word_count: usize) -> f64 {
    match word_count {
        n if (IDEAL_MIN_WORDS..=IDEAL_MAX_WORDS).contains(&n) => LENGTH_WEIGHT,
        n if (ACCEPTABLE_MIN_WORDS..IDEAL_MIN_WORDS).contains(&n) => ACCEPTABLE_SCORE,
        n if n > IDEAL_MAX_WORDS && n <= ACCEPTABLE_MAX_WORDS => ACCEPTABLE_SCORE,
        _ => OUT_OF_BAND_SCORE,
    }
}

pub fn score_length(word_count: usize) -> CategoryReport {
    let value = length_points(word_count);

    let mut suggestions = Vec::new();
    if word_count < IDEAL_MIN_WORDS {
        suggestions.push(TOO_SHORT_SUGGESTION.to_string());
    } else if word_count > ACCEPTABLE_MAX_WORDS {
        suggestions.push(TOO_LONG_SUGGESTION.to_string());
    }

    CategoryReport {
        score: CategoryScore {
            name: Category::Length,
            value,
            max: LENGTH_WEIGHT,
            explanation: format!("Word count: {word_count}. Score: {value}/{LENGTH_WEIGHT}"),
        },
        suggestions,
    }
}
