//! Rubric configuration: the keyword vocabulary and category weights.
//!
//! A `Rubric` is built once at startup and handed to `ScoringEngine::new`.
//! Nothing in the scoring path reads process-wide settings.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum points per category. The four maxima sum to 100.
pub const KEYWORD_WEIGHT: f64 = 40.0;
pub const LENGTH_WEIGHT: f64 = 20.0;
pub const FORMATTING_WEIGHT: f64 = 20.0;
pub const READABILITY_WEIGHT: f64 = 20.0;

/// Common job-related vocabulary for entry-level technical resumes.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "machine learning",
    "data analysis",
    "web development",
    "cloud computing",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "communication",
    "teamwork",
    "problem-solving",
    "leadership",
    "project",
    "internship",
    "research",
    "development",
    "software",
    "engineering",
];

#[derive(Debug, Error, PartialEq)]
pub enum RubricError {
    #[error("keyword set must contain at least one term")]
    EmptyKeywordSet,

    #[error("keyword '{0}' is blank")]
    BlankKeyword(String),

    #[error("keyword '{0}' must be lower-case")]
    NotLowercase(String),

    #[error("keyword '{0}' appears more than once")]
    DuplicateKeyword(String),

    #[error("unknown keyword matching mode '{0}' (expected 'phrase' or 'token')")]
    UnknownMatching(String),
}

/// Ordered, validated rubric vocabulary.
///
/// Invariants: non-empty, every entry lower-case and non-blank, no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(terms: I) -> Result<Self, RubricError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for term in terms {
            let term: String = term.into();
            if term.trim().is_empty() {
                return Err(RubricError::BlankKeyword(term));
            }
            if term.to_lowercase() != term {
                return Err(RubricError::NotLowercase(term));
            }
            if !seen.insert(term.clone()) {
                return Err(RubricError::DuplicateKeyword(term));
            }
            keywords.push(term);
        }

        if keywords.is_empty() {
            return Err(RubricError::EmptyKeywordSet);
        }
        Ok(Self(keywords))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

/// How rubric terms are looked up in a document's tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    /// Terms are normalized like document text and matched as contiguous
    /// token runs, so "machine learning" and "problem-solving" can match.
    #[default]
    Phrase,
    /// A term matches only when it equals a single document token.
    /// Multi-word terms never match in this mode.
    Token,
}

impl fmt::Display for KeywordMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordMatching::Phrase => f.write_str("phrase"),
            KeywordMatching::Token => f.write_str("token"),
        }
    }
}

impl FromStr for KeywordMatching {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phrase" => Ok(KeywordMatching::Phrase),
            "token" => Ok(KeywordMatching::Token),
            other => Err(RubricError::UnknownMatching(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rubric {
    pub keywords: KeywordSet,
    pub matching: KeywordMatching,
}

impl Rubric {
    pub fn new(keywords: KeywordSet, matching: KeywordMatching) -> Self {
        Self { keywords, matching }
    }
}
