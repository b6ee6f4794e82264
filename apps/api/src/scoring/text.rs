//! Text processing seam: word segmentation plus stop-word lookup.
//!
//! The engine only depends on the `TextProcessor` trait. `EnglishTextProcessor`
//! is the default backend: regex word-boundary segmentation and the standard
//! English stop-word list.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of word characters joined by apostrophes, or a single punctuation
/// character. Hyphens split words: "problem-solving" yields three tokens.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("word pattern is valid"));

/// English clitic endings split off their stem: "python's" → "python" + "'s",
/// "can't" → "ca" + "n't". Other apostrophe words ("o'neil") stay whole.
static CLITIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\w+?)(n['’]t|['’](?:s|m|d|re|ve|ll))$").expect("clitic pattern is valid")
});

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Word segmentation and stop-word lookup used by the scoring engine.
pub trait TextProcessor: Send + Sync {
    /// Splits text into ordered word and punctuation tokens. Case is preserved.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// `token` is already lower-cased.
    fn is_stopword(&self, token: &str) -> bool;
}

pub struct EnglishTextProcessor {
    stop_words: HashSet<&'static str>,
}

impl EnglishTextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }
}

impl Default for EnglishTextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor for EnglishTextProcessor {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in WORD_PATTERN.find_iter(text).map(|m| m.as_str()) {
            match CLITIC_PATTERN.captures(word) {
                Some(caps) => {
                    tokens.push(caps[1].to_string());
                    tokens.push(caps[2].to_string());
                }
                None => tokens.push(word.to_string()),
            }
        }
        tokens
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Lower-cases, segments, keeps purely alphanumeric tokens, drops stop words.
/// Order follows the source text.
pub fn normalize(text: &str, processor: &dyn TextProcessor) -> Vec<String> {
    processor
        .tokenize(&text.to_lowercase())
        .into_iter()
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphanumeric))
        .filter(|token| !processor.is_stopword(token))
        .collect()
}
