use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::rubric::{KeywordMatching, KeywordSet, Rubric};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Directory for temporary uploads. `None` uses the system temp dir.
    pub upload_dir: Option<PathBuf>,
    pub rubric: Rubric,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let keywords = match lookup("RUBRIC_KEYWORDS") {
            Some(v) => parse_keywords(&v)?,
            None => KeywordSet::default(),
        };

        let matching = match lookup("KEYWORD_MATCHING") {
            Some(v) => v
                .parse::<KeywordMatching>()
                .context("KEYWORD_MATCHING is invalid")?,
            None => KeywordMatching::default(),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes,
            upload_dir: lookup("UPLOAD_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            rubric: Rubric::new(keywords, matching),
        })
    }
}

/// Comma-separated terms, trimmed and lower-cased. Blank items are skipped.
fn parse_keywords(raw: &str) -> Result<KeywordSet> {
    let terms: Vec<String> = raw
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    KeywordSet::new(terms).context("RUBRIC_KEYWORDS is invalid")
}
