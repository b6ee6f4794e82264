use std::sync::Arc;

use crate::config::Config;
use crate::scoring::ScoringEngine;
use crate::upload::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable rubric engine. Cloned into blocking tasks per request.
    pub engine: Arc<ScoringEngine>,
    /// Pluggable extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
