//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::engine::ScoringEngine;
use crate::scoring::report::AnalysisResult;
use crate::scoring::rubric::{
    KeywordMatching, KeywordSet, FORMATTING_WEIGHT, KEYWORD_WEIGHT, LENGTH_WEIGHT,
    READABILITY_WEIGHT,
};
use crate::state::AppState;
use crate::upload::filename::{is_allowed, sanitize_filename};

/// Multipart field carrying the document.
const UPLOAD_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Already-extracted text. `null` or missing means extraction failed upstream.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct CategoryWeights {
    pub keywords: f64,
    pub length: f64,
    pub formatting: f64,
    pub readability: f64,
}

#[derive(Debug, Serialize)]
pub struct RubricResponse {
    pub keywords: KeywordSet,
    pub matching: KeywordMatching,
    pub weights: CategoryWeights,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload of a PDF resume in the `resume` field. The file lives in a
/// temporary location only for the duration of extraction.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let limit = state.config.max_upload_bytes;
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::from_multipart(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let raw_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::from_multipart(e, limit))?;
        upload = Some((raw_name, data));
        break;
    }

    let (raw_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if raw_name.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    let filename = sanitize_filename(&raw_name);
    if !is_allowed(&filename) {
        return Err(AppError::Validation(
            "Invalid file format. Please upload a PDF.".to_string(),
        ));
    }

    let analysis_id = Uuid::new_v4();
    async move {
        info!(filename = %filename, bytes = data.len(), "Resume upload received");

        let text = match state.extractor.extract(data).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Text extraction failed: {e}");
                None
            }
        };

        let result = score_blocking(state.engine.clone(), text).await?;
        if result.is_success() {
            info!(score = result.score, "Resume analyzed");
        } else {
            warn!(failure = ?result.failure, "No score produced");
        }

        Ok::<_, AppError>(Json(AnalysisResponse {
            analysis_id,
            analyzed_at: Utc::now(),
            filename: Some(filename),
            result,
        }))
    }
    .instrument(info_span!("analyze", %analysis_id))
    .await
}

/// POST /api/v1/analyze/text
///
/// Scores text that was extracted elsewhere.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let analysis_id = Uuid::new_v4();
    async move {
        let result = score_blocking(state.engine.clone(), request.text).await?;
        if result.is_success() {
            info!(score = result.score, "Text analyzed");
        } else {
            warn!(failure = ?result.failure, "No score produced");
        }

        Ok::<_, AppError>(Json(AnalysisResponse {
            analysis_id,
            analyzed_at: Utc::now(),
            filename: None,
            result,
        }))
    }
    .instrument(info_span!("analyze_text", %analysis_id))
    .await
}

/// GET /api/v1/rubric
///
/// The active rubric: vocabulary, matching mode, and category maxima.
pub async fn handle_get_rubric(State(state): State<AppState>) -> Json<RubricResponse> {
    let rubric = state.engine.rubric();
    Json(RubricResponse {
        keywords: rubric.keywords.clone(),
        matching: rubric.matching,
        weights: CategoryWeights {
            keywords: KEYWORD_WEIGHT,
            length: LENGTH_WEIGHT,
            formatting: FORMATTING_WEIGHT,
            readability: READABILITY_WEIGHT,
        },
    })
}

/// Scoring is CPU-bound; keep it off the async workers.
async fn score_blocking(
    engine: Arc<ScoringEngine>,
    text: Option<String>,
) -> Result<AnalysisResult, AppError> {
    tokio::task::spawn_blocking(move || engine.analyze(text.as_deref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
