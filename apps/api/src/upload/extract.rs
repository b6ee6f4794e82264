//! Text extraction: pluggable, trait-based PDF → text step ahead of scoring.
//!
//! Default: `PdfTextExtractor` (pdf-extract over a temporary file).
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap in a stub.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("temporary file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("extraction task failed: {0}")]
    Join(String),
}

/// Turns an uploaded document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractError>;
}

/// Writes the upload to a temporary `.pdf` file, extracts all pages, and
/// removes the file when done, whether extraction succeeded or not.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor {
    /// Where temporary uploads are written. `None` uses the system temp dir.
    upload_dir: Option<PathBuf>,
}

impl PdfTextExtractor {
    pub fn new(upload_dir: Option<PathBuf>) -> Self {
        Self { upload_dir }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractError> {
        let upload_dir = self.upload_dir.clone();
        // File I/O and PDF parsing are blocking.
        tokio::task::spawn_blocking(move || extract_sync(&document, upload_dir))
            .await
            .map_err(|e| ExtractError::Join(e.to_string()))?
    }
}

fn extract_sync(document: &[u8], upload_dir: Option<PathBuf>) -> Result<String, ExtractError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("upload-").suffix(".pdf");
    let mut file = match &upload_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(document)?;
    file.flush()?;

    debug!(path = %file.path().display(), bytes = document.len(), "Extracting PDF text");
    let text =
        pdf_extract::extract_text(file.path()).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    // `file` is deleted on drop.
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_fail_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = PdfTextExtractor::new(Some(dir.path().to_path_buf()));

        let result = extractor
            .extract(Bytes::from_static(b"definitely not a pdf"))
            .await;
        // lopdf rejects the header; some pdf-extract versions panic instead, which
        // surfaces as a join error. Either way no text comes back.
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_temporary_upload_removed_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = PdfTextExtractor::new(Some(dir.path().to_path_buf()));

        let _ = extractor.extract(Bytes::from_static(b"%PDF-broken")).await;
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_missing_upload_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let extractor = PdfTextExtractor::new(Some(missing));

        let result = extractor.extract(Bytes::from_static(b"%PDF-1.4")).await;
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }
}
