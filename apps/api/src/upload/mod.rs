// Upload intake ahead of scoring: filename checks and PDF text extraction.
// Uploads only ever live in temporary files; nothing is persisted.

pub mod extract;
pub mod filename;

pub use extract::{PdfTextExtractor, TextExtractor};
