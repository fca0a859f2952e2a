//! PDF text extraction via `pdf-extract`.
//!
//! Failures never escape as errors to the caller of `PdfExtractExtractor`: they
//! are folded into an `Error reading PDF: ...` string that the advisor then scans
//! like any other text.

use tracing::warn;

use crate::extraction::ExtractionError;

pub const PDF_ERROR_PREFIX: &str = "Error reading PDF: ";

/// Extracts text page by page. Blank pages are skipped, the rest joined with one space.
///
/// Blocking and potentially slow on large documents; call from `spawn_blocking`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(join_pages(&pages))
}

/// Each page is trimmed before joining, so leading and trailing whitespace that
/// `pdf-extract` emits around a page does not reach the extracted text. Pages that
/// are empty or whitespace-only after trimming are dropped.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Degrade-to-string policy for PDF failures.
pub fn degrade(err: &ExtractionError) -> String {
    let message = match err {
        ExtractionError::Pdf(msg) => msg.clone(),
        other => other.to_string(),
    };
    warn!("PDF extraction failed, continuing with error text: {message}");
    format!("{PDF_ERROR_PREFIX}{message}")
}

/// Recovers a readable message from a panic payload raised inside the PDF parser.
pub fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}
