//! Document ingestion — decides what an upload is and pulls plain text out of it.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::extraction::pdf::{degrade, extract_pdf_text, panic_message};

const PDF_MIME: &str = "application/pdf";
const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Pdf(String),

    #[error("Uploaded text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Unsupported document type: {0} (expected .txt or .pdf)")]
    UnsupportedFormat(String),
}

/// The two accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Content type wins when it is specific; otherwise the file extension decides.
    /// Browsers commonly send `application/octet-stream`, so that alone is not enough.
    pub fn detect(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some(PDF_MIME) => return Ok(DocumentKind::Pdf),
            Some(TEXT_MIME) => return Ok(DocumentKind::PlainText),
            _ => {}
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::PlainText),
            _ => Err(ExtractionError::UnsupportedFormat(
                file_name
                    .or(content_type)
                    .unwrap_or("unnamed upload")
                    .to_string(),
            )),
        }
    }
}

/// Pulls text out of uploaded bytes.
///
/// PDF failures are returned as `Ok("Error reading PDF: ...")`; only problems the
/// caller must report (bad UTF-8) come back as `Err`.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor: `pdf-extract` for PDFs, UTF-8 decode for text.
pub struct PdfExtractExtractor;

#[async_trait]
impl TextExtractor for PdfExtractExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::PlainText => decode_text(bytes),
            DocumentKind::Pdf => Ok(extract_pdf_degraded(bytes).await),
        }
    }
}

/// Decodes uploaded `.txt` bytes verbatim.
pub fn decode_text(bytes: Bytes) -> Result<String, ExtractionError> {
    let text = String::from_utf8(bytes.to_vec())?;
    debug!(chars = text.len(), "Decoded plain-text upload");
    Ok(text)
}

/// Runs PDF extraction on the blocking pool; parser errors and panics become error text.
async fn extract_pdf_degraded(bytes: Bytes) -> String {
    let size = bytes.len();
    let outcome = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes)).await;

    match outcome {
        Ok(Ok(text)) => {
            info!(bytes = size, chars = text.len(), "Extracted PDF text");
            text
        }
        Ok(Err(e)) => degrade(&e),
        Err(join_err) => {
            let message = if join_err.is_panic() {
                panic_message(join_err.into_panic())
            } else {
                join_err.to_string()
            };
            degrade(&ExtractionError::Pdf(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::pdf::PDF_ERROR_PREFIX;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), Some("rfp.bin")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain; charset=utf-8"), None).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("RFP.PDF")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(None, Some("notes.v2.txt")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_rejects_other_formats() {
        let err = DocumentKind::detect(Some("application/msword"), Some("rfp.docx")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref name) if name == "rfp.docx"));
        assert!(DocumentKind::detect(None, None).is_err());
        assert!(DocumentKind::detect(None, Some("README")).is_err());
    }

    #[test]
    fn test_decode_text_is_verbatim() {
        let raw = "  Secure user API\r\nwith report\t\n";
        let text = decode_text(Bytes::from(raw)).unwrap();
        assert_eq!(text, raw);
    }

    #[test]
    fn test_decode_text_rejects_invalid_utf8() {
        let err = decode_text(Bytes::from_static(&[0x66, 0x6f, 0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidUtf8(_)));
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let text = PdfExtractExtractor
            .extract(DocumentKind::PlainText, Bytes::from("real-time order feed"))
            .await
            .unwrap();
        assert_eq!(text, "real-time order feed");
    }

    #[tokio::test]
    async fn test_valid_pdf_extraction() {
        let bytes = Bytes::from_static(include_bytes!("../../fixtures/three_pages_blank_middle.pdf"));
        let text = PdfExtractExtractor
            .extract(DocumentKind::Pdf, bytes)
            .await
            .unwrap();
        assert_eq!(text, "secure real-time user report module");
    }

    #[tokio::test]
    async fn test_corrupt_pdf_degrades_to_error_text() {
        let text = PdfExtractExtractor
            .extract(DocumentKind::Pdf, Bytes::from_static(b"this is not a pdf"))
            .await
            .unwrap();
        assert!(text.starts_with(PDF_ERROR_PREFIX), "got {text:?}");
    }

    #[tokio::test]
    async fn test_empty_pdf_degrades_to_error_text() {
        let text = PdfExtractExtractor
            .extract(DocumentKind::Pdf, Bytes::new())
            .await
            .unwrap();
        assert!(text.starts_with(PDF_ERROR_PREFIX));
    }
}
