use std::sync::Arc;

use crate::config::Config;
use crate::extraction::{PdfExtractExtractor, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request recomputes from its own upload.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: PdfExtractExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            extractor: Arc::new(PdfExtractExtractor),
        }
    }
}
