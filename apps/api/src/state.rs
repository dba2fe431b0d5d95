use std::sync::Arc;

use crate::extraction::fetcher::PageFetcher;
use crate::extraction::rules::ExtractionRegistry;
use crate::llm_client::CompletionService;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub llm: Arc<dyn CompletionService>,
    /// Fetches job postings. Production: `HttpPageFetcher`.
    pub pages: Arc<dyn PageFetcher>,
    pub extraction: Arc<ExtractionRegistry>,
}
