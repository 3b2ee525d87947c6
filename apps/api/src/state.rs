use std::sync::Arc;

use crate::auth::store::CredentialStore;
use crate::config::Config;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable credential store. Constructed once at startup against
    /// MongoDB; tests substitute an in-memory stub.
    pub store: Arc<dyn CredentialStore>,
    /// `None` when no API key is configured; /generate-roadmap then answers
    /// with a configuration error instead of the process refusing to start.
    pub llm: Option<GeminiClient>,
    pub config: Config,
}
