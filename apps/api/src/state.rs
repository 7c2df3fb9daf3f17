use crate::recommendations::fetcher::RecommendationFetcher;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data: every request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Unconfigured (no backend) when OPENAI_API_KEY is missing.
    pub fetcher: RecommendationFetcher,
    pub renderer: PageRenderer,
}
