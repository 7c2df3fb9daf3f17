//! Axum route handlers for the form page and the recommendations API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::ProfileInput;
use crate::models::recommendation::Recommendation;
use crate::render::{Outcome, PageView, RecommendationView, EMPTY_RESULT_MESSAGE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Items exactly as upstream emitted them.
    pub recommendations: Vec<Recommendation>,
    /// The same items with placeholders filled in, ready to display.
    pub display: Vec<RecommendationView>,
    pub count: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationsResponse {
    fn new(recommendations: Vec<Recommendation>) -> Self {
        let empty = recommendations.is_empty();
        Self {
            display: RecommendationView::list(&recommendations),
            count: recommendations.len(),
            empty,
            message: empty.then_some(EMPTY_RESULT_MESSAGE),
            recommendations,
            generated_at: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Renders the empty profile form.
pub async fn handle_form_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = PageView::new(
        state.fetcher.is_configured(),
        &ProfileInput::default(),
        None,
        Utc::now(),
    );
    Ok(Html(state.renderer.render_page(&view)?))
}

/// POST /recommendations
///
/// Form submission. Every failure is rendered into the page with the
/// matching status code; the form keeps the submitted answers.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let input = ProfileInput::from_form_pairs(pairs);
    let result = recommend(&state, input.clone()).await;

    let (status, outcome) = match result {
        Ok(recommendations) => (StatusCode::OK, Outcome::Recommendations(recommendations)),
        Err(e) => {
            let (status, _, message) = e.parts();
            (status, Outcome::Failed(message))
        }
    };

    let view = PageView::new(state.fetcher.is_configured(), &input, Some(outcome), Utc::now());
    Ok((status, Html(state.renderer.render_page(&view)?)))
}

/// POST /api/v1/recommendations
///
/// JSON equivalent of the form flow. An empty list is a 200 with `empty: true`.
/// Malformed bodies come back as validation errors in the usual error envelope.
pub async fn handle_api_recommendations(
    State(state): State<AppState>,
    body: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(input) = body?;
    let recommendations = recommend(&state, input).await?;
    Ok(Json(RecommendationsResponse::new(recommendations)))
}

/// Profile → fetch. The profile lives only for the duration of this call.
async fn recommend(state: &AppState, input: ProfileInput) -> Result<Vec<Recommendation>, AppError> {
    let profile = input.into_profile()?;
    Ok(state.fetcher.fetch(&profile).await?)
}
