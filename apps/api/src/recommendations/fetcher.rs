//! Recommendation Fetcher — turns one Profile into one upstream call and back
//! into a list of Recommendations.
//!
//! Flow: serialize profile → build system/user prompts → one JSON-object
//! chat completion → parse `awards` → return items in upstream order.
//!
//! No retries, no caching, no re-ranking. Items are returned as emitted.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::llm_client::{strip_json_fences, ChatRequest, CompletionBackend, LlmError};
use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;
use crate::recommendations::prompts::{
    awards_system_prompt, awards_user_prompt, AWARDS_TEMPERATURE,
};

#[derive(Debug, Error)]
pub enum FetchError {
    /// No credential configured. Raised before any network activity.
    #[error("Recommendation service is not configured")]
    ServiceUnavailable,

    /// The call failed or the reply did not have the expected shape.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<LlmError> for FetchError {
    fn from(e: LlmError) -> Self {
        FetchError::Upstream(e.to_string())
    }
}

/// Holds the upstream backend, if one is configured.
/// Carried in `AppState`; cheap to clone.
#[derive(Clone)]
pub struct RecommendationFetcher {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl RecommendationFetcher {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Fetches recommendations for `profile` with exactly one upstream call.
    pub async fn fetch(&self, profile: &Profile) -> Result<Vec<Recommendation>, FetchError> {
        let backend = self.backend.as_ref().ok_or(FetchError::ServiceUnavailable)?;

        let request = build_request(profile)?;
        let span = info_span!("fetch_recommendations", request_id = %Uuid::new_v4());

        async move {
            let text = backend.complete(&request).await?;
            let awards = parse_awards(&text)?;
            info!("Upstream returned {} recommendations", awards.len());
            Ok::<_, FetchError>(awards)
        }
        .instrument(span)
        .await
    }
}

/// Builds the chat request for `profile`. The profile is embedded as
/// pretty-printed JSON in the user message.
pub fn build_request(profile: &Profile) -> Result<ChatRequest, FetchError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| FetchError::Upstream(format!("Failed to serialize profile: {e}")))?;

    Ok(ChatRequest::json_object(
        &awards_system_prompt(),
        awards_user_prompt(&profile_json),
        AWARDS_TEMPERATURE,
    ))
}

/// Parses the model's reply into recommendations.
///
/// Absent or null `awards` means no items. Anything other than an object at the
/// top level, or a non-array `awards`, is a shape error. An item that is not an
/// object is kept as a recommendation with every field absent.
pub fn parse_awards(text: &str) -> Result<Vec<Recommendation>, FetchError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| FetchError::Upstream(format!("Reply is not valid JSON: {e}")))?;

    let Value::Object(mut object) = value else {
        return Err(FetchError::Upstream(
            "Reply is not a JSON object".to_string(),
        ));
    };

    let items = match object.remove("awards") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(FetchError::Upstream(
                "`awards` is not an array".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Ok(Recommendation::default());
            }
            serde_json::from_value(item)
                .map_err(|e| FetchError::Upstream(format!("`awards[{i}]`: {e}")))
        })
        .collect()
}
