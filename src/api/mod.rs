//! HTTP client for the news search backend
//!
//! One endpoint: `POST /api/search` with body `{"keyword": "..."}`.
//! Failures carry the message the UI should show - the server's `error`
//! field when it sent one, a generic fallback otherwise.

pub mod models;

use self::models::SearchResponse;
use std::fmt;

/// Fallback message when a failed response carries no `error` field
const GENERIC_SEARCH_ERROR: &str = "Search failed. Please try again.";

/// Errors from a single search request
#[derive(Debug)]
pub enum SearchError {
    /// The request never produced a response (DNS, refused, reset, ...)
    Transport(reqwest::Error),
    /// Non-2xx status; `message` is the server's error text or a fallback
    Server { status: u16, message: String },
    /// 2xx status but the body did not parse as a search result
    Malformed(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(e) => write!(f, "request failed: {}", e),
            SearchError::Server { message, .. } => write!(f, "{}", message),
            SearchError::Malformed(detail) => {
                write!(f, "invalid response from server: {}", detail)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Client for the search backend
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_url: String,
}

impl SearchClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Run one search. No retries, no client-side timeout.
    pub async fn search(&self, keyword: &str) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/api/search", self.api_url.trim_end_matches('/'));
        tracing::debug!(%url, keyword, "sending search request");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "keyword": keyword }))
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(SearchError::Transport)?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "search request rejected");
            return Err(SearchError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| SearchError::Malformed(e.to_string()))
    }
}

/// Pull the `error` field out of a failure body, if there is one
fn extract_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_SEARCH_ERROR.to_string())
}
