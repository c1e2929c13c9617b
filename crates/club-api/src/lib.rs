//! # club-api
//!
//! HTTP client for the club backend.
//!
//! Wraps the backend's REST endpoints and implements the record-store traits
//! of `club-engine` on top of them:
//! - trainings and team rosters ([`club_engine::store::RosterSource`])
//! - attendance records ([`club_engine::store::AttendanceStore`])
//! - training programs ([`club_engine::store::CompositionStore`])
//! - the exercise catalog ([`club_engine::store::CatalogSource`])

pub mod attendance;
pub mod exercises;
pub mod program;
pub mod trainings;

mod error;
mod http;
mod wire;

pub use error::ApiError;

use std::time::Duration;

use club_config::ApiConfig;
use reqwest::Method;

/// HTTP client for the club backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is empty, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        if !config.is_configured() {
            return Err(ApiError::Config("api.base_url is not set".into()));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("clubhouse/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            token: config.bearer_token().map(str::to_string),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/trainings/1`.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request, attaching the bearer token when one is configured.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "backend request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Percent-encode one path segment.
fn segment(raw: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(raw)
}
