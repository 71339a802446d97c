//! HTTP client for the Graphy LMS API.
//!
//! All learner identity, enrollment and progress data is owned by Graphy;
//! this crate is the only place that talks to it. The client is read-only
//! and deliberately forgiving: a missing configuration is reported as
//! [`GraphyError::NotConfigured`] so the caller can fall back to demo
//! identities or empty history instead of failing the request.

pub mod error;
pub mod models;

pub use error::{GraphyError, Result};
pub use models::{Enrollment, Learner, ProgressReport};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.ongraphy.com/public/v1";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Upstream bodies are truncated to this length in error diagnostics.
const SNIPPET_LIMIT: usize = 256;

#[derive(Debug, Clone)]
pub struct GraphyConfig {
    pub base_url: String,
    pub merchant_id: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl GraphyConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GRAPHY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            merchant_id: std::env::var("GRAPHY_MERCHANT_ID")
                .ok()
                .filter(|v| !v.is_empty()),
            api_key: std::env::var("GRAPHY_API_KEY").ok().filter(|v| !v.is_empty()),
            timeout_seconds: std::env::var("GRAPHY_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Config with no credentials; every call fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            merchant_id: None,
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Envelope every Graphy endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

pub struct GraphyClient {
    http: reqwest::Client,
    config: GraphyConfig,
}

impl GraphyClient {
    pub fn new(config: GraphyConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.merchant_id.is_some() && self.config.api_key.is_some()
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (&self.config.merchant_id, &self.config.api_key) {
            (Some(mid), Some(key)) => Ok((mid, key)),
            _ => Err(GraphyError::NotConfigured),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let (mid, key) = self.credentials()?;
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        let response = self
            .http
            .get(&url)
            .query(&[("mid", mid), ("key", key)])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(SNIPPET_LIMIT).collect();
            return Err(GraphyError::Upstream {
                status: status.as_u16(),
                content_type,
                snippet,
            });
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| GraphyError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Look up a learner by email. `Ok(None)` when the API has no record.
    pub async fn learner_by_email(&self, email: &str) -> Result<Option<Learner>> {
        debug!(email, "Fetching learner from Graphy");
        let learners: Vec<Learner> = self.get_json("learners", &[("email", email)]).await?;
        Ok(learners.into_iter().next())
    }

    pub async fn enrollments(&self, learner_id: &str) -> Result<Vec<Enrollment>> {
        debug!(learner_id, "Fetching enrollments from Graphy");
        self.get_json("enrollments", &[("learnerId", learner_id)])
            .await
    }

    /// Per-(learner, product) progress metrics. `Ok(None)` when the LMS has
    /// not recorded any progress for the pair yet.
    pub async fn progress_report(
        &self,
        learner_id: &str,
        product_id: &str,
    ) -> Result<Option<ProgressReport>> {
        debug!(learner_id, product_id, "Fetching progress report from Graphy");
        self.get_json(
            "progress",
            &[("learnerId", learner_id), ("productId", product_id)],
        )
        .await
    }
}
