//! HTTP client for the showcase testimonial API
//!
//! Decodes the `{success, data|error}` envelope. The controller treats
//! every failure the same way, so transport errors and `success: false`
//! envelopes both collapse into `ClientError`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;

use crate::controller::{TestimonialFilter, TestimonialSource};

/// A testimonial as the carousel consumes it
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),
}

/// Envelope returned by the list endpoint
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Testimonial>>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for communicating with the showcase API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from environment variables
    ///
    /// `SHOWCASE_API_URL` sets the base URL, defaulting to the local
    /// dev server.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("SHOWCASE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch testimonials matching the filter, newest first
    pub async fn list(&self, filter: &TestimonialFilter) -> Result<Vec<Testimonial>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if filter.featured {
            query.push(("featured", "true".to_string()));
        }
        if let Some(industry) = &filter.industry {
            query.push(("industry", industry.clone()));
        }

        let envelope: ListEnvelope = self
            .client
            .get(format!("{}/testimonials", self.base_url))
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        if envelope.success {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(ClientError::Api(envelope.error.unwrap_or_else(|| {
                "Failed to fetch testimonials".to_string()
            })))
        }
    }
}

#[async_trait]
impl TestimonialSource for ApiClient {
    async fn fetch(&self, filter: &TestimonialFilter) -> Result<Vec<Testimonial>, ClientError> {
        self.list(filter).await
    }
}
