//! # JSON HTTP Client
//!
//! Thin wrapper around `reqwest::Client` bound to one base URL. Both API
//! clients build on it: it sends JSON headers, maps non-2xx statuses to
//! `ApiError::Http` and decodes bodies with serde.

use crate::app::services::error::ApiError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Transport settings shared by both API clients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Overall request timeout; `None` keeps reqwest's default
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// HTTP client issuing JSON GET requests below a fixed base URL
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: reqwest::Client,
    base_url: Url,
}

impl JsonClient {
    /// Create a client for `base_url` with the given transport options
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(ApiError::ClientSetup)?;

        tracing::debug!("JSON client created for {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Build the URL of an endpoint below the base URL
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a segment
    /// stays part of it. Dot segments (`.` and `..`) are dropped by URL
    /// normalization, so callers must reject them before getting here.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} answered {}", url, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ApiError::Network)?;
        tracing::debug!("GET {} answered {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to decode body from {}: {}", url, e);
            ApiError::Decode(e)
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    Ok(url)
}
