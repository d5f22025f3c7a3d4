//! # HTTP client adapter
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the three things every
//! backend call needs:
//!
//! - **Base URL**: request paths are joined onto [`ApiConfig::base_url`], so
//!   callers only pass `/api/...` paths.
//! - **Default headers**: `Content-Type: application/json` on every request.
//! - **Credentials**: cookies are sent on cross-origin requests. On WASM this
//!   is the `fetch` credentials mode `include`; on native a cookie store is
//!   attached to the client.
//!
//! Non-2xx responses become [`ApiError::Status`] with the response body
//! attached. Nothing is retried.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::ApiConfig;

use crate::error::ApiError;

/// Configured HTTP client for the backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.http.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(self.http.post(self.url(path)))
    }

    /// Send a request, turning non-2xx answers into [`ApiError::Status`].
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "backend request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Send a request and decode its JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
