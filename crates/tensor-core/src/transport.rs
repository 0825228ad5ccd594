//! The HTTP transport seam.
//!
//! [`Transport`] is the single network-facing operation the request pipeline
//! depends on. [`HttpTransport`] implements it with `reqwest`; tests swap in
//! a mock or point the real transport at a local server.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{TransportConfig, API_KEY_HEADER};
use crate::context::RequestContext;
use crate::error::{ApplicationFailure, Error, NetworkCause, NetworkFailure, Result};
use crate::query::QueryParams;

/// Static client identifier sent as `User-Agent`.
pub const USER_AGENT: &str = concat!("tensor-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// A successful (status below 400) response, body untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// The body as UTF-8 text, with invalid sequences replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one HTTP `GET` exchange and classifies its outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `GET {base}{path}?{params}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if no status line was received (or the body
    /// could not be read), and [`Error::Application`] for a status of 400 or
    /// above.
    async fn get(&self, path: &str, params: &QueryParams, ctx: &RequestContext)
        -> Result<ApiResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    config: Arc<TransportConfig>,
}

impl HttpTransport {
    /// Build a transport that owns `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The configuration this transport was built with.
    #[must_use]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn build_url(&self, path: &str, params: &QueryParams) -> std::result::Result<Url, NetworkFailure> {
        let raw = format!("{}{path}", self.config.base_url());
        let mut url = Url::parse(&raw).map_err(|err| {
            NetworkFailure::new(
                "create_request",
                NetworkCause::InvalidRequest(format!("invalid URL `{raw}`: {err}")),
            )
        })?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.to_pairs());
        }
        Ok(url)
    }

    async fn exchange(&self, url: Url) -> std::result::Result<(u16, Vec<u8>), NetworkFailure> {
        let mut request = self
            .http
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| NetworkFailure::new("http_request", NetworkCause::from(err)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| NetworkFailure::new("read_body", NetworkCause::from(err)))?;

        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        params: &QueryParams,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path, params)?;
        info!(path, params = params.len(), "Tensor request");

        let (status, body) = ctx
            .guard(self.exchange(url))
            .await
            .map_err(|cause| NetworkFailure::new("http_request", cause))??;

        if status >= 400 {
            let failure = ApplicationFailure::from_response(status, &body);
            warn!(path, status, error = %failure.message, "Tensor API error");
            return Err(failure.into());
        }

        debug!(path, status, bytes = body.len(), "Tensor response");
        Ok(ApiResponse { status, body })
    }
}
