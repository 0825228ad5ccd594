//! The request pipeline shared by every resource method.
//!
//! A call runs `validate → encode → transport.get` and stops at the first
//! failure. The pipeline keeps no per-call state, so one instance can serve
//! any number of concurrent callers.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::TensorClientConfig;
use crate::context::RequestContext;
use crate::error::{Error, Result};
use crate::query;
use crate::transport::{ApiResponse, HttpTransport, Transport};
use crate::validate::Validate;

/// Where a call is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// Call accepted, nothing checked yet
    Created,
    /// Request passed validation
    Validated,
    /// Request turned into query parameters
    Encoded,
    /// Handed to the transport
    Dispatched,
    /// Response with status below 400
    Succeeded,
    /// Exchange did not complete
    NetworkFailed,
    /// Service answered with status 400 or above
    ApplicationFailed,
    /// Request rejected locally by its validation rules
    ValidationFailed,
    /// Request could not be encoded
    EncodingFailed,
}

impl CallState {
    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Succeeded
                | Self::NetworkFailed
                | Self::ApplicationFailed
                | Self::ValidationFailed
                | Self::EncodingFailed
        )
    }

    /// Terminal state reached by a call that ended in `error`.
    #[must_use]
    pub const fn for_error(error: &Error) -> Self {
        match error {
            Error::Validation(_) => Self::ValidationFailed,
            Error::Encoding(_) => Self::EncodingFailed,
            Error::Application(_) => Self::ApplicationFailed,
            Error::Network(_) | Error::ConfigError(_) | Error::Decode(_) => Self::NetworkFailed,
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Validated => "validated",
            Self::Encoded => "encoded",
            Self::Dispatched => "dispatched",
            Self::Succeeded => "succeeded",
            Self::NetworkFailed => "network_failed",
            Self::ApplicationFailed => "application_failed",
            Self::ValidationFailed => "validation_failed",
            Self::EncodingFailed => "encoding_failed",
        };
        f.write_str(name)
    }
}

/// Validates, encodes and dispatches requests through a [`Transport`].
#[derive(Clone)]
pub struct RequestPipeline {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestPipeline").finish_non_exhaustive()
    }
}

impl RequestPipeline {
    /// Create a pipeline over `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a pipeline over an [`HttpTransport`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.into_transport_config()?)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Run `request` against `path`.
    ///
    /// The transport is never invoked when validation or encoding fails.
    ///
    /// # Errors
    ///
    /// Returns the first failure: [`Error::Validation`], [`Error::Encoding`],
    /// [`Error::Network`] or [`Error::Application`].
    pub async fn execute<R>(&self, path: &str, request: &R, ctx: &RequestContext) -> Result<ApiResponse>
    where
        R: Validate + Serialize + Sync,
    {
        trace_state(path, CallState::Created);

        if let Err(err) = request.validate() {
            return Err(fail(path, err.into()));
        }
        trace_state(path, CallState::Validated);

        let params = match query::encode(request) {
            Ok(params) => params,
            Err(err) => return Err(fail(path, err.into())),
        };
        trace_state(path, CallState::Encoded);

        trace_state(path, CallState::Dispatched);
        match self.transport.get(path, &params, ctx).await {
            Ok(response) => {
                trace_state(path, CallState::Succeeded);
                Ok(response)
            }
            Err(err) => Err(fail(path, err)),
        }
    }
}

fn trace_state(path: &str, state: CallState) {
    debug!(path, %state, "request state");
}

fn fail(path: &str, error: Error) -> Error {
    let state = CallState::for_error(&error);
    warn!(path, %state, %error, "request failed");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApplicationFailure, NetworkCause, NetworkFailure, ValidationError};
    use crate::transport::MockTransport;
    use crate::validate;
    use serde::Serialize;

    #[derive(Serialize)]
    struct LookupRequest {
        wallet: String,
        #[serde(skip_serializing_if = "crate::query::omit_empty")]
        limit: Option<i32>,
    }

    impl Validate for LookupRequest {
        fn validate(&self) -> std::result::Result<(), ValidationError> {
            validate::required("wallet", &self.wallet, "wallet is required")?;
            validate::opt_at_least("limit", self.limit, 1, "limit must be greater than 0")
        }
    }

    #[derive(Serialize)]
    struct BadShape {
        nested: Option<Option<i32>>,
    }

    impl Validate for BadShape {
        fn validate(&self) -> std::result::Result<(), ValidationError> {
            Ok(())
        }
    }

    fn ok_response(body: &str) -> ApiResponse {
        ApiResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_validation_failure_never_dispatches() {
        let mut transport = MockTransport::new();
        transport.expect_get().times(0);

        let pipeline = RequestPipeline::new(Arc::new(transport));
        let request = LookupRequest {
            wallet: String::new(),
            limit: None,
        };
        let err = pipeline
            .execute("/lookup", &request, &RequestContext::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::Validation(ValidationError::new("wallet", "wallet is required"))
        );
    }

    #[tokio::test]
    async fn test_encoding_failure_never_dispatches() {
        let mut transport = MockTransport::new();
        transport.expect_get().times(0);

        let pipeline = RequestPipeline::new(Arc::new(transport));
        let err = pipeline
            .execute(
                "/lookup",
                &BadShape {
                    nested: Some(Some(1)),
                },
                &RequestContext::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[tokio::test]
    async fn test_success_returns_body_unmodified() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .withf(|path, params, _| {
                path == "/lookup" && params.get("wallet") == Some("w1") && !params.contains_key("limit")
            })
            .times(1)
            .returning(|_, _, _| Ok(ok_response("{\"raw\":1}")));

        let pipeline = RequestPipeline::new(Arc::new(transport));
        let request = LookupRequest {
            wallet: "w1".to_string(),
            limit: None,
        };
        let response = pipeline
            .execute("/lookup", &request, &RequestContext::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"{\"raw\":1}");
    }

    #[tokio::test]
    async fn test_transport_failures_pass_through() {
        let mut transport = MockTransport::new();
        transport.expect_get().times(1).returning(|_, _, _| {
            Err(ApplicationFailure::from_response(429, b"").into())
        });

        let pipeline = RequestPipeline::new(Arc::new(transport));
        let request = LookupRequest {
            wallet: "w1".to_string(),
            limit: Some(5),
        };
        let err = pipeline
            .execute("/lookup", &request, &RequestContext::new())
            .await
            .unwrap_err();
        assert_eq!(CallState::for_error(&err), CallState::ApplicationFailed);
        assert_eq!(err.to_string(), "API error 429: rate limit exceeded");

        let mut transport = MockTransport::new();
        transport.expect_get().times(1).returning(|_, _, _| {
            Err(NetworkFailure::new("http_request", NetworkCause::Cancelled).into())
        });
        let pipeline = RequestPipeline::new(Arc::new(transport));
        let err = pipeline
            .execute("/lookup", &request, &RequestContext::new())
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(CallState::for_error(&err), CallState::NetworkFailed);
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(16)
            .returning(|_, params, _| {
                let wallet = params.get("wallet").unwrap_or_default().to_string();
                Ok(ok_response(&wallet))
            });

        let pipeline = RequestPipeline::new(Arc::new(transport));
        let mut handles = Vec::new();
        for i in 0..16 {
            let pipeline = pipeline.clone();
            handles.push(tokio::spawn(async move {
                let request = LookupRequest {
                    wallet: format!("wallet-{i}"),
                    limit: Some(i + 1),
                };
                let response = pipeline
                    .execute("/lookup", &request, &RequestContext::new())
                    .await
                    .unwrap();
                (i, response.text())
            }));
        }

        for handle in handles {
            let (i, body) = handle.await.unwrap();
            assert_eq!(body, format!("wallet-{i}"));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!CallState::Created.is_terminal());
        assert!(!CallState::Dispatched.is_terminal());
        assert!(CallState::Succeeded.is_terminal());
        assert!(CallState::EncodingFailed.is_terminal());
        assert_eq!(CallState::NetworkFailed.to_string(), "network_failed");
    }
}
