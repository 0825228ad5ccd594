//! Asynchronous RPC client.

use crate::models::PriorityFeesRequest;
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const PRIORITY_FEES_PATH: &str = "/api/v1/rpc/priority_fees";

/// Client for the RPC helper endpoints.
#[derive(Debug, Clone)]
pub struct RpcClient {
    pipeline: RequestPipeline,
}

impl RpcClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Fetch current priority fee tiers.
    ///
    /// The body decodes as [`PriorityFeesResponse`](crate::PriorityFeesResponse).
    pub async fn priority_fees(&self, ctx: &RequestContext) -> Result<ApiResponse> {
        self.pipeline
            .execute(PRIORITY_FEES_PATH, &PriorityFeesRequest, ctx)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityFeesResponse;
    use serde_json::json;
    use tensor_core::Error;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RpcClient {
        RpcClient::from_config(TensorClientConfig::new(server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_priority_fees_without_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PRIORITY_FEES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "min": 0, "low": 100, "medium": 1000, "high": 10000, "veryHigh": 50000
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .priority_fees(&RequestContext::new())
            .await
            .unwrap();
        let fees: PriorityFeesResponse = response.json().unwrap();
        assert_eq!(fees.very_high, 50_000);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PRIORITY_FEES_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .priority_fees(&RequestContext::new())
            .await
            .unwrap_err();
        match err {
            Error::Application(failure) => {
                assert_eq!(failure.status, 429);
                assert_eq!(failure.message, "rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
