//! Asynchronous escrow client.

use crate::models::DepositWithdrawEscrowRequest;
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const DEPOSIT_WITHDRAW_ESCROW_PATH: &str = "/api/v1/tx/deposit_withdraw_escrow";

/// Client for shared escrow (margin) accounts.
#[derive(Debug, Clone)]
pub struct EscrowClient {
    pipeline: RequestPipeline,
}

impl EscrowClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Build a transaction moving SOL into or out of an escrow account.
    ///
    /// The body decodes as [`EscrowResponse`](crate::EscrowResponse).
    pub async fn deposit_withdraw(
        &self,
        request: &DepositWithdrawEscrowRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline
            .execute(DEPOSIT_WITHDRAW_ESCROW_PATH, request, ctx)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EscrowResponse;
    use serde_json::json;
    use std::time::Duration;
    use tensor_core::{Error, NetworkCause};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const OWNER: &str = "DRpbCBMxVnDK7maPM5tGv6MvB3v1sRMC86PZ8okm21hy";
    const BLOCKHASH: &str = "11111111111111111111111111111115";

    fn client_for(server: &MockServer) -> EscrowClient {
        EscrowClient::from_config(TensorClientConfig::new(server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_deposit_withdraw() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DEPOSIT_WITHDRAW_ESCROW_PATH))
            .and(query_param("action", "WITHDRAW"))
            .and(query_param("owner", OWNER))
            .and(query_param("lamports", "2500000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = DepositWithdrawEscrowRequest {
            action: "withdraw".to_string(),
            ..DepositWithdrawEscrowRequest::deposit(OWNER, 2_500_000.0, BLOCKHASH)
        };
        let response = client_for(&server)
            .deposit_withdraw(&request, &RequestContext::new())
            .await
            .unwrap();
        let body: EscrowResponse = response.json().unwrap();
        assert_eq!(body.status, "Ok");
    }

    #[tokio::test]
    async fn test_invalid_action_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let request = DepositWithdrawEscrowRequest {
            action: "borrow".to_string(),
            ..DepositWithdrawEscrowRequest::deposit(OWNER, 1.0, BLOCKHASH)
        };
        let err = client_for(&server)
            .deposit_withdraw(&request, &RequestContext::new())
            .await
            .unwrap_err();
        assert!(err.is_local());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "Ok"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let request = DepositWithdrawEscrowRequest::deposit(OWNER, 1.0, BLOCKHASH);
        let err = client_for(&server)
            .deposit_withdraw(&request, &RequestContext::with_timeout(Duration::from_millis(50)))
            .await
            .unwrap_err();
        match err {
            Error::Network(failure) => {
                assert_eq!(failure.cause, NetworkCause::DeadlineExceeded);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
