//! Asynchronous marketplace client.

use crate::models::{BuyNftRequest, DelistNftRequest, ListNftRequest, SellNftRequest};
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const BUY_PATH: &str = "/api/v1/tx/buy";
const SELL_PATH: &str = "/api/v1/tx/sell";
const LIST_PATH: &str = "/api/v1/tx/list";
const DELIST_PATH: &str = "/api/v1/tx/delist";

/// Client for the marketplace transaction builders.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    pipeline: RequestPipeline,
}

impl MarketplaceClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Build a transaction buying a listed NFT.
    pub async fn buy_nft(&self, request: &BuyNftRequest, ctx: &RequestContext) -> Result<ApiResponse> {
        self.pipeline.execute(BUY_PATH, request, ctx).await
    }

    /// Build a transaction selling an NFT into a bid.
    pub async fn sell_nft(&self, request: &SellNftRequest, ctx: &RequestContext) -> Result<ApiResponse> {
        self.pipeline.execute(SELL_PATH, request, ctx).await
    }

    /// Build a transaction listing an NFT.
    pub async fn list_nft(&self, request: &ListNftRequest, ctx: &RequestContext) -> Result<ApiResponse> {
        self.pipeline.execute(LIST_PATH, request, ctx).await
    }

    /// Build a transaction removing a listing.
    pub async fn delist_nft(
        &self,
        request: &DelistNftRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(DELIST_PATH, request, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use tensor_core::{CancelToken, Error, TransactionsResponse};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BUYER: &str = "11111111111111111111111111111112";
    const MINT: &str = "11111111111111111111111111111113";
    const OWNER: &str = "11111111111111111111111111111114";
    const BLOCKHASH: &str = "11111111111111111111111111111115";

    fn client_for(server: &MockServer) -> MarketplaceClient {
        MarketplaceClient::from_config(TensorClientConfig::new(server.uri()).unwrap()).unwrap()
    }

    fn buy_request() -> BuyNftRequest {
        BuyNftRequest {
            buyer: BUYER.to_string(),
            mint: MINT.to_string(),
            owner: OWNER.to_string(),
            max_price: 1_250_000_000.0,
            blockhash: BLOCKHASH.to_string(),
            include_total_cost: Some(true),
            ..BuyNftRequest::default()
        }
    }

    #[tokio::test]
    async fn test_buy_nft() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(BUY_PATH))
            .and(query_param("buyer", BUYER))
            .and(query_param("maxPrice", "1250000000"))
            .and(query_param("includeTotalCost", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "txs": [{
                    "tx": null,
                    "txV0": "AgAAAA==",
                    "lastValidBlockHeight": 1000.0,
                    "metadata": {},
                    "totalCost": 1262500000.0
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .buy_nft(&buy_request(), &RequestContext::new())
            .await
            .unwrap();
        let txs: TransactionsResponse = response.json().unwrap();
        assert_eq!(txs.txs.len(), 1);
        assert_eq!(txs.txs[0].tx_v0, "AgAAAA==");
        assert_eq!(txs.txs[0].total_cost, Some(1_262_500_000.0));
    }

    #[tokio::test]
    async fn test_sell_list_delist_paths() {
        let server = MockServer::start().await;
        for tx_path in [SELL_PATH, LIST_PATH, DELIST_PATH] {
            Mock::given(method("GET"))
                .and(path(tx_path))
                .and(query_param("mint", MINT))
                .and(query_param("blockhash", BLOCKHASH))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"txs": []})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let ctx = RequestContext::new();

        let sell = SellNftRequest {
            seller: BUYER.to_string(),
            mint: MINT.to_string(),
            bid_address: OWNER.to_string(),
            min_price: 0.0,
            blockhash: BLOCKHASH.to_string(),
            ..SellNftRequest::default()
        };
        client.sell_nft(&sell, &ctx).await.unwrap();

        let list = ListNftRequest {
            mint: MINT.to_string(),
            owner: OWNER.to_string(),
            price: 3.0,
            blockhash: BLOCKHASH.to_string(),
            expire_in: Some(3600),
            ..ListNftRequest::default()
        };
        client.list_nft(&list, &ctx).await.unwrap();

        let delist = DelistNftRequest {
            mint: MINT.to_string(),
            owner: OWNER.to_string(),
            blockhash: BLOCKHASH.to_string(),
            ..DelistNftRequest::default()
        };
        client.delist_nft(&delist, &ctx).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_buy_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let request = BuyNftRequest {
            optional_royalty_pct: Some(150),
            ..buy_request()
        };
        let err = client_for(&server)
            .buy_nft(&request, &RequestContext::new())
            .await
            .unwrap_err();
        assert!(err.is_local());
    }

    #[tokio::test]
    async fn test_cancelled_buy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let token = CancelToken::new();
        token.cancel();
        let err = client_for(&server)
            .buy_nft(&buy_request(), &RequestContext::with_cancel(token))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(matches!(err, Error::Network(_)));
    }
}
