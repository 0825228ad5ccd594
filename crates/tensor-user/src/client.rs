//! Asynchronous client for the user endpoints.

use crate::models::{
    ActiveListingsRequest, CollectionBidsRequest, NftBidsRequest, PortfolioRequest,
    TraitBidsRequest,
};
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const PORTFOLIO_PATH: &str = "/api/v1/user/portfolio";
const ACTIVE_LISTINGS_PATH: &str = "/api/v1/user/active_listings";
const NFT_BIDS_PATH: &str = "/api/v1/user/nft_bids";
const COLL_BIDS_PATH: &str = "/api/v1/user/coll_bids";
const TRAIT_BIDS_PATH: &str = "/api/v1/user/trait_bids";

/// Client for a wallet's portfolio, listings and bids.
///
/// Every method validates its request before anything is sent and returns
/// the raw response; decode it with [`ApiResponse::json`].
#[derive(Debug, Clone)]
pub struct UserClient {
    pipeline: RequestPipeline,
}

impl UserClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Fetch the collections held by a wallet.
    pub async fn portfolio(
        &self,
        request: &PortfolioRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(PORTFOLIO_PATH, request, ctx).await
    }

    /// Fetch the active listings of one or more wallets.
    pub async fn active_listings(
        &self,
        request: &ActiveListingsRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline
            .execute(ACTIVE_LISTINGS_PATH, request, ctx)
            .await
    }

    /// Fetch single-NFT bids placed by a wallet.
    pub async fn nft_bids(
        &self,
        request: &NftBidsRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(NFT_BIDS_PATH, request, ctx).await
    }

    /// Fetch collection-wide bids placed by a wallet.
    pub async fn collection_bids(
        &self,
        request: &CollectionBidsRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(COLL_BIDS_PATH, request, ctx).await
    }

    /// Fetch trait bids placed by a wallet.
    pub async fn trait_bids(
        &self,
        request: &TraitBidsRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(TRAIT_BIDS_PATH, request, ctx).await
    }
}
