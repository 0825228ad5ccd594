//! Asynchronous TSwap client.

use crate::models::{
    ClosePoolRequest, DepositWithdrawNftRequest, DepositWithdrawSolRequest, EditPoolRequest,
};
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const CLOSE_POOL_PATH: &str = "/api/v1/tx/tswap/close_order";
const EDIT_POOL_PATH: &str = "/api/v1/tx/tswap/edit_order";
const DEPOSIT_WITHDRAW_NFT_PATH: &str = "/api/v1/tx/tswap/deposit_withdraw";
const DEPOSIT_WITHDRAW_SOL_PATH: &str = "/api/v1/tx/tswap/deposit_withdraw_sol";

/// Client for TSwap pool transactions.
#[derive(Debug, Clone)]
pub struct TSwapClient {
    pipeline: RequestPipeline,
}

impl TSwapClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Build a transaction closing a pool.
    pub async fn close_pool(
        &self,
        request: &ClosePoolRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(CLOSE_POOL_PATH, request, ctx).await
    }

    /// Build a transaction changing a pool's pricing.
    pub async fn edit_pool(
        &self,
        request: &EditPoolRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(EDIT_POOL_PATH, request, ctx).await
    }

    /// Build a transaction moving an NFT into or out of a pool.
    pub async fn deposit_withdraw_nft(
        &self,
        request: &DepositWithdrawNftRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline
            .execute(DEPOSIT_WITHDRAW_NFT_PATH, request, ctx)
            .await
    }

    /// Build a transaction moving SOL into or out of a pool.
    pub async fn deposit_withdraw_sol(
        &self,
        request: &DepositWithdrawSolRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline
            .execute(DEPOSIT_WITHDRAW_SOL_PATH, request, ctx)
            .await
    }
}
