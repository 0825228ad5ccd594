//! Asynchronous NFT client.

use crate::models::{NftsByCollectionRequest, NftsInfoRequest};
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const NFTS_INFO_PATH: &str = "/api/v1/mint";
const NFTS_BY_COLLECTION_PATH: &str = "/api/v1/mint/collection";

/// Client for NFT metadata lookups.
#[derive(Debug, Clone)]
pub struct NftsClient {
    pipeline: RequestPipeline,
}

impl NftsClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Fetch metadata for a set of mints.
    pub async fn nfts_info(
        &self,
        request: &NftsInfoRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(NFTS_INFO_PATH, request, ctx).await
    }

    /// Page through the NFTs of a collection.
    pub async fn nfts_by_collection(
        &self,
        request: &NftsByCollectionRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline
            .execute(NFTS_BY_COLLECTION_PATH, request, ctx)
            .await
    }
}
