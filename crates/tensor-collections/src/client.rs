//! Asynchronous collections client.

use crate::models::VerifiedCollectionsRequest;
use crate::Result;
use tensor_core::{ApiResponse, RequestContext, RequestPipeline, TensorClientConfig};

const COLLECTIONS_PATH: &str = "/api/v1/collections";

/// Client for verified collection listings.
#[derive(Debug, Clone)]
pub struct CollectionsClient {
    pipeline: RequestPipeline,
}

impl CollectionsClient {
    /// Create a client over an existing pipeline.
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a client with its own HTTP transport.
    pub fn from_config(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::new)
    }

    /// Fetch one page of verified collections.
    ///
    /// The body decodes as
    /// [`VerifiedCollectionsResponse`](crate::VerifiedCollectionsResponse).
    pub async fn verified_collections(
        &self,
        request: &VerifiedCollectionsRequest,
        ctx: &RequestContext,
    ) -> Result<ApiResponse> {
        self.pipeline.execute(COLLECTIONS_PATH, request, ctx).await
    }
}
