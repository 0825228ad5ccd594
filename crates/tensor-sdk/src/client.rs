use std::sync::Arc;

use tensor_collections::CollectionsClient;
use tensor_core::{RequestPipeline, Result, TensorClientConfig, Transport};
use tensor_escrow::EscrowClient;
use tensor_marketplace::MarketplaceClient;
use tensor_nfts::NftsClient;
use tensor_rpc::RpcClient;
use tensor_tswap::TSwapClient;
use tensor_user::UserClient;

/// Entry point bundling every API client over one shared transport.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TensorClient {
    pipeline: RequestPipeline,
    user: UserClient,
    marketplace: MarketplaceClient,
    tswap: TSwapClient,
    escrow: EscrowClient,
    rpc: RpcClient,
    collections: CollectionsClient,
    nfts: NftsClient,
}

impl TensorClient {
    /// Build a client talking HTTP to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`](tensor_core::Error::ConfigError) when
    /// the configuration is invalid.
    pub fn new(config: TensorClientConfig) -> Result<Self> {
        RequestPipeline::from_config(config).map(Self::from_pipeline)
    }

    /// Build a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_pipeline(RequestPipeline::new(transport))
    }

    /// Build a client whose API surfaces all share `pipeline`.
    #[must_use]
    pub fn from_pipeline(pipeline: RequestPipeline) -> Self {
        Self {
            user: UserClient::new(pipeline.clone()),
            marketplace: MarketplaceClient::new(pipeline.clone()),
            tswap: TSwapClient::new(pipeline.clone()),
            escrow: EscrowClient::new(pipeline.clone()),
            rpc: RpcClient::new(pipeline.clone()),
            collections: CollectionsClient::new(pipeline.clone()),
            nfts: NftsClient::new(pipeline.clone()),
            pipeline,
        }
    }

    /// The pipeline shared by every API surface.
    #[must_use]
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// Portfolio, listings and bids of a wallet.
    #[must_use]
    pub fn user(&self) -> &UserClient {
        &self.user
    }

    /// Buy, sell, list and delist transactions.
    #[must_use]
    pub fn marketplace(&self) -> &MarketplaceClient {
        &self.marketplace
    }

    /// TSwap pool transactions.
    #[must_use]
    pub fn tswap(&self) -> &TSwapClient {
        &self.tswap
    }

    /// Shared escrow account transactions.
    #[must_use]
    pub fn escrow(&self) -> &EscrowClient {
        &self.escrow
    }

    /// RPC helpers.
    #[must_use]
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Verified collections.
    #[must_use]
    pub fn collections(&self) -> &CollectionsClient {
        &self.collections
    }

    /// NFT metadata.
    #[must_use]
    pub fn nfts(&self) -> &NftsClient {
        &self.nfts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let config = TensorClientConfig {
            base_url: "not a url".to_string(),
            ..TensorClientConfig::default()
        };
        let err = TensorClient::new(config).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_default_config_builds() {
        let client = TensorClient::new(TensorClientConfig::default()).unwrap();
        let _ = client.user();
        let _ = client.nfts();
    }
}
