//! # tensor-sdk
//!
//! Typed client for the Tensor NFT API.
//!
//! [`TensorClient`] builds one HTTP transport and hands it to a client per
//! API surface. Each method validates its request locally, encodes it as
//! query parameters and issues a single `GET`; nothing is retried.
//!
//! ```no_run
//! use tensor_sdk::{RequestContext, TensorClient, TensorClientConfig};
//! use tensor_sdk::user::PortfolioRequest;
//!
//! # async fn run() -> tensor_sdk::Result<()> {
//! let config = TensorClientConfig::default().with_api_key("my-key");
//! let client = TensorClient::new(config)?;
//!
//! let request = PortfolioRequest::new("DRpbCBMxVnDK7maPM5tGv6MvB3v1sRMC86PZ8okm21hy");
//! let response = client.user().portfolio(&request, &RequestContext::new()).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod client;

pub use client::TensorClient;

pub use tensor_core::{
    ApiResponse, ApplicationFailure, CancelToken, EncodingError, Error, HttpTransport,
    NetworkCause, NetworkFailure, QueryParams, RequestContext, RequestPipeline, Result,
    TensorClientConfig, Transaction, TransactionsResponse, Transport, Validate, ValidationError,
};

pub use tensor_collections as collections;
pub use tensor_escrow as escrow;
pub use tensor_marketplace as marketplace;
pub use tensor_nfts as nfts;
pub use tensor_rpc as rpc;
pub use tensor_tswap as tswap;
pub use tensor_user as user;
