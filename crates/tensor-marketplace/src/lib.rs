//! Marketplace transaction builders for the Tensor API.
//!
//! Each endpoint returns unsigned transactions for the caller to sign; decode
//! the body as [`TransactionsResponse`].

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::MarketplaceClient;
pub use models::{BuyNftRequest, DelistNftRequest, ListNftRequest, SellNftRequest};
pub use tensor_core::TransactionsResponse;

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
