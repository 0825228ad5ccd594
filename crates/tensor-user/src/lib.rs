//! User endpoints of the Tensor API.
//!
//! Provides request records and an asynchronous client for a wallet's
//! portfolio, active listings and outstanding bids.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::UserClient;
pub use models::{
    ActiveListingsRequest, BidsRequest, CollectionBidsRequest, NftBidsRequest, PortfolioCollection,
    PortfolioRequest, PortfolioResponse, TraitBidsRequest, LISTING_SORT_OPTIONS,
};

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
