//! Verified collection listings for the Tensor API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::CollectionsClient;
pub use models::{
    CollectionDetailed, CollectionStats, VerifiedCollectionsRequest, VerifiedCollectionsResponse,
    MAX_COLLECTIONS_LIMIT, MAX_CREATOR_FILTERS,
};

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
