//! NFT lookups for the Tensor API.
//!
//! Both endpoints answer with loosely shaped JSON; callers decode the
//! returned [`ApiResponse`](tensor_core::ApiResponse) into whatever view
//! they need, or read it as a generic JSON value.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::NftsClient;
pub use models::{NftsByCollectionRequest, NftsInfoRequest, MAX_COLLECTION_MINTS_LIMIT};

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
