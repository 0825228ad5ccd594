//! TSwap pool transaction builders for the Tensor API.
//!
//! Close and edit pools, and move NFTs or SOL in and out of them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::TSwapClient;
pub use models::{
    ClosePoolRequest, DepositWithdrawNftRequest, DepositWithdrawSolRequest, EditPoolRequest,
    CURVE_TYPES, POOL_TYPES,
};
pub use tensor_core::TransactionsResponse;

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
