//! Escrow account transactions for the Tensor API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::EscrowClient;
pub use models::{DepositWithdrawEscrowRequest, EscrowResponse};

/// Convenient result alias sharing the `tensor-core` error type.
pub type Result<T> = tensor_core::Result<T>;
