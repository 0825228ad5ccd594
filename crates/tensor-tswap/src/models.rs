//! TSwap request records.

use serde::{Deserialize, Serialize};
use tensor_core::validate::{self, Validate};
use tensor_core::ValidationError;

/// Pool types accepted by `edit_order`.
pub const POOL_TYPES: [&str; 3] = ["TOKEN", "NFT", "TRADE"];

/// Bonding curves accepted by `edit_order`.
pub const CURVE_TYPES: [&str; 2] = ["linear", "exponential"];

fn pool_address(value: &str) -> Result<(), ValidationError> {
    validate::address("poolAddress", value, "poolAddress is required", "invalid poolAddress")
}

fn blockhash(value: &str) -> Result<(), ValidationError> {
    validate::required("blockhash", value, "blockhash is required")
}

/// Query parameters for `/api/v1/tx/tswap/close_order`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePoolRequest {
    /// Pool to close.
    #[serde(deserialize_with = "validate::trimmed")]
    pub pool_address: String,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for ClosePoolRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        pool_address(&self.pool_address)?;
        blockhash(&self.blockhash)?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/tswap/edit_order`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditPoolRequest {
    /// Pool to edit.
    #[serde(deserialize_with = "validate::trimmed")]
    pub pool_address: String,
    /// One of [`POOL_TYPES`], exact case.
    #[serde(deserialize_with = "validate::trimmed")]
    pub pool_type: String,
    /// One of [`CURVE_TYPES`], exact case.
    #[serde(deserialize_with = "validate::trimmed")]
    pub curve_type: String,
    /// Starting price in lamports.
    pub starting_price: f64,
    /// Price step between trades.
    pub delta: f64,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Keep market-maker fees in a separate account.
    pub mm_keep_fees_separate: Option<bool>,
    /// Market-maker fee in basis points (0 to 10000).
    pub mm_fee_bps: Option<f64>,
    /// Cap on how many NFTs takers may sell into the pool.
    pub max_taker_sell_count: Option<i32>,
    /// Fund the pool from the shared escrow.
    pub use_shared_escrow: Option<bool>,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for EditPoolRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        pool_address(&self.pool_address)?;
        validate::required("poolType", &self.pool_type, "poolType is required")?;
        validate::one_of("poolType", &self.pool_type, &POOL_TYPES, |value| {
            format!("invalid poolType: {value}, must be one of: [{}]", POOL_TYPES.join(" "))
        })?;
        validate::required("curveType", &self.curve_type, "curveType is required")?;
        validate::one_of("curveType", &self.curve_type, &CURVE_TYPES, |value| {
            format!("invalid curveType: {value}, must be one of: [{}]", CURVE_TYPES.join(" "))
        })?;
        validate::at_least("startingPrice", self.starting_price, 0.0, "startingPrice must be >= 0")?;
        validate::at_least("delta", self.delta, 0.0, "delta must be >= 0")?;
        blockhash(&self.blockhash)?;
        validate::opt_in_range(
            "mmFeeBps",
            self.mm_fee_bps,
            0.0,
            10_000.0,
            "mmFeeBps must be between 0 and 10000 basis points",
        )?;
        validate::opt_at_least(
            "maxTakerSellCount",
            self.max_taker_sell_count,
            0,
            "maxTakerSellCount must be >= 0",
        )?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/tswap/deposit_withdraw`.
///
/// `action` is accepted in any casing and sent uppercase.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositWithdrawNftRequest {
    /// `deposit` or `withdraw`.
    #[serde(
        serialize_with = "validate::uppercase",
        deserialize_with = "validate::trimmed_upper"
    )]
    pub action: String,
    /// Pool receiving or releasing the NFT.
    #[serde(deserialize_with = "validate::trimmed")]
    pub pool_address: String,
    /// NFT mint.
    #[serde(deserialize_with = "validate::trimmed")]
    pub mint: String,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
    /// Token account holding the NFT; empty means the owner's default.
    #[serde(
        default,
        skip_serializing_if = "tensor_core::query::omit_empty",
        deserialize_with = "validate::trimmed_opt"
    )]
    pub nft_source: Option<String>,
}

impl Validate for DepositWithdrawNftRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::deposit_withdraw_action(&self.action)?;
        pool_address(&self.pool_address)?;
        validate::address("mint", &self.mint, "mint is required", "invalid mint address")?;
        blockhash(&self.blockhash)?;
        // An empty source means "use the default account".
        let source = self.nft_source.as_deref().filter(|source| !source.is_empty());
        validate::opt_address("nftSource", source, "invalid nftSource address")?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/tswap/deposit_withdraw_sol`.
///
/// `action` is accepted in any casing and sent uppercase.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositWithdrawSolRequest {
    /// `deposit` or `withdraw`.
    #[serde(
        serialize_with = "validate::uppercase",
        deserialize_with = "validate::trimmed_upper"
    )]
    pub action: String,
    /// Pool receiving or releasing SOL.
    #[serde(deserialize_with = "validate::trimmed")]
    pub pool_address: String,
    /// Amount in lamports.
    pub lamports: f64,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for DepositWithdrawSolRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::deposit_withdraw_action(&self.action)?;
        pool_address(&self.pool_address)?;
        validate::at_least("lamports", self.lamports, 0.0, "lamports must be >= 0")?;
        blockhash(&self.blockhash)?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}
