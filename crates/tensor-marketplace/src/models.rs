//! Marketplace request records.

use serde::{Deserialize, Serialize};
use tensor_core::validate::{self, Validate};
use tensor_core::ValidationError;

/// Query parameters for `/api/v1/tx/buy`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuyNftRequest {
    /// Wallet paying for the NFT.
    #[serde(deserialize_with = "validate::trimmed")]
    pub buyer: String,
    /// NFT mint.
    #[serde(deserialize_with = "validate::trimmed")]
    pub mint: String,
    /// Current owner of the listing.
    #[serde(deserialize_with = "validate::trimmed")]
    pub owner: String,
    /// Highest price the buyer accepts, in lamports.
    pub max_price: f64,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Return the total cost alongside each transaction.
    pub include_total_cost: Option<bool>,
    /// Account paying rent, if not the buyer.
    pub payer: Option<String>,
    /// Account paying transaction fees, if not the buyer.
    pub fee_payer: Option<String>,
    /// Optional royalty percentage to pay (0 to 100).
    pub optional_royalty_pct: Option<i32>,
    /// SPL currency mint, if not paying in SOL.
    pub currency: Option<String>,
    /// Taker broker account.
    pub taker_broker: Option<String>,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for BuyNftRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address("buyer", &self.buyer, "buyer address is required", "invalid buyer address")?;
        validate::address("mint", &self.mint, "mint address is required", "invalid mint address")?;
        validate::address("owner", &self.owner, "owner address is required", "invalid owner address")?;
        validate::at_least("maxPrice", self.max_price, 0.0, "maxPrice must be >= 0")?;
        validate::required("blockhash", &self.blockhash, "blockhash is required")?;
        validate::opt_address("payer", self.payer.as_deref(), "invalid payer address")?;
        validate::opt_address("feePayer", self.fee_payer.as_deref(), "invalid feePayer address")?;
        validate::opt_address("currency", self.currency.as_deref(), "invalid currency address")?;
        validate::opt_address(
            "takerBroker",
            self.taker_broker.as_deref(),
            "invalid takerBroker address",
        )?;
        validate::opt_in_range(
            "optionalRoyaltyPct",
            self.optional_royalty_pct,
            0,
            100,
            "optionalRoyaltyPct must be between 0 and 100",
        )?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/sell`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellNftRequest {
    /// Wallet selling into the bid.
    #[serde(deserialize_with = "validate::trimmed")]
    pub seller: String,
    /// NFT mint.
    #[serde(deserialize_with = "validate::trimmed")]
    pub mint: String,
    /// Bid account being accepted.
    #[serde(deserialize_with = "validate::trimmed")]
    pub bid_address: String,
    /// Lowest price the seller accepts, in lamports.
    pub min_price: f64,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for SellNftRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address("seller", &self.seller, "seller address is required", "invalid seller address")?;
        validate::address("mint", &self.mint, "mint address is required", "invalid mint address")?;
        validate::address("bidAddress", &self.bid_address, "bidAddress is required", "invalid bidAddress")?;
        validate::at_least("minPrice", self.min_price, 0.0, "minPrice must be >= 0")?;
        validate::required("blockhash", &self.blockhash, "blockhash is required")?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/list`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListNftRequest {
    /// NFT mint.
    #[serde(deserialize_with = "validate::trimmed")]
    pub mint: String,
    /// Wallet listing the NFT.
    #[serde(deserialize_with = "validate::trimmed")]
    pub owner: String,
    /// Asking price in lamports.
    pub price: f64,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Seconds until the listing expires.
    pub expire_in: Option<i32>,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for ListNftRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address("mint", &self.mint, "mint address is required", "invalid mint address")?;
        validate::address("owner", &self.owner, "owner address is required", "invalid owner address")?;
        validate::at_least("price", self.price, 0.0, "price must be >= 0")?;
        validate::required("blockhash", &self.blockhash, "blockhash is required")?;
        validate::opt_at_least("expireIn", self.expire_in, 0, "expireIn must be >= 0")?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Query parameters for `/api/v1/tx/delist`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DelistNftRequest {
    /// NFT mint.
    #[serde(deserialize_with = "validate::trimmed")]
    pub mint: String,
    /// Wallet that listed the NFT.
    #[serde(deserialize_with = "validate::trimmed")]
    pub owner: String,
    /// Recent blockhash for the transaction.
    #[serde(deserialize_with = "validate::trimmed")]
    pub blockhash: String,
    /// Compute unit limit.
    pub compute: Option<i32>,
    /// Priority fee in micro-lamports.
    pub priority_micro_lamports: Option<i32>,
}

impl Validate for DelistNftRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address("mint", &self.mint, "mint address is required", "invalid mint address")?;
        validate::address("owner", &self.owner, "owner address is required", "invalid owner address")?;
        validate::required("blockhash", &self.blockhash, "blockhash is required")?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}
