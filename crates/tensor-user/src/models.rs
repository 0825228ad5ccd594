//! User request records and response shapes.

use serde::{Deserialize, Serialize};
use tensor_core::query::is_zero;
use tensor_core::validate::{self, check_address, Validate};
use tensor_core::ValidationError;

/// Sort orders accepted by `/api/v1/user/active_listings`.
pub const LISTING_SORT_OPTIONS: [&str; 19] = [
    "PriceDesc",
    "NormalizedPriceAsc",
    "NormalizedPriceDesc",
    "HybridAmountAsc",
    "HybridAmountDesc",
    "LastSaleAsc",
    "LastSaleDesc",
    "ListedDesc",
    "RankHrttAsc",
    "RankHrttDesc",
    "RankStatAsc",
    "OrdinalAsc",
    "RankStatDesc",
    "OrdinalDesc",
    "RankTeamAsc",
    "RankTeamDesc",
    "RankTnAsc",
    "RankTnDesc",
    "PriceAsc",
];

/// Query parameters for `/api/v1/user/portfolio`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    /// Wallet whose holdings are listed.
    #[serde(deserialize_with = "validate::trimmed")]
    pub wallet: String,
    /// Include the bid count of each collection.
    pub include_bid_count: Option<bool>,
    /// Include the favourite count of each collection.
    pub include_favourite_count: Option<bool>,
    /// Include unverified collections.
    pub include_unverified: Option<bool>,
    /// Include compressed NFTs.
    pub include_compressed: Option<bool>,
    /// Currencies to price in.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub currencies: Vec<String>,
}

impl PortfolioRequest {
    /// Create a request for `wallet`.
    #[must_use]
    pub fn new(wallet: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
            ..Self::default()
        }
    }
}

impl Validate for PortfolioRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address(
            "wallet",
            &self.wallet,
            "wallet address is required",
            "invalid wallet address",
        )
    }
}

/// Query parameters for `/api/v1/user/active_listings`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveListingsRequest {
    /// Wallets whose listings are returned.
    #[serde(deserialize_with = "validate::trimmed_list")]
    pub wallets: Vec<String>,
    /// One of [`LISTING_SORT_OPTIONS`]; empty lets the API choose.
    #[serde(default, skip_serializing_if = "is_zero", deserialize_with = "validate::trimmed")]
    pub sort_by: String,
    /// Maximum number of listings.
    pub limit: i32,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Restrict to one collection.
    pub coll_id: Option<String>,
    /// Currencies to price in.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub currencies: Vec<String>,
}

impl Validate for ActiveListingsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty_list(
            "wallets",
            &self.wallets,
            "at least one wallet address is required",
        )?;
        for wallet in &self.wallets {
            check_address(wallet).map_err(|cause| {
                ValidationError::new("wallets", format!("invalid wallet address {wallet}: {cause}"))
            })?;
        }
        validate::at_least("limit", self.limit, 1, "limit must be greater than 0")?;
        if !self.sort_by.is_empty() {
            validate::one_of("sortBy", &self.sort_by, &LISTING_SORT_OPTIONS, |value| {
                format!("invalid sortBy value: {value}")
            })?;
        }
        Ok(())
    }
}

/// Query parameters shared by the three user bid endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidsRequest {
    /// Wallet that placed the bids.
    #[serde(deserialize_with = "validate::trimmed")]
    pub owner: String,
    /// Maximum number of bids (1 to 500).
    pub limit: i32,
    /// Restrict to one collection.
    pub coll_id: Option<String>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Restrict to these bid accounts.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub bid_addresses: Vec<String>,
}

impl BidsRequest {
    /// Create a request for `owner` returning at most `limit` bids.
    #[must_use]
    pub fn new(owner: impl Into<String>, limit: i32) -> Self {
        Self {
            owner: owner.into(),
            limit,
            ..Self::default()
        }
    }
}

impl Validate for BidsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::address(
            "owner",
            &self.owner,
            "owner wallet address is required",
            "invalid owner wallet address",
        )?;
        validate::in_range("limit", self.limit, 1, 500, "limit must be between 1 and 500")?;
        for bid in &self.bid_addresses {
            check_address(bid).map_err(|cause| {
                ValidationError::new("bidAddresses", format!("invalid bid address {bid}: {cause}"))
            })?;
        }
        Ok(())
    }
}

/// Query parameters for `/api/v1/user/nft_bids`.
pub type NftBidsRequest = BidsRequest;

/// Query parameters for `/api/v1/user/coll_bids`.
pub type CollectionBidsRequest = BidsRequest;

/// Query parameters for `/api/v1/user/trait_bids`.
pub type TraitBidsRequest = BidsRequest;

/// Body returned by `/api/v1/user/portfolio`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioResponse {
    /// Status message from the API.
    #[serde(default)]
    pub message: String,
    /// Collections held by the wallet.
    #[serde(default)]
    pub collections: Vec<PortfolioCollection>,
}

/// One collection in a wallet's portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCollection {
    /// Collection identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Floor price in lamports.
    #[serde(default)]
    pub floor_price: f64,
    /// Volume over the last 24 hours.
    #[serde(default, rename = "volume24h")]
    pub volume_24h: f64,
    /// Number of bids, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_count: Option<i64>,
    /// Number of favourites, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_count: Option<i64>,
    /// Tensor-verified collection.
    #[serde(default)]
    pub verified: bool,
    /// Compressed collection.
    #[serde(default)]
    pub compressed: bool,
}
