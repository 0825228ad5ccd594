//! Collection request and response records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tensor_core::validate::{self, Validate};
use tensor_core::ValidationError;

/// Largest page size the collections endpoint serves.
pub const MAX_COLLECTIONS_LIMIT: i32 = 100;

/// Most `vocs` or `fvcs` entries a single request may carry.
pub const MAX_CREATOR_FILTERS: usize = 10;

/// Query parameters for `/api/v1/collections`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedCollectionsRequest {
    /// Sort key with direction, e.g. `statsV2.volume1h:desc`.
    pub sort_by: String,
    /// Page size, 1 to 100.
    pub limit: i32,
    /// Slugs as used in `tensor.trade/trade/` URLs.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub slug_displays: Vec<String>,
    /// Collection IDs.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub coll_ids: Vec<String>,
    /// Verified on-chain collection mints.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub vocs: Vec<String>,
    /// First verified creators.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub fvcs: Vec<String>,
    /// One-based page number.
    pub page: Option<i32>,
}

impl VerifiedCollectionsRequest {
    /// First page sorted by `sort_by`.
    pub fn new(sort_by: impl Into<String>, limit: i32) -> Self {
        Self {
            sort_by: sort_by.into(),
            limit,
            ..Self::default()
        }
    }
}

impl Validate for VerifiedCollectionsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("sortBy", &self.sort_by, "sortBy is required")?;
        if !self.sort_by.contains(':') {
            return Err(ValidationError::new(
                "sortBy",
                "sortBy must include direction (e.g., 'statsV2.volume1h:desc')",
            ));
        }
        validate::at_least("limit", self.limit, 1, "limit must be greater than 0")?;
        validate::at_most("limit", self.limit, MAX_COLLECTIONS_LIMIT, "limit must be 100 or less")?;
        validate::max_items(
            "vocs",
            Some(self.vocs.as_slice()),
            MAX_CREATOR_FILTERS,
            "maximum 10 vocs allowed",
        )?;
        validate::max_items(
            "fvcs",
            Some(self.fvcs.as_slice()),
            MAX_CREATOR_FILTERS,
            "maximum 10 fvcs allowed",
        )?;
        validate::opt_at_least("page", self.page, 1, "page must be 1 or greater")
    }
}

/// One page of verified collections.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerifiedCollectionsResponse {
    /// Page number served.
    pub page: i32,
    /// Total matching collections.
    pub total: i32,
    /// Collections on this page.
    pub collections: Vec<CollectionDetailed>,
}

/// A collection with its metadata and market stats.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CollectionDetailed {
    pub name: String,
    pub coll_id: String,
    pub slug_display: String,
    pub slug_me: String,
    pub symbol: String,
    pub description: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub discord: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub twitter: String,
    pub image_uri: String,
    pub tensor_verified: bool,
    pub tensor_whitelisted: bool,
    #[serde(rename = "whitelistV2Pda", skip_serializing_if = "Vec::is_empty")]
    pub whitelist_v2_pda: Vec<Value>,
    pub token_standard: String,
    pub compressed: bool,
    pub inscription: bool,
    pub inscription_metaplex: bool,
    pub spl20: bool,
    #[serde(rename = "sellRoyaltyFeeBPS")]
    pub sell_royalty_fee_bps: i32,
    pub stats: CollectionStats,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_list_date: String,
    pub hidden: bool,
    pub token_program: String,
}

/// Market statistics of a collection.
///
/// Prices and volumes arrive as decimal strings of lamports.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CollectionStats {
    pub buy_now_price: String,
    pub buy_now_price_net_fees: String,
    pub floor1h: f64,
    pub floor24h: f64,
    pub floor7d: f64,
    pub market_cap: String,
    pub num_bids: i32,
    pub num_listed: i32,
    pub num_listed1h: f64,
    pub num_listed24h: f64,
    pub num_listed7d: f64,
    pub num_mints: i32,
    pub pct_listed: f64,
    pub sales1h: i32,
    pub sales24h: i32,
    pub sales7d: i32,
    pub sales_all: i32,
    pub sell_now_price: String,
    pub sell_now_price_net_fees: String,
    pub volume1h: String,
    pub volume24h: String,
    pub volume7d: String,
    pub volume_all: String,
}
