//! NFT request records.

use serde::{Deserialize, Serialize};
use tensor_core::validate::{self, Validate};
use tensor_core::ValidationError;

/// Largest page size of `/api/v1/mint/collection`.
pub const MAX_COLLECTION_MINTS_LIMIT: i32 = 250;

/// Check every address in `values`, naming the failing index.
///
/// `label` is the noun used in messages, e.g. `mint` or `exclude owner`.
fn indexed_addresses(field: &str, label: &str, values: &[String]) -> Result<(), ValidationError> {
    for (index, value) in values.iter().enumerate() {
        if value.is_empty() {
            return Err(ValidationError::new(
                field,
                format!("{label} address at index {index} cannot be empty"),
            ));
        }
        validate::check_address(value).map_err(|cause| {
            ValidationError::new(
                field,
                format!("invalid {label} address at index {index}: {cause}"),
            )
        })?;
    }
    Ok(())
}

/// Query parameters for `/api/v1/mint`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NftsInfoRequest {
    /// Mints to describe.
    #[serde(deserialize_with = "validate::trimmed_list")]
    pub mints: Vec<String>,
}

impl NftsInfoRequest {
    /// Request info for `mints`.
    pub fn new<I, S>(mints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mints: mints.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for NftsInfoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty_list("mints", &self.mints, "mints is required and cannot be empty")?;
        indexed_addresses("mints", "mint", &self.mints)
    }
}

/// Query parameters for `/api/v1/mint/collection`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftsByCollectionRequest {
    /// Collection to page through.
    #[serde(deserialize_with = "validate::trimmed")]
    pub coll_id: String,
    /// Sort order, e.g. `ListingPriceAsc`.
    #[serde(deserialize_with = "validate::trimmed")]
    pub sort_by: String,
    /// Page size, 1 to 250.
    pub limit: i32,
    /// Hide unlisted NFTs.
    pub only_listings: Option<bool>,
    /// Restrict to these mints.
    #[serde(
        default,
        skip_serializing_if = "tensor_core::query::is_zero",
        deserialize_with = "validate::trimmed_list"
    )]
    pub mints: Vec<String>,
    /// Cursor from the previous page.
    #[serde(default, deserialize_with = "validate::trimmed_opt")]
    pub cursor: Option<String>,
    /// Marketplaces to aggregate listings from.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub listing_sources: Vec<String>,
    /// Lowest listing price, in lamports.
    pub min_price: Option<f64>,
    /// Highest listing price, in lamports.
    pub max_price: Option<f64>,
    /// Fewest traits.
    pub trait_count_min: Option<i32>,
    /// Most traits.
    pub trait_count_max: Option<i32>,
    /// NFT name filter.
    #[serde(default, deserialize_with = "validate::trimmed_opt")]
    pub name: Option<String>,
    /// Owners to leave out.
    #[serde(
        default,
        skip_serializing_if = "tensor_core::query::is_zero",
        deserialize_with = "validate::trimmed_list"
    )]
    pub exclude_owners: Vec<String>,
    /// Owners to keep.
    #[serde(
        default,
        skip_serializing_if = "tensor_core::query::is_zero",
        deserialize_with = "validate::trimmed_list"
    )]
    pub include_owners: Vec<String>,
    /// Listing currencies to keep.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub include_currencies: Vec<String>,
    /// Trait filters, as the API's JSON-encoded trait/value strings.
    #[serde(default, skip_serializing_if = "tensor_core::query::is_zero")]
    pub traits: Vec<String>,
    /// Rarity system used by `rarityMin`/`rarityMax`.
    #[serde(default, deserialize_with = "validate::trimmed_opt")]
    pub rarity_system: Option<String>,
    /// Lowest rarity score.
    pub rarity_min: Option<f64>,
    /// Highest rarity score.
    pub rarity_max: Option<f64>,
    /// Only Solana inscriptions.
    pub only_inscriptions: Option<bool>,
    /// Inscription immutability filter.
    #[serde(default, deserialize_with = "validate::trimmed_opt")]
    pub immutable_status: Option<String>,
}

impl NftsByCollectionRequest {
    /// First page of `coll_id` sorted by `sort_by`.
    pub fn new(coll_id: impl Into<String>, sort_by: impl Into<String>, limit: i32) -> Self {
        Self {
            coll_id: coll_id.into(),
            sort_by: sort_by.into(),
            limit,
            ..Self::default()
        }
    }
}

impl Validate for NftsByCollectionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("collId", &self.coll_id, "collId is required")?;
        validate::required("sortBy", &self.sort_by, "sortBy is required")?;
        validate::in_range(
            "limit",
            self.limit,
            1,
            MAX_COLLECTION_MINTS_LIMIT,
            "limit must be between 1 and 250",
        )?;
        indexed_addresses("mints", "mint", &self.mints)?;
        indexed_addresses("excludeOwners", "exclude owner", &self.exclude_owners)?;
        indexed_addresses("includeOwners", "include owner", &self.include_owners)?;
        validate::opt_at_least("minPrice", self.min_price, 0.0, "minPrice must be >= 0")?;
        validate::opt_at_least("maxPrice", self.max_price, 0.0, "maxPrice must be >= 0")?;
        validate::opt_at_least(
            "traitCountMin",
            self.trait_count_min,
            0,
            "traitCountMin must be >= 0",
        )?;
        validate::opt_at_least(
            "traitCountMax",
            self.trait_count_max,
            1,
            "traitCountMax must be >= 1",
        )?;
        validate::opt_at_least("rarityMin", self.rarity_min, 0.0, "rarityMin must be >= 0")?;
        validate::opt_at_least("rarityMax", self.rarity_max, 0.0, "rarityMax must be >= 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_core::query::encode;

    const MINT_A: &str = "11111111111111111111111111111112";
    const MINT_B: &str = "11111111111111111111111111111113";
    const COLL: &str = "05c52d84-2e49-4ed9-a473-b43cab41e777";

    #[test]
    fn test_info_requires_mints() {
        let err = NftsInfoRequest::default().validate().unwrap_err();
        assert_eq!(err.message, "mints is required and cannot be empty");

        assert!(NftsInfoRequest::new([MINT_A, MINT_B]).validate().is_ok());
    }

    #[test]
    fn test_info_reports_failing_index() {
        let err = NftsInfoRequest::new([MINT_A, ""]).validate().unwrap_err();
        assert_eq!(err.message, "mint address at index 1 cannot be empty");

        let err = NftsInfoRequest::new(["invalid-address"]).validate().unwrap_err();
        assert_eq!(
            err.message,
            "invalid mint address at index 0: address length must be between 32 and 44 characters"
        );
    }

    #[test]
    fn test_info_encoding() {
        let params = encode(&NftsInfoRequest::new([MINT_A, MINT_B])).unwrap();
        assert_eq!(params.get("mints"), Some(format!("{MINT_A},{MINT_B}").as_str()));
    }

    #[test]
    fn test_by_collection_required_fields() {
        assert!(NftsByCollectionRequest::new(COLL, "ListingPriceAsc", 50)
            .validate()
            .is_ok());

        let err = NftsByCollectionRequest::new("", "", 0).validate().unwrap_err();
        assert_eq!(err.message, "collId is required");

        let err = NftsByCollectionRequest::new(COLL, "", 0).validate().unwrap_err();
        assert_eq!(err.message, "sortBy is required");

        for limit in [0, 251] {
            let err = NftsByCollectionRequest::new(COLL, "ListingPriceAsc", limit)
                .validate()
                .unwrap_err();
            assert_eq!(err.message, "limit must be between 1 and 250");
        }
    }

    #[test]
    fn test_by_collection_owner_lists() {
        let base = NftsByCollectionRequest::new(COLL, "ListingPriceAsc", 50);

        let request = NftsByCollectionRequest {
            exclude_owners: vec![MINT_A.to_string(), String::new()],
            ..base.clone()
        };
        assert_eq!(
            request.validate().unwrap_err().message,
            "exclude owner address at index 1 cannot be empty"
        );

        let request = NftsByCollectionRequest {
            include_owners: vec!["0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl".to_string()],
            ..base
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "includeOwners");
        assert!(err
            .message
            .starts_with("invalid include owner address at index 0: "));
    }

    #[test]
    fn test_by_collection_bounds() {
        let base = NftsByCollectionRequest::new(COLL, "ListingPriceAsc", 50);

        let request = NftsByCollectionRequest {
            trait_count_min: Some(0),
            trait_count_max: Some(0),
            ..base.clone()
        };
        assert_eq!(request.validate().unwrap_err().message, "traitCountMax must be >= 1");

        let request = NftsByCollectionRequest {
            max_price: Some(-1.0),
            ..base.clone()
        };
        assert_eq!(request.validate().unwrap_err().message, "maxPrice must be >= 0");

        let request = NftsByCollectionRequest {
            rarity_min: Some(-0.1),
            ..base
        };
        assert_eq!(request.validate().unwrap_err().message, "rarityMin must be >= 0");
    }

    #[test]
    fn test_requests_trimmed_on_deserialize() {
        let json = format!(r#"{{"mints":[" {MINT_A}","{MINT_B} "]}}"#);
        let info: NftsInfoRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(info, NftsInfoRequest::new([MINT_A, MINT_B]));
        assert!(info.validate().is_ok());

        let json = format!(
            r#"{{"collId":" {COLL} ","sortBy":"ListingPriceAsc ","limit":20,"includeOwners":[" {MINT_A}"],"cursor":" next ","name":" Lad #1 "}}"#
        );
        let request: NftsByCollectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.coll_id, COLL);
        assert_eq!(request.sort_by, "ListingPriceAsc");
        assert_eq!(request.include_owners, vec![MINT_A.to_string()]);
        assert_eq!(request.cursor.as_deref(), Some("next"));
        assert_eq!(request.name.as_deref(), Some("Lad #1"));
        assert!(request.rarity_system.is_none());
        assert!(request.mints.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_by_collection_encoding() {
        let request = NftsByCollectionRequest {
            only_listings: Some(true),
            min_price: Some(0.0),
            listing_sources: vec!["TENSOR".to_string(), "MAGICEDEN".to_string()],
            ..NftsByCollectionRequest::new(COLL, "ListingPriceAsc", 100)
        };
        let params = encode(&request).unwrap();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["collId", "sortBy", "limit", "onlyListings", "listingSources", "minPrice"]
        );
        assert_eq!(params.get("listingSources"), Some("TENSOR,MAGICEDEN"));
        assert_eq!(params.get("minPrice"), Some("0"));
    }
}
