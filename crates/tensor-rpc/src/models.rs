//! RPC request and response records.

use serde::{Deserialize, Serialize};
use tensor_core::validate::Validate;
use tensor_core::ValidationError;

/// Request for `/api/v1/rpc/priority_fees`. Carries no parameters.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityFeesRequest;

impl Validate for PriorityFeesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Market-based priority fee tiers, in micro-lamports.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFeesResponse {
    /// Lowest observed fee.
    pub min: i64,
    /// Low tier.
    pub low: i64,
    /// Median tier.
    pub medium: i64,
    /// High tier.
    pub high: i64,
    /// Highest tier, sent as `veryHigh`.
    pub very_high: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_core::query::encode;

    #[test]
    fn test_request_has_no_parameters() {
        assert!(PriorityFeesRequest.validate().is_ok());
        assert!(encode(&PriorityFeesRequest).unwrap().is_empty());
    }

    #[test]
    fn test_response_decoding() {
        let response: PriorityFeesResponse = serde_json::from_str(
            r#"{"min":0,"low":1000,"medium":5000,"high":25000,"veryHigh":100000}"#,
        )
        .unwrap();
        assert_eq!(response.medium, 5000);
        assert_eq!(response.very_high, 100_000);
    }
}
