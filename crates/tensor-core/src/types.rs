//! Response shapes shared by several API surfaces.
//!
//! The request pipeline hands back raw bytes; these types are for callers that
//! want to decode them with [`ApiResponse::json`](crate::ApiResponse::json).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unsigned transaction built by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Legacy transaction, base64 encoded
    #[serde(default)]
    pub tx: Option<String>,
    /// Versioned (v0) transaction, base64 encoded
    #[serde(default, rename = "txV0")]
    pub tx_v0: String,
    /// Last block height at which the transaction is still valid
    #[serde(default)]
    pub last_valid_block_height: Option<f64>,
    /// Free-form metadata attached by the API
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Total cost in lamports, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// Response of every transaction-building endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    /// Transactions to sign and submit, in order
    #[serde(default)]
    pub txs: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transactions() {
        let json = r#"{
            "txs": [
                {
                    "tx": null,
                    "txV0": "AQAAAA==",
                    "lastValidBlockHeight": 245123456,
                    "metadata": {"type": "buy"},
                    "totalCost": 1520000000
                }
            ]
        }"#;

        let response: TransactionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.txs.len(), 1);
        let tx = &response.txs[0];
        assert!(tx.tx.is_none());
        assert_eq!(tx.tx_v0, "AQAAAA==");
        assert_eq!(tx.last_valid_block_height, Some(245_123_456.0));
        assert_eq!(tx.metadata.get("type"), Some(&Value::from("buy")));
        assert_eq!(tx.total_cost, Some(1_520_000_000.0));
    }

    #[test]
    fn test_missing_fields_default() {
        let response: TransactionsResponse = serde_json::from_str(r#"{"txs":[{}]}"#).unwrap();
        assert_eq!(response.txs[0], Transaction::default());
    }
}
