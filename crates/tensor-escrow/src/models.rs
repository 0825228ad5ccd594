//! Escrow request and response records.

use serde::{Deserialize, Serialize};
use tensor_core::validate::{self, Validate};
use tensor_core::ValidationError;

/// Query parameters for `/api/v1/tx/deposit_withdraw_escrow`.
///
/// `action` is accepted in any casing and sent uppercase.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositWithdrawEscrowRequest {
    /// `deposit` or `withdraw`.
    #[serde(
        serialize_with = "validate::uppercase",
        deserialize_with = "validate::trimmed_upper"
    )]
    pub action: String,
    /// Owner of the margin account.
    #[serde(deserialize_with = "validate::trimmed")]
    pub owner: String,
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

impl DepositWithdrawEscrowRequest {
    /// Deposit `lamports` into the owner's escrow account.
    pub fn deposit(owner: impl Into<String>, lamports: f64, blockhash: impl Into<String>) -> Self {
        Self {
            action: "DEPOSIT".to_string(),
            owner: owner.into(),
            lamports,
            blockhash: blockhash.into(),
            ..Self::default()
        }
    }

    /// Withdraw `lamports` from the owner's escrow account.
    pub fn withdraw(owner: impl Into<String>, lamports: f64, blockhash: impl Into<String>) -> Self {
        Self {
            action: "WITHDRAW".to_string(),
            ..Self::deposit(owner, lamports, blockhash)
        }
    }
}

impl Validate for DepositWithdrawEscrowRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::deposit_withdraw_action(&self.action)?;
        validate::address("owner", &self.owner, "owner is required", "invalid owner address")?;
        validate::at_least("lamports", self.lamports, 0.0, "lamports must be >= 0")?;
        validate::required("blockhash", &self.blockhash, "blockhash is required")?;
        validate::compute_budget(self.compute, self.priority_micro_lamports)
    }
}

/// Body returned by the escrow endpoint.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EscrowResponse {
    /// Usually `"Ok"`.
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_core::query::encode;

    const OWNER: &str = "DRpbCBMxVnDK7maPM5tGv6MvB3v1sRMC86PZ8okm21hy";
    const BLOCKHASH: &str = "11111111111111111111111111111115";

    #[test]
    fn test_constructors() {
        let request = DepositWithdrawEscrowRequest::withdraw(OWNER, 5.0, BLOCKHASH);
        assert_eq!(request.action, "WITHDRAW");
        assert_eq!(request.owner, OWNER);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_order() {
        let request = DepositWithdrawEscrowRequest {
            action: String::new(),
            owner: String::new(),
            ..DepositWithdrawEscrowRequest::default()
        };
        assert_eq!(request.validate().unwrap_err().message, "action is required");

        let request = DepositWithdrawEscrowRequest {
            action: "transfer".to_string(),
            ..DepositWithdrawEscrowRequest::deposit(OWNER, 1.0, BLOCKHASH)
        };
        assert_eq!(
            request.validate().unwrap_err().message,
            "invalid action: transfer, must be 'deposit' or 'withdraw' (case insensitive)"
        );

        let request = DepositWithdrawEscrowRequest::deposit("", 1.0, BLOCKHASH);
        assert_eq!(request.validate().unwrap_err().message, "owner is required");

        let request = DepositWithdrawEscrowRequest::deposit("0OIl", 1.0, BLOCKHASH);
        assert!(request
            .validate()
            .unwrap_err()
            .message
            .starts_with("invalid owner address: "));

        let request = DepositWithdrawEscrowRequest::deposit(OWNER, -0.5, "");
        assert_eq!(request.validate().unwrap_err().message, "lamports must be >= 0");

        let request = DepositWithdrawEscrowRequest::deposit(OWNER, 0.5, "");
        assert_eq!(request.validate().unwrap_err().message, "blockhash is required");
    }

    #[test]
    fn test_encoding_uppercases_action() {
        let request = DepositWithdrawEscrowRequest {
            action: "Deposit".to_string(),
            priority_micro_lamports: Some(0),
            ..DepositWithdrawEscrowRequest::deposit(OWNER, 1_000_000.0, BLOCKHASH)
        };
        assert!(request.validate().is_ok());

        let params = encode(&request).unwrap();
        assert_eq!(params.get("action"), Some("DEPOSIT"));
        assert_eq!(params.get("lamports"), Some("1000000"));
        assert_eq!(params.get("priorityMicroLamports"), Some("0"));
        assert!(!params.contains_key("compute"));
    }

    #[test]
    fn test_request_trimmed_on_deserialize() {
        let json = format!(
            r#"{{"action":" deposit ","owner":" {OWNER} ","lamports":1000.0,"blockhash":"{BLOCKHASH}\n","compute":5}}"#
        );
        let request: DepositWithdrawEscrowRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(
            request,
            DepositWithdrawEscrowRequest {
                compute: Some(5),
                ..DepositWithdrawEscrowRequest::deposit(OWNER, 1000.0, BLOCKHASH)
            }
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_decoding() {
        let response: EscrowResponse = serde_json::from_str(r#"{"status":"Ok"}"#).unwrap();
        assert_eq!(response.status, "Ok");
    }
}
