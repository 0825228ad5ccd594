//! Request validation.
//!
//! Every request type implements [`Validate`]. Implementations chain the rule
//! helpers below with `?` in field declaration order, so the first failing
//! rule is the one reported.

use serde::{Deserialize, Deserializer, Serializer};

use crate::error::ValidationError;

/// Characters allowed in a base58 account address.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Shortest accepted address.
pub const MIN_ADDRESS_LEN: usize = 32;

/// Longest accepted address.
pub const MAX_ADDRESS_LEN: usize = 44;

/// Local check run on a request before it is encoded.
pub trait Validate {
    /// Check the request's domain constraints.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing rule.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check that `address` looks like a base58 account address.
///
/// # Errors
///
/// Returns a message describing the first problem found.
pub fn check_address(address: &str) -> Result<(), String> {
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len()) {
        return Err(format!(
            "address length must be between {MIN_ADDRESS_LEN} and {MAX_ADDRESS_LEN} characters"
        ));
    }
    if !address.chars().all(|c| BASE58_ALPHABET.contains(c)) {
        return Err("address contains invalid characters".to_string());
    }
    Ok(())
}

/// Returns true if `address` passes [`check_address`].
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    check_address(address).is_ok()
}

/// Fail with `message` unless `value` is non-empty.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is empty.
pub fn required(field: &str, value: &str, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Fail with `message` unless `values` has at least one element.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `values` is empty.
pub fn non_empty_list<T>(field: &str, values: &[T], message: &str) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Fail with `message` if `values` has more than `max` elements.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when the list is too long.
pub fn max_items<T>(
    field: &str,
    values: Option<&[T]>,
    max: usize,
    message: &str,
) -> Result<(), ValidationError> {
    match values {
        Some(values) if values.len() > max => Err(ValidationError::new(field, message)),
        _ => Ok(()),
    }
}

/// Fail with `message` unless `min <= value <= max`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is out of range.
pub fn in_range<T>(field: &str, value: T, min: T, max: T, message: &str) -> Result<(), ValidationError>
where
    T: PartialOrd,
{
    if value < min || value > max {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Fail with `message` unless `value >= min`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is below `min`.
pub fn at_least<T>(field: &str, value: T, min: T, message: &str) -> Result<(), ValidationError>
where
    T: PartialOrd,
{
    if value < min {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Fail with `message` unless `value <= max`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` exceeds `max`.
pub fn at_most<T>(field: &str, value: T, max: T, message: &str) -> Result<(), ValidationError>
where
    T: PartialOrd,
{
    if value > max {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// [`at_least`] for an optional value; absent values pass.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when a present value is below `min`.
pub fn opt_at_least<T>(field: &str, value: Option<T>, min: T, message: &str) -> Result<(), ValidationError>
where
    T: PartialOrd,
{
    match value {
        Some(value) => at_least(field, value, min, message),
        None => Ok(()),
    }
}

/// [`in_range`] for an optional value; absent values pass.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when a present value is out of range.
pub fn opt_in_range<T>(
    field: &str,
    value: Option<T>,
    min: T,
    max: T,
    message: &str,
) -> Result<(), ValidationError>
where
    T: PartialOrd,
{
    match value {
        Some(value) => in_range(field, value, min, max, message),
        None => Ok(()),
    }
}

/// Fail unless `value` exactly matches one of `allowed`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` built by `message` from the
/// rejected value.
pub fn one_of(
    field: &str,
    value: &str,
    allowed: &[&str],
    message: impl FnOnce(&str) -> String,
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(field, message(value)))
}

/// Fail unless the canonical form of `value` matches one of `allowed`.
///
/// `allowed` holds canonical (uppercase) spellings.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` built by `message` from the
/// rejected input.
pub fn one_of_ignore_case(
    field: &str,
    value: &str,
    allowed: &[&str],
    message: impl FnOnce(&str) -> String,
) -> Result<(), ValidationError> {
    let canonical = canonical_upper(value);
    if allowed.contains(&canonical.as_str()) {
        return Ok(());
    }
    Err(ValidationError::new(field, message(value)))
}

/// Check a required address field.
///
/// An empty value fails with `missing`; a malformed one fails with
/// `"{invalid}: {cause}"`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` on the first problem found.
pub fn address(field: &str, value: &str, missing: &str, invalid: &str) -> Result<(), ValidationError> {
    required(field, value, missing)?;
    check_address(value).map_err(|cause| ValidationError::new(field, format!("{invalid}: {cause}")))
}

/// Check an optional address field; absent values pass.
///
/// A present value is held to the same shape as a required address, so
/// `Some("")` fails.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when a present value is malformed.
pub fn opt_address(field: &str, value: Option<&str>, invalid: &str) -> Result<(), ValidationError> {
    match value {
        Some(value) => check_address(value)
            .map_err(|cause| ValidationError::new(field, format!("{invalid}: {cause}"))),
        None => Ok(()),
    }
}

/// Check the optional `compute` and `priorityMicroLamports` fields shared by
/// every transaction-building request.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the first negative value.
pub fn compute_budget(compute: Option<i32>, priority_micro_lamports: Option<i32>) -> Result<(), ValidationError> {
    opt_at_least("compute", compute, 0, "compute must be >= 0")?;
    opt_at_least(
        "priorityMicroLamports",
        priority_micro_lamports,
        0,
        "priorityMicroLamports must be >= 0",
    )
}

/// Canonical spellings accepted for a deposit/withdraw `action` field.
pub const DEPOSIT_WITHDRAW_ACTIONS: [&str; 2] = ["DEPOSIT", "WITHDRAW"];

/// Check a required, case-insensitive deposit/withdraw `action` field.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `action` when it is empty or not one of
/// [`DEPOSIT_WITHDRAW_ACTIONS`] in any casing.
pub fn deposit_withdraw_action(value: &str) -> Result<(), ValidationError> {
    required("action", value, "action is required")?;
    one_of_ignore_case("action", value, &DEPOSIT_WITHDRAW_ACTIONS, |action| {
        format!("invalid action: {action}, must be 'deposit' or 'withdraw' (case insensitive)")
    })
}

/// Canonical spelling of a case-insensitive enumerated value.
#[must_use]
pub fn canonical_upper(value: &str) -> String {
    value.trim().to_uppercase()
}

/// `serialize_with` helper that sends the canonical spelling of a
/// case-insensitive enumerated value.
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn uppercase<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&canonical_upper(value))
}

/// `deserialize_with` helper that drops surrounding whitespace.
///
/// # Errors
///
/// Propagates the deserializer's error.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// `deserialize_with` helper for case-insensitive enumerated values; stores
/// the canonical spelling.
///
/// # Errors
///
/// Propagates the deserializer's error.
pub fn trimmed_upper<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(canonical_upper(&value))
}

/// [`trimmed`] for an optional string. Pair with `#[serde(default)]`.
///
/// # Errors
///
/// Propagates the deserializer's error.
pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|value| value.trim().to_string()))
}

/// [`trimmed`] applied to every element of a list.
///
/// # Errors
///
/// Propagates the deserializer's error.
pub fn trimmed_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|value| value.trim().to_string()).collect())
}
