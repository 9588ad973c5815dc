use crate::domain::model::LookupRequest;
use crate::utils::error::{BreachError, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Minimal `local@domain.tld` shape check, not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Turns caller input into a [`LookupRequest`].
pub fn validate_request(payload: &Value) -> Result<LookupRequest> {
    let email = match payload.get("email").and_then(Value::as_str) {
        Some(email) if !email.is_empty() => email,
        _ => return Err(BreachError::invalid_argument("Email is required")),
    };

    if !is_valid_email(email) {
        return Err(BreachError::invalid_argument("Invalid email format"));
    }

    Ok(LookupRequest::new(email.to_string()))
}
