use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// A validated lookup request. Only the request validator constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    email: String,
}

impl LookupRequest {
    pub(crate) fn new(email: String) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Reads a field as `None` when it is missing, `null`, or of an unexpected JSON type.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Non-objects read as absent; an object must match `T` or the body is malformed.
fn object_or_absent<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Keeps the string items of a list and drops the rest. A non-list reads as absent.
fn string_items<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(label) => Some(label),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Top-level body returned by the provider on `200`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderResponse {
    #[serde(rename = "ExposedBreaches", default, deserialize_with = "object_or_absent")]
    pub exposed_breaches: Option<ExposedBreaches>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExposedBreaches {
    /// Raw JSON; read through [`ExposedBreaches::count_is_zero`].
    #[serde(default)]
    pub breaches_count: Option<Value>,
    #[serde(default)]
    pub breaches_details: Option<Vec<BreachRecord>>,
}

impl ExposedBreaches {
    /// True when the count is missing, `null`, `false`, `0` or `""`.
    /// Any other value, including an unparseable one, leaves the decision to the records.
    pub fn count_is_zero(&self) -> bool {
        match &self.breaches_count {
            None | Some(Value::Null) => true,
            Some(Value::Bool(flag)) => !flag,
            Some(Value::Number(count)) => count.as_f64() == Some(0.0),
            Some(Value::String(count)) => count.is_empty(),
            Some(_) => false,
        }
    }
}

/// One breach as the provider reports it. Nothing here is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BreachRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub breach: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub breach_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub exposedrecords: Option<u64>,
    #[serde(default, deserialize_with = "string_items")]
    pub compromised_data: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub details: Option<String>,
}

/// Classified result of the single outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    NotFound,
    Found(ProviderResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBreach {
    pub name: String,
    pub domain: String,
    pub breach_date: String,
    pub affected_accounts: u64,
    pub data_types: Vec<String>,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub success: bool,
    pub is_compromised: bool,
    pub breach_count: usize,
    pub breaches: Vec<NormalizedBreach>,
}

impl LookupResult {
    /// The "no breach found" result.
    pub fn clean() -> Self {
        Self::from_breaches(Vec::new())
    }

    pub fn from_breaches(breaches: Vec<NormalizedBreach>) -> Self {
        Self {
            success: true,
            is_compromised: !breaches.is_empty(),
            breach_count: breaches.len(),
            breaches,
        }
    }
}
