use crate::core::severity;
use crate::domain::model::{BreachRecord, LookupResult, NormalizedBreach, ProviderResponse};
use serde_json::Value;

const UNKNOWN_BREACH_NAME: &str = "Unknown";

/// Empty strings count as missing, so fallbacks apply to them too.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reshapes a provider body into a [`LookupResult`].
///
/// A missing container, a missing or zero `breaches_count`, or an empty
/// `breaches_details` all produce the same result as a `404`. `today` is the
/// `YYYY-MM-DD` date used when a record carries no breach date.
pub fn normalize(response: ProviderResponse, today: &str) -> LookupResult {
    let mut exposed = response.exposed_breaches.unwrap_or_default();
    let count_is_zero = exposed.count_is_zero();
    let count = exposed.breaches_count.take();
    let details = exposed.breaches_details.unwrap_or_default();

    if count_is_zero || details.is_empty() {
        tracing::debug!(
            "Provider reported no breaches (count: {:?}, details: {})",
            count,
            details.len()
        );
        return LookupResult::clean();
    }

    if count.as_ref().and_then(Value::as_u64) != Some(details.len() as u64) {
        tracing::debug!(
            "Provider count {:?} differs from {} breach records; using the records",
            count,
            details.len()
        );
    }

    let breaches = details
        .into_iter()
        .map(|record| normalize_breach(record, today))
        .collect();

    LookupResult::from_breaches(breaches)
}

pub fn normalize_breach(record: BreachRecord, today: &str) -> NormalizedBreach {
    let raw_name = non_empty(record.breach);
    let data_types = record.compromised_data.unwrap_or_default();
    let severity = severity::classify(&data_types);

    NormalizedBreach {
        name: raw_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_BREACH_NAME.to_string()),
        domain: record.domain.unwrap_or_default(),
        breach_date: non_empty(record.breach_date).unwrap_or_else(|| today.to_string()),
        affected_accounts: record.exposedrecords.unwrap_or(0),
        data_types,
        severity,
        description: non_empty(record.details)
            .or(raw_name)
            .unwrap_or_default(),
    }
}
