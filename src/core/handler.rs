use crate::core::normalizer;
use crate::core::validator::validate_request;
use crate::domain::model::{LookupOutcome, LookupRequest, LookupResult};
use crate::domain::ports::BreachSource;
use crate::utils::error::Result;
use crate::utils::logger::email_domain;
use chrono::Utc;
use serde_json::Value;

/// Validator → lookup → normalizer. Holds no per-request state.
pub struct BreachCheckHandler<S: BreachSource> {
    source: S,
}

impl<S: BreachSource> BreachCheckHandler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Entry point for untyped caller input such as `{"email": "..."}`.
    pub async fn handle(&self, payload: &Value) -> Result<LookupResult> {
        let request = validate_request(payload)?;
        self.check(&request).await
    }

    pub async fn check(&self, request: &LookupRequest) -> Result<LookupResult> {
        let domain = email_domain(request.email());
        tracing::info!("🔍 Checking breach exposure for an address at {}", domain);

        let result = match self.source.lookup(request.email()).await? {
            LookupOutcome::NotFound => LookupResult::clean(),
            LookupOutcome::Found(response) => {
                let today = Utc::now().format("%Y-%m-%d").to_string();
                normalizer::normalize(response, &today)
            }
        };

        tracing::info!(
            "✅ Breach check for {} completed: {} breach(es)",
            domain,
            result.breach_count
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BreachRecord, ExposedBreaches, ProviderResponse, Severity};
    use crate::utils::error::{BreachError, ErrorKind};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        NotFound,
        Found(ProviderResponse),
        RateLimited,
    }

    struct StubSource {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BreachSource for StubSource {
        async fn lookup(&self, _email: &str) -> Result<LookupOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::NotFound => Ok(LookupOutcome::NotFound),
                Reply::Found(response) => Ok(LookupOutcome::Found(response.clone())),
                Reply::RateLimited => Err(BreachError::RateLimited),
            }
        }
    }

    fn one_breach(data_types: &[&str]) -> ProviderResponse {
        ProviderResponse {
            exposed_breaches: Some(ExposedBreaches {
                breaches_count: Some(json!(1)),
                breaches_details: Some(vec![BreachRecord {
                    breach: Some("ExampleSite".to_string()),
                    breach_date: Some("2021-03-04".to_string()),
                    compromised_data: Some(data_types.iter().map(|t| t.to_string()).collect()),
                    ..Default::default()
                }]),
            }),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_skips_lookup() {
        let handler = BreachCheckHandler::new(StubSource::new(Reply::NotFound));

        let err = handler.handle(&json!({ "email": "a@b" })).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(handler.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_not_found_is_clean() {
        let handler = BreachCheckHandler::new(StubSource::new(Reply::NotFound));

        let result = handler
            .handle(&json!({ "email": "user@example.com" }))
            .await
            .unwrap();

        assert_eq!(result, LookupResult::clean());
        assert_eq!(handler.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_found_is_normalized() {
        let handler = BreachCheckHandler::new(StubSource::new(Reply::Found(one_breach(&[
            "Passwords",
            "Email addresses",
        ]))));

        let result = handler
            .handle(&json!({ "email": "user@example.com" }))
            .await
            .unwrap();

        assert!(result.is_compromised);
        assert_eq!(result.breach_count, 1);
        assert_eq!(result.breaches[0].severity, Severity::Critical);
        assert_eq!(result.breaches[0].breach_date, "2021-03-04");
    }

    #[tokio::test]
    async fn test_source_errors_propagate_unchanged() {
        let handler = BreachCheckHandler::new(StubSource::new(Reply::RateLimited));

        let err = handler
            .handle(&json!({ "email": "user@example.com" }))
            .await
            .unwrap_err();

        assert!(matches!(err, BreachError::RateLimited));
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    }

    #[tokio::test]
    async fn test_repeated_checks_are_identical() {
        let handler =
            BreachCheckHandler::new(StubSource::new(Reply::Found(one_breach(&["Usernames"]))));
        let payload = json!({ "email": "user@example.com" });

        let first = handler.handle(&payload).await.unwrap();
        let second = handler.handle(&payload).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.breaches[0].severity, Severity::Medium);
    }
}
