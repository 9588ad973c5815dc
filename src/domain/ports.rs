use crate::domain::model::LookupOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// Anything that can answer "has this email been breached?" with one call.
#[async_trait]
pub trait BreachSource: Send + Sync {
    async fn lookup(&self, email: &str) -> Result<LookupOutcome>;
}
