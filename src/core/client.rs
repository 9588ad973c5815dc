use crate::domain::model::{LookupOutcome, ProviderResponse};
use crate::domain::ports::{BreachSource, ConfigProvider};
use crate::utils::error::{BreachError, Result};
use crate::utils::logger::email_domain;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Same set `encodeURIComponent` leaves alone, so `@` goes out as `%40` and `+` as `%2B`.
const EMAIL_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Lookup client for the XposedOrNot `check-email` API.
pub struct XposedClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> XposedClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `{endpoint}/{email}`, with the email percent-encoded as one path segment.
    pub fn endpoint_for(&self, email: &str) -> Result<Url> {
        let endpoint = self.config.api_endpoint();
        let mut url = Url::parse(endpoint).map_err(|e| BreachError::InvalidConfigValueError {
            field: "provider.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if url.cannot_be_a_base() {
            return Err(BreachError::InvalidConfigValueError {
                field: "provider.endpoint".to_string(),
                value: endpoint.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            utf8_percent_encode(email, EMAIL_SEGMENT)
        );
        url.set_path(&path);

        Ok(url)
    }
}

#[async_trait]
impl<C: ConfigProvider> BreachSource for XposedClient<C> {
    async fn lookup(&self, email: &str) -> Result<LookupOutcome> {
        let url = self.endpoint_for(email)?;

        tracing::debug!(
            "Making breach lookup request to {} for domain {}",
            url.host_str().unwrap_or_default(),
            email_domain(email)
        );

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent())
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        match status {
            StatusCode::NOT_FOUND => return Ok(LookupOutcome::NotFound),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Breach provider rate limit hit");
                return Err(BreachError::RateLimited);
            }
            StatusCode::OK => {}
            _ => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!("API error: {} - {}", status.as_u16(), body);
                return Err(BreachError::UpstreamStatus {
                    status: status.as_u16(),
                    body,
                });
            }
        }

        let body = response.text().await?;
        let payload: ProviderResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Unparseable provider body: {}", e);
            BreachError::MalformedResponse(e)
        })?;

        Ok(LookupOutcome::Found(payload))
    }
}
