use crate::config::ServiceConfig;
use crate::errors::{ServiceError, ServiceResult};
use crate::service::{PageCursor, TransactionPage, TransactionSource};
use crate::types::SafeInfo;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// HTTP client for the Safe transaction service with bounded retries
///
/// Transient failures (transport errors, 429, 5xx) are retried with
/// exponential backoff up to `max_retries` attempts; exhausting the budget
/// surfaces `ServiceError::MaxRetriesExceeded` to the caller instead of
/// looping forever. Client errors other than 429 are not retried.
pub struct TransactionServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl TransactionServiceClient {
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn page_url(&self, safe: &str, cursor: &PageCursor) -> String {
        let base = format!(
            "{}/api/v1/safes/{}/multisig-transactions/?limit={}",
            self.config.base_url, safe, self.config.page_limit
        );
        match cursor {
            PageCursor::Start => base,
            PageCursor::NonceBelow(bound) => format!("{}&nonce__lt={}", base, bound),
            PageCursor::NextLink(url) => url.clone(),
        }
    }

    fn safe_info_url(&self, safe: &str) -> String {
        format!("{}/api/v1/safes/{}/", self.config.base_url, safe)
    }

    /// GET `url` and deserialise the JSON body, retrying transient failures
    async fn get_json_with_retry<T: DeserializeOwned>(&self, url: &str) -> ServiceResult<T> {
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);
        let mut attempts = 0;

        loop {
            attempts += 1;
            match self.http.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        if attempts > 1 {
                            debug!("Request to {} succeeded after {} attempts", url, attempts);
                        }
                        return response.json::<T>().await.map_err(|e| {
                            ServiceError::InvalidResponse(format!(
                                "unexpected body from {}: {}",
                                url, e
                            ))
                        });
                    }
                    // 4xx other than 429 will not get better on retry
                    if status.is_client_error() && status.as_u16() != 429 {
                        return Err(ServiceError::Status {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                    warn!(
                        "Attempt {} for {} returned {}, retrying in {:?}",
                        attempts, url, status, backoff
                    );
                }
                Err(e) => {
                    warn!(
                        "Attempt {} for {} failed ({}), retrying in {:?}",
                        attempts, url, e, backoff
                    );
                }
            }

            if attempts >= self.config.max_retries {
                return Err(ServiceError::MaxRetriesExceeded {
                    operation: format!("GET {}", url),
                });
            }

            sleep(backoff).await;
            backoff = next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }
}

#[async_trait]
impl TransactionSource for TransactionServiceClient {
    async fn fetch_page(&self, safe: &str, cursor: &PageCursor) -> ServiceResult<TransactionPage> {
        let url = self.page_url(safe, cursor);
        debug!("Fetching transaction page: {}", url);
        self.get_json_with_retry(&url).await
    }

    async fn get_safe_info(&self, safe: &str) -> ServiceResult<SafeInfo> {
        let url = self.safe_info_url(safe);
        debug!("Fetching Safe info: {}", url);
        self.get_json_with_retry(&url).await
    }
}

/// Next backoff duration: `min(current * multiplier, max)`
fn next_backoff(current: Duration, multiplier: f64, max_backoff_seconds: u64) -> Duration {
    Duration::from_millis((current.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}
