use std::time::Duration;

use crate::prelude::*;

pub const NUMBERS_API_BASE: &str = "http://numbersapi.com";

/// Default timeout for a single fun fact lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the numbersapi.com trivia service.
///
/// Lookups never surface an error: any failure (connect error, timeout,
/// non-success status, unreadable body) resolves to [`fallback_fact`]. One
/// attempt per lookup, no retries.
#[derive(Debug, Clone)]
pub struct FactClient {
    client: reqwest::Client,
    base_url: String,
}

impl FactClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| eyre!("Failed to build fact client: {e}"))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a trivia string for `n`, falling back to a deterministic
    /// placeholder when the upstream service misbehaves.
    pub async fn fun_fact(&self, n: i64) -> String {
        match self.fetch_fact(n).await {
            Ok(fact) => fact,
            Err(err) => {
                log::warn!("fun fact lookup for {n} failed: {err}");
                fallback_fact(n)
            }
        }
    }

    async fn fetch_fact(&self, n: i64) -> Result<String> {
        let url = format!("{}/{n}/math", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to fetch fact for {n}: {e}"))?;

        if !response.status().is_success() {
            return Err(eyre!(
                "Fact service returned status {} for {n}",
                response.status()
            ));
        }

        response
            .text()
            .await
            .map_err(|e| eyre!("Failed to read fact body for {n}: {e}"))
    }
}

/// Placeholder trivia used whenever the external service is unavailable.
pub fn fallback_fact(n: i64) -> String {
    format!("{n} is an interesting number.")
}
