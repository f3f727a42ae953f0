use anyhow::Context;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

use crate::types::{LogRow, QueryFilter};

/// HTTP client for one kube-insight log server instance.
///
/// Every method performs a single request/response; connection failures
/// propagate as errors and are not retried.
pub struct LogServer {
    base: String,
    http: reqwest::Client,
}

impl LogServer {
    pub fn new(host: &str, port: u16) -> Self {
        LogServer {
            base: format!("http://{}:{}", host, port),
            http: reqwest::Client::new(),
        }
    }

    /// Liveness probe: `GET /write`. Returns the status and body; the caller
    /// decides whether a non-200 aborts anything.
    pub async fn liveness(&self) -> anyhow::Result<(StatusCode, String)> {
        let response = self
            .http
            .get(format!("{}/write", self.base))
            .send()
            .await
            .with_context(|| format!("liveness check against {} failed", self.base))?;
        let status = response.status();
        let body = response.text().await.context("failed to read liveness response body")?;
        Ok((status, body))
    }

    /// `POST /write` with the batch serialized as a pretty-printed JSON array.
    pub async fn write_batch(&self, batch: &[LogRow]) -> anyhow::Result<(StatusCode, String)> {
        let body = serde_json::to_string_pretty(batch).context("failed to serialize batch")?;
        let response = self
            .http
            .post(format!("{}/write", self.base))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("batch POST to {}/write failed", self.base))?;
        let status = response.status();
        let body = response.text().await.context("failed to read write response body")?;
        Ok((status, body))
    }

    /// Build the `/query` URL with the five filter keys URL-encoded.
    pub fn query_url(&self, filter: &QueryFilter) -> anyhow::Result<Url> {
        Url::parse_with_params(&format!("{}/query", self.base), filter.as_params())
            .with_context(|| format!("failed to build query URL against {}", self.base))
    }

    /// `GET /query?...`. Returns the raw status and body for the caller to
    /// interpret (error JSON on non-200, `{"log_rows": [...]}` on 200).
    pub async fn query(&self, filter: &QueryFilter) -> anyhow::Result<(StatusCode, String)> {
        let url = self.query_url(filter)?;
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("query GET to {} failed", url))?;
        let status = response.status();
        let body = response.text().await.context("failed to read query response body")?;
        Ok((status, body))
    }
}
