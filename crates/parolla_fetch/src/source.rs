use async_trait::async_trait;
use parolla_core::{Error, Result};
use serde_json::Value;
use url::Url;

/// Something that can turn an endpoint URL into a parsed JSON payload.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Fetches `url` once and parses the body as JSON
    async fn fetch(&self, url: &Url) -> Result<Value>;
}

/// Plain HTTP GET through a single pooled client.
///
/// No headers, query parameters or timeouts are added, and the response
/// status is not inspected: an error page that happens to be JSON is parsed
/// like any other body.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<Value> {
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::Parse)
    }
}
