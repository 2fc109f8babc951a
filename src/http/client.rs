//! Low-level GraphQL transport — `ZoraHttp`.
//!
//! Posts a query document as `{"query": …}` and returns the raw JSON body.
//! Envelope checking and conversion to domain types happen at the domain
//! layer. One-shot best-effort: no retries, no pagination.

use crate::error::TransportError;
use crate::query::QueryDocument;

use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// The transport seam: executes one query document against the remote
/// endpoint and returns the raw structured body.
///
/// The fetch pipeline is generic over this trait so recompute semantics can
/// be exercised without a network.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        query: &QueryDocument,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}

/// Production transport for the Zora GraphQL API.
pub struct ZoraHttp {
    api_url: String,
    client: Client,
}

impl ZoraHttp {
    pub fn new(api_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Transport for ZoraHttp {
    async fn execute(&self, query: &QueryDocument) -> Result<serde_json::Value, TransportError> {
        let body = serde_json::json!({ "query": query.as_str() });
        let resp = self.client.post(&self.api_url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                "GraphQL endpoint returned error status"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        Ok(resp.json::<serde_json::Value>().await?)
    }
}

impl Clone for ZoraHttp {
    fn clone(&self) -> Self {
        Self {
            api_url: self.api_url.clone(),
            client: self.client.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let http = ZoraHttp::new("https://api.zora.co/graphql/");
        assert_eq!(http.api_url(), "https://api.zora.co/graphql");
    }
}
