use crate::error::Result;
use crate::transport::{Endpoint, RequestSpec, build_http_client, execute};
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;

/// Anonymous client for the public endpoints.
///
/// Read-only: no public tool mutates remote state. Any parseable JSON body is returned as-is,
/// whatever the HTTP status; status semantics are left to the caller.
#[derive(Clone, Debug)]
pub struct PublicClient {
    inner: Arc<PublicClientInner>,
}

#[derive(Debug)]
struct PublicClientInner {
    http: Client,
    endpoint: Endpoint,
}

impl PublicClient {
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Config`] if the base URL is not an `http(s)` URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = Endpoint::parse(base_url)?;
        let http = build_http_client(HeaderMap::new())?;
        Ok(Self {
            inner: Arc::new(PublicClientInner { http, endpoint }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// # Errors
    ///
    /// Returns a transport error if the request cannot be completed, or a parse error if the
    /// body is not JSON.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let resp = execute(&self.inner.http, &self.inner.endpoint, RequestSpec::get(path)).await?;
        Ok(resp.body)
    }
}
