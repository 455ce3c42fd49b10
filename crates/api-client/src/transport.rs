//! Request execution shared by both client variants.

use crate::error::{ClientError, Result};
use crate::redact::loggable_url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.tolenocoin.com/api";
pub const USER_AGENT: &str = "TolenoMCP/1.0";

const PARSE_SNIPPET_CHARS: usize = 200;

/// One outbound request: built by a tool handler, consumed once by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the base endpoint, including any query string (`/auth/top-users?limit=10`).
    pub path: String,
    pub body: Option<Value>,
}

impl RequestSpec {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Parsed response, before any status classification.
#[derive(Debug)]
pub(crate) struct JsonResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Value,
}

/// Validated base endpoint (scheme checked, trailing slash removed).
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: String,
}

impl Endpoint {
    pub(crate) fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ClientError::Config(format!(
                "Invalid base URL '{base_url}': unsupported scheme '{scheme}'"
            )));
        }
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.base
    }

    pub(crate) fn join(&self, path: &str) -> Result<Url> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let url = format!("{}{path}", self.base);
        Url::parse(&url).map_err(|e| ClientError::Config(format!("Invalid request URL: {e}")))
    }
}

/// Build the underlying reqwest client.
///
/// Redirects are never followed: each invocation is exactly one request.
pub(crate) fn build_http_client(mut headers: HeaderMap) -> Result<Client> {
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Send one request, buffer the whole body and parse it as JSON.
pub(crate) async fn execute(
    client: &Client,
    endpoint: &Endpoint,
    spec: RequestSpec,
) -> Result<JsonResponse> {
    let url = endpoint.join(&spec.path)?;
    let redacted = loggable_url(&url);

    let mut request = client.request(spec.method.clone(), url);
    if let Some(body) = spec.body.as_ref() {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    debug!(
        method = %spec.method,
        url = %redacted,
        status = status.as_u16(),
        bytes = bytes.len(),
        "toleno api response"
    );

    let body = parse_json_body(&bytes)?;
    Ok(JsonResponse { status, body })
}

pub(crate) fn parse_json_body(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|_| ClientError::Parse {
        snippet: String::from_utf8_lossy(bytes)
            .chars()
            .take(PARSE_SNIPPET_CHARS)
            .collect(),
    })
}
