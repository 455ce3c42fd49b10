use crate::credential::Credential;
use crate::error::{ClientError, Result};
use crate::transport::{Endpoint, JsonResponse, RequestSpec, build_http_client, execute};
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use std::sync::Arc;

/// Bearer-token client for the per-user endpoints.
///
/// The header set is fixed: `Authorization`, `Content-Type`, `Accept`, `Accept-Language` and
/// `User-Agent`. No app-version or mobile platform headers are ever sent; the API routes
/// requests carrying them through version gating and device integrity checks.
#[derive(Clone, Debug)]
pub struct AuthenticatedClient {
    inner: Arc<AuthenticatedClientInner>,
}

#[derive(Debug)]
struct AuthenticatedClientInner {
    http: Client,
    endpoint: Endpoint,
}

impl AuthenticatedClient {
    /// Build a client bound to a credential.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] when `credential` is `None`; a tool that
    /// requires authentication must never run unauthenticated. Returns
    /// [`ClientError::Config`] for an invalid base URL.
    pub fn new(base_url: &str, credential: Option<Credential>) -> Result<Self> {
        let credential = credential.ok_or(ClientError::MissingCredential)?;
        let endpoint = Endpoint::parse(base_url)?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|_| {
                ClientError::Config("API key contains characters not allowed in a header".into())
            })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

        let http = build_http_client(headers)?;
        Ok(Self {
            inner: Arc::new(AuthenticatedClientInner { http, endpoint }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// # Errors
    ///
    /// Transport, parse, or [`ClientError::Remote`] for HTTP status `>= 400`.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(RequestSpec::get(path)).await
    }

    /// POST a JSON body; `None` is sent as `{}`.
    ///
    /// # Errors
    ///
    /// Transport, parse, or [`ClientError::Remote`] for HTTP status `>= 400`.
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.send(RequestSpec::post(path, body.unwrap_or_else(|| json!({}))))
            .await
    }

    /// # Errors
    ///
    /// Transport, parse, or [`ClientError::Remote`] for HTTP status `>= 400`.
    pub async fn send(&self, spec: RequestSpec) -> Result<Value> {
        let resp = execute(&self.inner.http, &self.inner.endpoint, spec).await?;
        classify_status(resp)
    }
}

fn classify_status(resp: JsonResponse) -> Result<Value> {
    let status = resp.status.as_u16();
    if status < 400 {
        return Ok(resp.body);
    }

    let message = resp
        .body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map_or_else(|| format!("HTTP {status}"), str::to_string);

    Err(ClientError::Remote {
        message,
        status,
        data: resp.body,
    })
}

#[cfg(test)]
mod tests {
    use super::AuthenticatedClient;
    use crate::{ClientError, Credential};
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use toleno_test_support::MockApi;

    fn client_for(api: &MockApi) -> AuthenticatedClient {
        AuthenticatedClient::new(api.base_url(), Credential::new("tlno_test")).expect("client")
    }

    #[test]
    fn construction_without_credential_fails_fast() {
        let err = AuthenticatedClient::new("https://api.tolenocoin.com/api", None).unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential));
        assert_eq!(
            err.to_string(),
            "TOLENO_API_KEY is required for authenticated tools"
        );
    }

    #[tokio::test]
    async fn get_401_maps_to_remote_error_with_message() {
        let api = MockApi::start(Router::new().route(
            "/auth/profile",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({"message": "bad token"})),
                )
            }),
        ))
        .await
        .expect("mock api");

        let err = client_for(&api).get("/auth/profile").await.unwrap_err();
        let ClientError::Remote {
            message,
            status,
            data,
        } = &err
        else {
            panic!("expected remote error, got {err:?}");
        };
        assert_eq!(message, "bad token");
        assert_eq!(*status, 401);
        assert_eq!(data, &json!({"message": "bad token"}));
    }

    #[tokio::test]
    async fn remote_error_without_message_uses_status_text() {
        let api = MockApi::start(Router::new().route(
            "/wallet/info",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    axum::Json(json!({"error": "down"})),
                )
            }),
        ))
        .await
        .expect("mock api");

        let err = client_for(&api).get("/wallet/info").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.details(), Some(&json!({"error": "down"})));
    }

    #[tokio::test]
    async fn post_non_json_body_fails_with_truncated_parse_error() {
        let api = MockApi::start(Router::new().route(
            "/mining/start",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>error</html>") }),
        ))
        .await
        .expect("mock api");

        let err = client_for(&api)
            .post("/mining/start", None)
            .await
            .unwrap_err();
        let ClientError::Parse { snippet } = &err else {
            panic!("expected parse error, got {err:?}");
        };
        assert!(snippet.len() <= 200);
        assert!(err.to_string().contains("<html>error</html>"));
    }

    #[tokio::test]
    async fn requests_carry_bearer_json_headers_and_no_app_headers() {
        let api = MockApi::start(Router::new().route(
            "/mining/claim",
            post(|body: axum::body::Bytes| async move {
                let echoed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                axum::Json(json!({"success": true, "echo": echoed}))
            }),
        ))
        .await
        .expect("mock api");

        let body = client_for(&api)
            .post("/mining/claim", None)
            .await
            .expect("post");
        assert_eq!(body["echo"], json!({}));

        let req = api.last_request().expect("recorded request");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/mining/claim");
        assert_eq!(req.header("authorization"), Some("Bearer tlno_test"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("user-agent"), Some("TolenoMCP/1.0"));
        assert_eq!(req.header("content-length"), Some("2"));
        assert_eq!(req.header("x-app-version"), None);
        assert_eq!(req.body, "{}");
    }

    #[tokio::test]
    async fn redirects_are_not_followed() {
        let api = MockApi::start(
            Router::new()
                .route(
                    "/referral/info",
                    get(|| async {
                        (
                            StatusCode::FOUND,
                            [(axum::http::header::LOCATION, "/api/elsewhere")],
                            axum::Json(json!({"moved": true})),
                        )
                    }),
                )
                .route("/elsewhere", get(|| async { axum::Json(json!({})) })),
        )
        .await
        .expect("mock api");

        let body = client_for(&api).get("/referral/info").await.expect("302 < 400");
        assert_eq!(body, json!({"moved": true}));
        assert_eq!(api.hits(), 1);
    }
}
