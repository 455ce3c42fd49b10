//! In-process mock of the Toleno API for tests.
//!
//! Routes are mounted under `/api`, matching the production base path, and every request that
//! reaches the server is recorded (method, path, query, headers, body) before routing.

use anyhow::Context as _;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A request as observed by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct MockApi {
    base_url: String,
    log: RequestLog,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockApi {
    /// Serve `routes` under `/api` on an ephemeral localhost port.
    ///
    /// The server stops when the returned value is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the localhost listener fails.
    pub async fn start(routes: Router) -> anyhow::Result<Self> {
        let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .nest("/api", routes)
            .layer(middleware::from_fn_with_state(log.clone(), record));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind mock api listener")?;
        let addr = listener.local_addr().context("mock api local_addr")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            base_url: format!("http://{addr}/api"),
            log,
            shutdown: Some(shutdown_tx),
        })
    }

    /// Base URL including the `/api` prefix, suitable for `TOLENO_API_URL`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.log.lock().len()
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.log.lock().last().cloned()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn record(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let headers = parts
        .headers
        .iter()
        .filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|v| (k.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect();

    log.lock().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
