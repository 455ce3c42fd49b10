//! Keeps credentials and query strings out of logs and error envelopes.

use std::fmt::Write as _;
use url::Url;

/// `scheme://host[:port]/path` of `url`, without userinfo, query or fragment.
#[must_use]
pub fn loggable_url(url: &Url) -> String {
    let mut shown = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        let _ = write!(shown, ":{port}");
    }
    shown.push_str(url.path());
    shown
}

/// Message for a failed request; reqwest's own rendering would embed the full URL.
#[must_use]
pub fn transport_message(err: reqwest::Error) -> String {
    match err.url().map(loggable_url) {
        Some(url) => format!("{} ({url})", err.without_url()),
        None => err.to_string(),
    }
}
