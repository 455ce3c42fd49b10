//! JSON clients for the Toleno Network REST API.
//!
//! Two trust levels are provided:
//! - [`PublicClient`]: anonymous, read-only, never classifies HTTP status codes
//! - [`AuthenticatedClient`]: bearer-token client that turns `>= 400` responses into
//!   [`ClientError::Remote`]
//!
//! Both clients perform exactly one request per call and keep no per-call state, so a single
//! instance can be shared by any number of concurrent tool invocations.

pub mod authenticated;
pub mod credential;
pub mod error;
pub mod public;
pub mod redact;
pub mod transport;

pub use authenticated::AuthenticatedClient;
pub use credential::Credential;
pub use error::{ClientError, Result};
pub use public::PublicClient;
pub use reqwest::Method;
pub use transport::{DEFAULT_BASE_URL, RequestSpec, USER_AGENT};
