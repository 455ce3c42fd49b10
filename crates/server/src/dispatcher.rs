//! Routes tool calls to handlers and collapses every outcome into a [`ResponseEnvelope`].

use crate::config::ServerConfig;
use crate::envelope::{ResponseEnvelope, ToolOutput};
use crate::error::{ConfigError, DispatchError};
use crate::registry::{Access, Handler, Registry};
use rmcp::model::JsonObject;
use std::sync::Arc;
use toleno_api_client::{AuthenticatedClient, PublicClient};
use tracing::{Instrument as _, debug, info, info_span, warn};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    public: PublicClient,
    /// Present iff an API key was configured.
    authenticated: Option<AuthenticatedClient>,
}

impl Dispatcher {
    /// Build both clients up front from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Client`] if the base URL is invalid or the key cannot be used as
    /// a header value.
    pub fn new(registry: Registry, config: ServerConfig) -> Result<Self, ConfigError> {
        let public = PublicClient::new(&config.api_url)?;
        let authenticated = match config.credential {
            Some(credential) => Some(AuthenticatedClient::new(
                &config.api_url,
                Some(credential),
            )?),
            None => None,
        };
        Ok(Self::from_parts(registry, public, authenticated))
    }

    #[must_use]
    pub fn from_parts(
        registry: Registry,
        public: PublicClient,
        authenticated: Option<AuthenticatedClient>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            public,
            authenticated,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.authenticated.is_some()
    }

    /// Run one tool call.
    ///
    /// Unknown names and missing credentials are rejected before any client is touched.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] describing why the call failed.
    pub async fn call(&self, name: &str, args: &JsonObject) -> Result<ToolOutput, DispatchError> {
        let tool = self
            .registry
            .lookup(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        if tool.access() == Access::Authenticated && self.authenticated.is_none() {
            return Err(DispatchError::CredentialMissing);
        }

        let result = match tool.handler() {
            Handler::Static(handler) => handler(args),
            Handler::Public(handler) => handler(&self.public, args).await,
            Handler::Authenticated(handler) => {
                let Some(client) = self.authenticated.as_ref() else {
                    return Err(DispatchError::CredentialMissing);
                };
                handler(client, args).await
            }
        };
        result.map_err(DispatchError::from)
    }

    /// Run one tool call and always produce an envelope.
    pub async fn dispatch(&self, name: &str, args: Option<JsonObject>) -> ResponseEnvelope {
        let args = args.unwrap_or_default();
        let span = info_span!("tool_call", tool = %name);
        async {
            match self.call(name, &args).await {
                Ok(output) => {
                    debug!("tool call succeeded");
                    ResponseEnvelope::success(output)
                }
                Err(err) => {
                    match &err {
                        DispatchError::UnknownTool(_) => warn!("unknown tool requested"),
                        DispatchError::CredentialMissing => {
                            warn!("authenticated tool called without TOLENO_API_KEY");
                        }
                        DispatchError::Tool(e) => {
                            info!(status = e.status(), error = %e, "tool call failed");
                        }
                    }
                    ResponseEnvelope::from(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
