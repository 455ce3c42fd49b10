//! Error types for the MCP server.

use crate::registry::Access;
use serde_json::Value;
use thiserror::Error;
use toleno_api_client::ClientError;

/// Message returned when an authenticated tool is called without a configured API key.
pub const CREDENTIAL_MISSING_MESSAGE: &str = "TOLENO_API_KEY is not configured. Go to Toleno App → Settings → API Keys → Create New Key, then add it to your MCP config.";

/// Status reported in failure envelopes when no HTTP status is known.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Startup configuration errors (invalid base URL, registry conflicts).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Duplicate tool name '{0}'")]
    DuplicateTool(&'static str),

    #[error("Tool '{tool}' is registered as {access} but its handler requires {required}")]
    AccessMismatch {
        tool: &'static str,
        access: Access,
        required: Access,
    },

    #[error("Invalid inputSchema for tool '{0}': inputSchema must be a JSON object")]
    InvalidSchema(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Failure raised while a handler runs.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Transport, parse, or remote failure from the API client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Handler logic failure (bad arguments, unexpected payload shape).
    #[error("{0}")]
    Handler(String),
}

impl ToolError {
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Client(e) => e.status().unwrap_or(DEFAULT_ERROR_STATUS),
            Self::Handler(_) => DEFAULT_ERROR_STATUS,
        }
    }

    #[must_use]
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Client(e) => e.details().cloned(),
            Self::Handler(_) => None,
        }
    }
}

/// Every way a tool call can fail before it is collapsed into an envelope.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{}", CREDENTIAL_MISSING_MESSAGE)]
    CredentialMissing,

    #[error(transparent)]
    Tool(#[from] ToolError),
}
