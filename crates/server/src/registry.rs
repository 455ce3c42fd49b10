//! Static tool catalogue: names, schemas, access levels and handlers.

use crate::envelope::ToolOutput;
use crate::error::{ConfigError, ToolError};
use futures::future::BoxFuture;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use toleno_api_client::{AuthenticatedClient, Method, PublicClient};
use tracing::debug;

/// Every tool this server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    GetGlobalStats,
    GetLeaderboard,
    GetMiningStatus,
    StartMining,
    ClaimMining,
    GetWalletInfo,
    GetProfile,
    DailySummary,
    GetReferralInfo,
    GenerateInviteLink,
    GetProjectInfo,
    GetTokenomics,
    GetRoadmap,
    GetSecurityInfo,
    GetFaq,
}

impl ToolId {
    /// Wire name used in `tools/list` and `tools/call`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetGlobalStats => "get_global_stats",
            Self::GetLeaderboard => "get_leaderboard",
            Self::GetMiningStatus => "get_mining_status",
            Self::StartMining => "start_mining",
            Self::ClaimMining => "claim_mining",
            Self::GetWalletInfo => "get_wallet_info",
            Self::GetProfile => "get_profile",
            Self::DailySummary => "daily_summary",
            Self::GetReferralInfo => "get_referral_info",
            Self::GenerateInviteLink => "generate_invite_link",
            Self::GetProjectInfo => "get_project_info",
            Self::GetTokenomics => "get_tokenomics",
            Self::GetRoadmap => "get_roadmap",
            Self::GetSecurityInfo => "get_security_info",
            Self::GetFaq => "get_faq",
        }
    }

    /// Access level, derived from membership in [`PUBLIC_TOOLS`].
    #[must_use]
    pub fn access(self) -> Access {
        if PUBLIC_TOOLS.contains(&self) {
            Access::Public
        } else {
            Access::Authenticated
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tools callable without an API key. Everything else requires one.
pub const PUBLIC_TOOLS: &[ToolId] = &[
    ToolId::GetGlobalStats,
    ToolId::GetLeaderboard,
    ToolId::GetProjectInfo,
    ToolId::GetTokenomics,
    ToolId::GetRoadmap,
    ToolId::GetSecurityInfo,
    ToolId::GetFaq,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("PUBLIC"),
            Self::Authenticated => f.write_str("AUTHENTICATED"),
        }
    }
}

pub type HandlerResult = Result<ToolOutput, ToolError>;

pub type StaticHandler = fn(&JsonObject) -> HandlerResult;
pub type PublicHandler =
    for<'a> fn(&'a PublicClient, &'a JsonObject) -> BoxFuture<'a, HandlerResult>;
pub type AuthenticatedHandler =
    for<'a> fn(&'a AuthenticatedClient, &'a JsonObject) -> BoxFuture<'a, HandlerResult>;

/// A handler together with the client it needs.
#[derive(Clone, Copy)]
pub enum Handler {
    /// No network access.
    Static(StaticHandler),
    Public(PublicHandler),
    Authenticated(AuthenticatedHandler),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("Handler::Static"),
            Self::Public(_) => f.write_str("Handler::Public"),
            Self::Authenticated(_) => f.write_str("Handler::Authenticated"),
        }
    }
}

/// One tool as declared by a domain module, before validation.
#[derive(Debug, Clone)]
pub struct ToolDef {
    pub id: ToolId,
    pub description: &'static str,
    pub input_schema: Value,
    /// HTTP method of the backing request; `None` for static tools.
    pub method: Option<Method>,
    pub handler: Handler,
}

/// What `tools/list` advertises for a tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub description: &'static str,
    pub input_schema: Arc<JsonObject>,
    pub access: Access,
}

impl ToolDescriptor {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

#[derive(Debug, Clone)]
pub struct RegisteredTool {
    descriptor: ToolDescriptor,
    method: Option<Method>,
    handler: Handler,
}

impl RegisteredTool {
    #[must_use]
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn access(&self) -> Access {
        self.descriptor.access
    }

    #[must_use]
    pub fn handler(&self) -> Handler {
        self.handler
    }

    fn to_mcp_tool(&self) -> Tool {
        let mut tool = Tool::new(
            self.descriptor.name(),
            self.descriptor.description,
            self.descriptor.input_schema.clone(),
        );
        tool.annotations = Some(crate::semantics::annotations_for(self.method.as_ref()));
        tool
    }
}

/// Immutable name → tool table, built once at startup.
#[derive(Debug)]
pub struct Registry {
    tools: Vec<RegisteredTool>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Validate and index tool definitions, keeping their order for listing.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateTool`] if a name is registered twice
    /// - [`ConfigError::InvalidSchema`] if an input schema is not a JSON object
    /// - [`ConfigError::AccessMismatch`] if a handler needs a client the tool's access level
    ///   does not provide (or a public tool is bound to the authenticated client)
    pub fn build(defs: impl IntoIterator<Item = ToolDef>) -> Result<Self, ConfigError> {
        let mut tools = Vec::new();
        let mut by_name = HashMap::new();

        for def in defs {
            let name = def.id.name();
            if by_name.contains_key(name) {
                return Err(ConfigError::DuplicateTool(name));
            }

            let Value::Object(schema) = def.input_schema else {
                return Err(ConfigError::InvalidSchema(name));
            };

            let access = def.id.access();
            let required = match def.handler {
                Handler::Static(_) => None,
                Handler::Public(_) => Some(Access::Public),
                Handler::Authenticated(_) => Some(Access::Authenticated),
            };
            if let Some(required) = required
                && required != access
            {
                return Err(ConfigError::AccessMismatch {
                    tool: name,
                    access,
                    required,
                });
            }

            by_name.insert(name, tools.len());
            tools.push(RegisteredTool {
                descriptor: ToolDescriptor {
                    id: def.id,
                    description: def.description,
                    input_schema: Arc::new(schema),
                    access,
                },
                method: def.method,
                handler: def.handler,
            });
        }

        debug!(tools = tools.len(), "tool registry built");
        Ok(Self { tools, by_name })
    }

    /// The full Toleno catalogue.
    ///
    /// # Errors
    ///
    /// Only if the built-in definitions are inconsistent; see [`Registry::build`].
    pub fn standard() -> Result<Self, ConfigError> {
        Self::build(crate::tools::all())
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RegisteredTool> {
        self.by_name.get(name).map(|&idx| &self.tools[idx])
    }

    /// Every registered tool in registration order, authenticated ones included.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(RegisteredTool::descriptor)
    }

    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(RegisteredTool::to_mcp_tool).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
