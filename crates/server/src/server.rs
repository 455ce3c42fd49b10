//! MCP surface: `tools/list` and `tools/call` over stdio.

use crate::dispatcher::Dispatcher;
use anyhow::Context as _;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler, ServiceExt as _};
use tracing::info;

pub const SERVER_NAME: &str = "Toleno Network";

const INSTRUCTIONS: &str = "Tools for the Toleno Network mobile mining platform. Public tools (global stats, leaderboard, project info, tokenomics, roadmap, security, FAQ) work without an API key. Account tools (mining, wallet, profile, referrals) need TOLENO_API_KEY.";

#[derive(Debug, Clone)]
pub struct TolenoServer {
    dispatcher: Dispatcher,
}

impl TolenoServer {
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Serve MCP on stdin/stdout until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the MCP handshake fails or the service task aborts.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        info!(
            tools = self.dispatcher.registry().len(),
            authenticated = self.dispatcher.has_credential(),
            "serving MCP over stdio"
        );
        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .context("start MCP stdio service")?;
        let reason = service.waiting().await.context("MCP service task failed")?;
        info!(?reason, "MCP session ended");
        Ok(())
    }
}

impl ServerHandler for TolenoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(
            self.dispatcher.registry().list_tools(),
        ))
    }

    /// Tool failures are reported in-band (`isError`), never as JSON-RPC errors.
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let envelope = self
            .dispatcher
            .dispatch(&request.name, request.arguments)
            .await;
        Ok(envelope.into_call_tool_result())
    }
}
