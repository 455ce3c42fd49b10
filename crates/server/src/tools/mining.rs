//! Mining session control for the authenticated user.

use crate::envelope::ToolOutput;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::no_arguments;
use futures::FutureExt as _;
use futures::future::BoxFuture;
use rmcp::model::JsonObject;
use toleno_api_client::{AuthenticatedClient, Method};

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId::GetMiningStatus,
            description: "Get the current mining session status for the authenticated Toleno user. Returns whether a session is active or completed, start/end times, elapsed and remaining time in milliseconds, tokens mined so far, total tokens to be earned, and whether rewards are ready to claim.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Authenticated(get_mining_status),
        },
        ToolDef {
            id: ToolId::StartMining,
            description: "Start a new 24-hour mining session for the authenticated Toleno user. Can only be called when no active session exists. Returns the session details including start/end times and expected token earnings.",
            input_schema: no_arguments(),
            method: Some(Method::POST),
            handler: Handler::Authenticated(start_mining),
        },
        ToolDef {
            id: ToolId::ClaimMining,
            description: "Claim mining rewards after a completed 24-hour session. Can only be called when a session has ended and rewards are ready to collect. Returns the amount of tokens claimed and the new balance.",
            input_schema: no_arguments(),
            method: Some(Method::POST),
            handler: Handler::Authenticated(claim_mining),
        },
    ]
}

fn get_mining_status<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.get("/mining/status").await?)) }.boxed()
}

fn start_mining<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.post("/mining/start", None).await?)) }.boxed()
}

fn claim_mining<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.post("/mining/claim", None).await?)) }.boxed()
}
