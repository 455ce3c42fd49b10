//! Read-only wallet view.
//!
//! Address updates, removal and network changes are not exposed: changing withdrawal
//! destinations goes through the mobile app's confirmation flow only.

use crate::envelope::ToolOutput;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::no_arguments;
use futures::FutureExt as _;
use futures::future::BoxFuture;
use rmcp::model::JsonObject;
use toleno_api_client::{AuthenticatedClient, Method};

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![ToolDef {
        id: ToolId::GetWalletInfo,
        description: "Get comprehensive wallet information for the authenticated Toleno user. Returns the available (withdrawable) token balance, locked mining balance, total tokens ever mined, the connected wallet address and preferred network (Solana), withdrawal statistics (today's total, pending count, completed count), and the minimum/maximum withdrawal amounts.",
        input_schema: no_arguments(),
        method: Some(Method::GET),
        handler: Handler::Authenticated(get_wallet_info),
    }]
}

fn get_wallet_info<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.get("/wallet/info").await?)) }.boxed()
}
