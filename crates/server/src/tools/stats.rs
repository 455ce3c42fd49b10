//! Public network statistics.

use crate::envelope::ToolOutput;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::no_arguments;
use futures::FutureExt as _;
use futures::future::BoxFuture;
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use toleno_api_client::{Method, PublicClient};

const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;
const MAX_LEADERBOARD_LIMIT: u32 = 50;

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId::GetGlobalStats,
            description: "Get global Toleno Network statistics: total tokens mined across all users and total registered user count. This is a public endpoint — no API key required.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Public(get_global_stats),
        },
        ToolDef {
            id: ToolId::GetLeaderboard,
            description: "Get the TOP 50 leaderboard of Toleno users ranked by token balance. Returns username, display name, token balance, mining power, and rank for each user. This is a public endpoint and requires no API key.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "number",
                        "description": "Number of users to return (default: 10, max: 50)"
                    }
                },
                "required": []
            }),
            method: Some(Method::GET),
            handler: Handler::Public(get_leaderboard),
        },
    ]
}

fn get_global_stats<'a>(
    client: &'a PublicClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move {
        let payload = client.get("/stats/global-mined").await?;
        Ok(ToolOutput::Payload(payload))
    }
    .boxed()
}

fn get_leaderboard<'a>(
    client: &'a PublicClient,
    args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move {
        let limit = leaderboard_limit(args.get("limit"));
        let payload = client.get(&format!("/auth/top-users?limit={limit}")).await?;
        Ok(ToolOutput::Payload(payload))
    }
    .boxed()
}

/// Integer part of `limit`, capped at 50. Missing, non-numeric or below-one values fall back to
/// the default of 10. Numeric strings are accepted.
fn leaderboard_limit(raw: Option<&Value>) -> u32 {
    let requested = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match requested.map(f64::trunc) {
        Some(n) if n.is_finite() && n >= 1.0 => {
            if n >= f64::from(MAX_LEADERBOARD_LIMIT) {
                MAX_LEADERBOARD_LIMIT
            } else {
                // 1 <= n < 50, exact
                n as u32
            }
        }
        _ => DEFAULT_LEADERBOARD_LIMIT,
    }
}
