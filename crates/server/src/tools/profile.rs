//! Account profile and the combined daily check-in.

use crate::envelope::ToolOutput;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::{first_truthy, is_truthy, no_arguments};
use futures::FutureExt as _;
use futures::future::BoxFuture;
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use toleno_api_client::{AuthenticatedClient, Method};
use tracing::debug;

/// Profile fields copied into the summary when the API reports them.
const SUMMARY_USER_FIELDS: &[&str] = &[
    "username",
    "token_balance",
    "total_mined",
    "mining_power",
    "current_streak",
    "referral_count",
    "active_referral_count",
];

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId::GetProfile,
            description: "Get the full profile of the authenticated Toleno user. Returns username, display name, email, token balance, total tokens mined, mining power multiplier, referral count, active referral count, wallet address, KYC status, phone verification status, premium subscription status, current daily streak, and account creation date.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Authenticated(get_profile),
        },
        ToolDef {
            id: ToolId::DailySummary,
            description: "Get a comprehensive daily summary for the authenticated Toleno user. Combines profile data and mining status into a single overview: token balance, total mined, mining power, daily streak, referral stats, and current mining session details (active/completed/claimable, tokens mined, remaining time). Perfect for a quick daily check-in.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Authenticated(daily_summary),
        },
    ]
}

fn get_profile<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.get("/auth/profile").await?)) }.boxed()
}

/// Profile is required; mining status is best-effort and falls back to an idle session.
fn daily_summary<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move {
        let (profile, mining) =
            tokio::join!(client.get("/auth/profile"), client.get("/mining/status"));
        let profile = profile?;
        let mining = mining
            .inspect_err(|err| debug!(error = %err, "mining status unavailable, using defaults"))
            .ok();

        Ok(ToolOutput::shaped(json!({
            "success": true,
            "summary": build_summary(&profile, mining.as_ref()),
        })))
    }
    .boxed()
}

fn build_summary(profile: &Value, mining: Option<&Value>) -> Value {
    let user = first_truthy([
        profile.pointer("/data/user"),
        profile.get("user"),
        profile.get("data"),
    ]);

    let mut summary = JsonObject::new();
    for &field in SUMMARY_USER_FIELDS {
        if let Some(v) = user.and_then(|u| u.get(field)) {
            summary.insert(field.to_string(), v.clone());
        }
    }

    let session = mining.and_then(|m| first_truthy([m.get("data"), Some(m)]));
    let pick = |key: &str, default: Value| {
        session
            .and_then(|s| s.get(key))
            .filter(|v| is_truthy(Some(*v)))
            .cloned()
            .unwrap_or(default)
    };
    summary.insert(
        "mining".to_string(),
        json!({
            "is_active": pick("is_active", json!(false)),
            "is_completed": pick("is_completed", json!(false)),
            "can_claim": pick("can_claim", json!(false)),
            "tokens_mined": pick("tokens_mined", json!(0)),
            "total_tokens": pick("total_tokens", json!(0)),
            "remaining_time_ms": pick("remaining_time_ms", json!(0)),
        }),
    );

    Value::Object(summary)
}

#[cfg(test)]
mod tests {
    use super::build_summary;
    use crate::config::ServerConfig;
    use crate::dispatcher::Dispatcher;
    use crate::registry::Registry;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::json;
    use toleno_test_support::MockApi;

    #[test]
    fn summary_reads_nested_user_and_omits_absent_fields() {
        let profile = json!({"data": {"user": {"username": "alice", "token_balance": 12.5}}});
        let mining = json!({"data": {"is_active": true, "tokens_mined": 3.2}});
        assert_eq!(
            build_summary(&profile, Some(&mining)),
            json!({
                "username": "alice",
                "token_balance": 12.5,
                "mining": {
                    "is_active": true,
                    "is_completed": false,
                    "can_claim": false,
                    "tokens_mined": 3.2,
                    "total_tokens": 0,
                    "remaining_time_ms": 0,
                },
            })
        );
    }

    #[test]
    fn summary_falls_back_to_flat_payloads() {
        let profile = json!({"user": {"username": "bob", "current_streak": null}});
        let mining = json!({"can_claim": true});
        let summary = build_summary(&profile, Some(&mining));
        assert_eq!(summary["username"], json!("bob"));
        assert_eq!(summary["current_streak"], json!(null));
        assert_eq!(summary["mining"]["can_claim"], json!(true));

        let flat = build_summary(&json!({"data": {"referral_count": 4}}), None);
        assert_eq!(flat["referral_count"], json!(4));
        assert_eq!(flat["mining"]["is_active"], json!(false));
    }

    #[tokio::test]
    async fn daily_summary_tolerates_mining_failure() {
        let api = MockApi::start(
            Router::new()
                .route(
                    "/auth/profile",
                    get(|| async {
                        axum::Json(json!({"data": {"user": {"username": "alice"}}}))
                    }),
                )
                .route(
                    "/mining/status",
                    get(|| async {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            axum::Json(json!({"message": "boom"})),
                        )
                    }),
                ),
        )
        .await
        .expect("mock api");

        let dispatcher = Dispatcher::new(
            Registry::standard().expect("registry"),
            ServerConfig::new(api.base_url(), Some("tlno_test".into())),
        )
        .expect("dispatcher");

        let env = dispatcher.dispatch("daily_summary", None).await;
        assert_eq!(
            env.to_json(),
            json!({
                "success": true,
                "summary": {
                    "username": "alice",
                    "mining": {
                        "is_active": false,
                        "is_completed": false,
                        "can_claim": false,
                        "tokens_mined": 0,
                        "total_tokens": 0,
                        "remaining_time_ms": 0,
                    },
                },
            })
        );
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn daily_summary_fails_when_profile_fails() {
        let api = MockApi::start(
            Router::new()
                .route(
                    "/auth/profile",
                    get(|| async {
                        (
                            StatusCode::UNAUTHORIZED,
                            axum::Json(json!({"message": "Invalid API key"})),
                        )
                    }),
                )
                .route(
                    "/mining/status",
                    get(|| async { axum::Json(json!({"data": {}})) }),
                ),
        )
        .await
        .expect("mock api");

        let dispatcher = Dispatcher::new(
            Registry::standard().expect("registry"),
            ServerConfig::new(api.base_url(), Some("tlno_test".into())),
        )
        .expect("dispatcher");

        let env = dispatcher.dispatch("daily_summary", None).await;
        let v = env.to_json();
        assert_eq!(v["success"], json!(false));
        assert_eq!(v["error"], json!("Invalid API key"));
        assert_eq!(v["status"], json!(401));
    }
}
