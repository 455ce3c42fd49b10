//! Referral program and invite link generation.

use crate::envelope::ToolOutput;
use crate::error::ToolError;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::{first_truthy, no_arguments};
use futures::FutureExt as _;
use futures::future::BoxFuture;
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use toleno_api_client::{AuthenticatedClient, Method};
use url::Url;

const WEBSITE: &str = "https://tolenocoin.com";

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId::GetReferralInfo,
            description: "Get referral program details for the authenticated Toleno user. Returns the referral code (same as username), total number of users referred, number of currently active mining referrals, the referral bonus percentage applied to earnings, and the shareable referral link.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Authenticated(get_referral_info),
        },
        ToolDef {
            id: ToolId::GenerateInviteLink,
            description: "Generate a shareable invite link and ready-to-send invite messages (in English and Turkish) for the authenticated Toleno user. Use this when the user wants to invite friends or share their referral link.",
            input_schema: no_arguments(),
            method: Some(Method::GET),
            handler: Handler::Authenticated(generate_invite_link),
        },
    ]
}

fn get_referral_info<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move { Ok(ToolOutput::Payload(client.get("/referral/info").await?)) }.boxed()
}

fn generate_invite_link<'a>(
    client: &'a AuthenticatedClient,
    _args: &'a JsonObject,
) -> BoxFuture<'a, HandlerResult> {
    async move {
        let info = client.get("/referral/info").await?;
        invite_from_referral_info(&info).map(ToolOutput::shaped)
    }
    .boxed()
}

fn invite_from_referral_info(info: &Value) -> Result<Value, ToolError> {
    let code = first_truthy([info.pointer("/data/referral_code"), info.get("referral_code")])
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .ok_or_else(|| ToolError::Handler("Referral code not found in API response".into()))?;

    let invite_link = match first_truthy([
        info.pointer("/data/referral_link"),
        info.get("referral_link"),
    ])
    .and_then(Value::as_str)
    {
        Some(link) => link.to_string(),
        None => Url::parse_with_params(WEBSITE, &[("ref", code.as_str())])
            .map_err(|e| ToolError::Handler(format!("Failed to build invite link: {e}")))?
            .to_string(),
    };

    Ok(json!({
        "success": true,
        "referral_code": code,
        "invite_link": invite_link,
        "share_message": format!(
            "Join Toleno Network and mine TOL tokens with AI! Use my referral code \"{code}\" when you sign up — we both earn bonus mining power. {invite_link}"
        ),
        "share_message_tr": format!(
            "Toleno Network'e katıl, telefonundan TOLENO token kazan! Kayıt olurken \"{code}\" referans kodumu kullan, ikimiz de bonus madencilik gücü kazanalım: {invite_link}"
        ),
    }))
}

#[cfg(test)]
mod tests {
    use super::invite_from_referral_info;
    use crate::config::ServerConfig;
    use crate::dispatcher::Dispatcher;
    use crate::registry::Registry;
    use axum::Router;
    use axum::routing::get;
    use serde_json::json;
    use toleno_test_support::MockApi;

    #[test]
    fn invite_link_is_derived_from_code() {
        let out = invite_from_referral_info(&json!({"data": {"referral_code": "alice"}}))
            .expect("invite");
        assert_eq!(out["referral_code"], json!("alice"));
        assert_eq!(out["invite_link"], json!("https://tolenocoin.com/?ref=alice"));
        let msg = out["share_message"].as_str().expect("message");
        assert!(msg.starts_with(
            "Join Toleno Network and mine TOL tokens with AI! Use my referral code \"alice\" when you sign up — we both earn bonus mining power."
        ));
        assert!(msg.ends_with("https://tolenocoin.com/?ref=alice"));
        assert!(out["share_message_tr"].is_string());
    }

    #[test]
    fn api_supplied_link_wins() {
        let out = invite_from_referral_info(&json!({
            "referral_code": "bob",
            "referral_link": "https://tolenocoin.com/r/bob",
        }))
        .expect("invite");
        assert_eq!(out["invite_link"], json!("https://tolenocoin.com/r/bob"));
    }

    #[test]
    fn codes_are_query_encoded() {
        let out = invite_from_referral_info(&json!({"referral_code": "a b&c"})).expect("invite");
        assert_eq!(
            out["invite_link"],
            json!("https://tolenocoin.com/?ref=a+b%26c")
        );
    }

    #[test]
    fn missing_code_is_a_handler_error() {
        let err = invite_from_referral_info(&json!({"data": {"referral_code": ""}})).unwrap_err();
        assert_eq!(err.to_string(), "Referral code not found in API response");
        assert_eq!(err.status(), 500);
    }

    #[tokio::test]
    async fn generate_invite_link_end_to_end() {
        let api = MockApi::start(Router::new().route(
            "/referral/info",
            get(|| async { axum::Json(json!({"success": true, "data": {"referral_code": "zed"}})) }),
        ))
        .await
        .expect("mock api");

        let dispatcher = Dispatcher::new(
            Registry::standard().expect("registry"),
            ServerConfig::new(api.base_url(), Some("tlno_test".into())),
        )
        .expect("dispatcher");

        let v = dispatcher.dispatch("generate_invite_link", None).await.to_json();
        assert_eq!(v["success"], json!(true));
        assert_eq!(v["referral_code"], json!("zed"));
        assert!(v.get("data").is_none());
        assert_eq!(api.last_request().map(|r| r.method), Some("GET".to_string()));
    }
}
