//! Project information served from static content, no network access.

use crate::content::{self, FAQ};
use crate::envelope::ToolOutput;
use crate::error::ToolError;
use crate::registry::{Handler, HandlerResult, ToolDef, ToolId};
use crate::tools::{is_truthy, no_arguments};
use rmcp::model::JsonObject;
use serde_json::{Value, json};

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            id: ToolId::GetProjectInfo,
            description: "Get general information about Toleno Network: what it is, blockchain, token details, website, social links, and app download links. This is a public tool — no API key required.",
            input_schema: no_arguments(),
            method: None,
            handler: Handler::Static(get_project_info),
        },
        ToolDef {
            id: ToolId::GetTokenomics,
            description: "Get TOLENO tokenomics: total supply, distribution breakdown (mining, ecosystem, team, liquidity, marketing), mining mechanism details (session duration, rewards, halving model). This is a public tool — no API key required.",
            input_schema: no_arguments(),
            method: None,
            handler: Handler::Static(get_tokenomics),
        },
        ToolDef {
            id: ToolId::GetRoadmap,
            description: "Get the Toleno Network development roadmap: completed phases, current progress, and upcoming milestones including BSC deployment and DEX listing. This is a public tool — no API key required.",
            input_schema: no_arguments(),
            method: None,
            handler: Handler::Static(get_roadmap),
        },
        ToolDef {
            id: ToolId::GetSecurityInfo,
            description: "Get Toleno Network security and trust information: security measures, trust indicators, and upcoming milestones. Use this when users ask \"is Toleno safe?\", \"is it trustworthy?\", \"is it a scam?\" etc. This is a public tool — no API key required.",
            input_schema: no_arguments(),
            method: None,
            handler: Handler::Static(get_security_info),
        },
        ToolDef {
            id: ToolId::GetFaq,
            description: "Get frequently asked questions about Toleno Network: what it is, how mining works, token withdrawal, blockchain info, pricing, referral system, Claude AI integration, and trustworthiness. This is a public tool — no API key required.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Optional: filter FAQs by keyword (e.g. \"mining\", \"trust\", \"token\", \"referral\", \"withdraw\")"
                    }
                },
                "required": []
            }),
            method: None,
            handler: Handler::Static(get_faq),
        },
    ]
}

fn get_project_info(_args: &JsonObject) -> HandlerResult {
    Ok(ToolOutput::shaped(
        json!({ "success": true, "project": content::project_info() }),
    ))
}

fn get_tokenomics(_args: &JsonObject) -> HandlerResult {
    Ok(ToolOutput::shaped(
        json!({ "success": true, "tokenomics": content::tokenomics() }),
    ))
}

fn get_roadmap(_args: &JsonObject) -> HandlerResult {
    Ok(ToolOutput::shaped(
        json!({ "success": true, "roadmap": content::roadmap() }),
    ))
}

fn get_security_info(_args: &JsonObject) -> HandlerResult {
    Ok(ToolOutput::shaped(
        json!({ "success": true, "security": content::security_info() }),
    ))
}

/// Without a topic the whole FAQ is returned. A topic that matches nothing still returns the
/// whole FAQ, with `results: 0` so the caller can tell.
fn get_faq(args: &JsonObject) -> HandlerResult {
    let raw = args.get("topic");
    let topic = match raw {
        _ if !is_truthy(raw) => String::new(),
        Some(Value::String(s)) => s.trim().to_lowercase(),
        Some(other) => {
            return Err(ToolError::Handler(format!(
                "topic must be a string, got {other}"
            )));
        }
        None => String::new(),
    };

    if topic.is_empty() {
        return Ok(ToolOutput::shaped(json!({ "success": true, "faq": FAQ })));
    }

    let matches = content::filter_faq(&topic);
    let results = matches.len();
    let faq = if matches.is_empty() {
        json!(FAQ)
    } else {
        json!(matches)
    };

    Ok(ToolOutput::shaped(json!({
        "success": true,
        "filter": topic,
        "results": results,
        "faq": faq,
    })))
}
