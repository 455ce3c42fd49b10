//! MCP tool annotations derived from what a tool does on the wire.

use rmcp::model::ToolAnnotations;
use toleno_api_client::Method;

/// Annotations for a tool backed by an HTTP request with `method`, or by static content when
/// `method` is `None`.
///
/// Network tools always set `openWorldHint`; static tools never leave the process.
#[must_use]
pub fn annotations_for(method: Option<&Method>) -> ToolAnnotations {
    let Some(method) = method else {
        return ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint: Some(false),
        };
    };

    if method == Method::GET {
        return ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint: Some(true),
        };
    }

    if method == Method::POST {
        return ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(false),
            idempotent_hint: Some(false),
            open_world_hint: Some(true),
        };
    }

    ToolAnnotations {
        title: None,
        read_only_hint: None,
        destructive_hint: None,
        idempotent_hint: None,
        open_world_hint: Some(true),
    }
}
