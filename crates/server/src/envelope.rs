//! The uniform response envelope returned for every tool call.

use crate::error::DispatchError;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::{Value, json};

/// What a handler produced on success.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Raw API payload; merged into `{"success": true, ...}` by the dispatcher.
    Payload(Value),
    /// Result already shaped as an envelope; passed through untouched.
    Envelope(JsonObject),
}

impl ToolOutput {
    /// Wrap a handler-built JSON object as a pre-shaped envelope.
    ///
    /// Non-object values cannot be envelopes and are treated as raw payloads.
    #[must_use]
    pub fn shaped(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Envelope(map),
            other => Self::Payload(other),
        }
    }
}

/// Status and structured details attached to handler failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub status: u16,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Success(JsonObject),
    Failure {
        error: String,
        /// `None` for failures that happen before a handler runs (unknown tool, missing key).
        diagnostics: Option<Diagnostics>,
    },
}

impl ResponseEnvelope {
    #[must_use]
    pub fn success(output: ToolOutput) -> Self {
        match output {
            ToolOutput::Envelope(map) => Self::Success(map),
            ToolOutput::Payload(Value::Object(fields)) => {
                let mut map = JsonObject::new();
                map.insert("success".to_string(), Value::Bool(true));
                map.extend(fields);
                Self::Success(map)
            }
            ToolOutput::Payload(other) => {
                let mut map = JsonObject::new();
                map.insert("success".to_string(), Value::Bool(true));
                map.insert("data".to_string(), other);
                Self::Success(map)
            }
        }
    }

    /// `false` for failures and for payloads that themselves report `"success": false`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Success(map) => map.get("success") != Some(&Value::Bool(false)),
            Self::Failure { .. } => false,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(map) => Value::Object(map.clone()),
            Self::Failure {
                error,
                diagnostics: None,
            } => json!({ "success": false, "error": error }),
            Self::Failure {
                error,
                diagnostics: Some(d),
            } => json!({
                "success": false,
                "error": error,
                "status": d.status,
                "details": d.details.clone().unwrap_or(Value::Null),
            }),
        }
    }

    /// Render as an MCP tool result: one pretty-printed JSON text block, `isError` set iff the
    /// envelope is not successful.
    #[must_use]
    pub fn into_call_tool_result(self) -> CallToolResult {
        let value = self.to_json();
        let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        if self.is_success() {
            CallToolResult::success(vec![Content::text(text)])
        } else {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}

impl From<DispatchError> for ResponseEnvelope {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::UnknownTool(_) | DispatchError::CredentialMissing => Self::Failure {
                error: err.to_string(),
                diagnostics: None,
            },
            DispatchError::Tool(e) => Self::Failure {
                error: e.to_string(),
                diagnostics: Some(Diagnostics {
                    status: e.status(),
                    details: e.details(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use toleno_api_client::ClientError;

    #[test]
    fn payload_objects_are_merged_under_success_true() {
        let env = ResponseEnvelope::success(ToolOutput::Payload(json!({"data": {"total": 5}})));
        assert_eq!(env.to_json(), json!({"success": true, "data": {"total": 5}}));
        assert!(env.is_success());
    }

    #[test]
    fn payload_fields_override_the_success_flag() {
        let env = ResponseEnvelope::success(ToolOutput::Payload(
            json!({"success": false, "message": "No active session"}),
        ));
        assert_eq!(
            env.to_json(),
            json!({"success": false, "message": "No active session"})
        );
        assert!(!env.is_success());
    }

    #[test]
    fn non_object_payloads_are_placed_under_data() {
        let env = ResponseEnvelope::success(ToolOutput::Payload(json!([1, 2])));
        assert_eq!(env.to_json(), json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn shaped_envelopes_pass_through() {
        let env = ResponseEnvelope::success(ToolOutput::shaped(
            json!({"success": true, "roadmap": []}),
        ));
        assert_eq!(env.to_json(), json!({"success": true, "roadmap": []}));
    }

    #[test]
    fn pre_handler_failures_have_no_status_or_details() {
        let env = ResponseEnvelope::from(DispatchError::UnknownTool("ghost_tool".into()));
        assert_eq!(
            env.to_json(),
            json!({"success": false, "error": "Unknown tool: ghost_tool"})
        );
    }

    #[test]
    fn handler_failures_carry_status_and_null_details() {
        let env = ResponseEnvelope::from(DispatchError::Tool(ToolError::Client(
            ClientError::Parse {
                snippet: "<html>".into(),
            },
        )));
        assert_eq!(
            env.to_json(),
            json!({
                "success": false,
                "error": "Failed to parse API response: <html>",
                "status": 500,
                "details": null,
            })
        );
    }

    #[test]
    fn call_tool_result_flags_errors_and_pretty_prints() {
        let result = ResponseEnvelope::from(DispatchError::CredentialMissing).into_call_tool_result();
        assert_eq!(result.is_error, Some(true));

        let v = serde_json::to_value(&result).expect("CallToolResult serializes");
        let text = v["content"][0]["text"].as_str().expect("content[0].text");
        assert!(text.contains("\n  \"success\": false"));

        let ok = ResponseEnvelope::success(ToolOutput::Payload(json!({}))).into_call_tool_result();
        assert_eq!(ok.is_error, Some(false));
    }

    #[test]
    fn success_leads_the_serialized_envelope() {
        let env = ResponseEnvelope::success(ToolOutput::Payload(json!({"data": 1, "alpha": 2})));
        assert_eq!(
            env.to_json().to_string(),
            r#"{"success":true,"data":1,"alpha":2}"#
        );

        let env = ResponseEnvelope::from(DispatchError::Tool(ToolError::Handler("boom".into())));
        let text = env.to_json().to_string();
        assert!(text.starts_with(r#"{"success":false,"error":"boom","status":"#));
    }
}
