//! Tool definitions and handlers, grouped by API domain.

pub mod info;
pub mod mining;
pub mod profile;
pub mod referral;
pub mod stats;
pub mod wallet;

use crate::registry::ToolDef;
use serde_json::{Value, json};

/// Every tool definition in listing order.
#[must_use]
pub fn all() -> Vec<ToolDef> {
    [
        stats::tools(),
        mining::tools(),
        wallet::tools(),
        profile::tools(),
        referral::tools(),
        info::tools(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Input schema for tools that take no arguments.
#[must_use]
pub fn no_arguments() -> Value {
    json!({ "type": "object", "properties": {}, "required": [] })
}

/// Loose truthiness as the API uses it: `null`, `false`, `0`, `""` and absent are all "unset".
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// First candidate that is set, in order.
pub(crate) fn first_truthy<'a>(
    candidates: impl IntoIterator<Item = Option<&'a Value>>,
) -> Option<&'a Value> {
    candidates
        .into_iter()
        .find(|v| is_truthy(*v))
        .flatten()
}
