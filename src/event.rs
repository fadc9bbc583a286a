// ABOUTME: Hook event types: the three lifecycle events and their payload values.
// ABOUTME: Payload is a closed set (absent, text, structured) in place of untyped host values.

use serde::Deserialize;
use serde_json::Value;

/// A value handed to a hook by the host: tool params or a tool result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<Value>")]
pub enum Payload {
    /// Null or missing.
    #[default]
    Absent,
    /// A plain string.
    Text(String),
    /// Any other JSON value (object, array, number, bool).
    Structured(Value),
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Payload::Absent,
            Value::String(s) => Payload::Text(s),
            other => Payload::Structured(other),
        }
    }
}

impl From<Option<Value>> for Payload {
    fn from(value: Option<Value>) -> Self {
        value.map(Payload::from).unwrap_or_default()
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl Payload {
    /// Interpret raw CLI text: valid JSON becomes its value, anything else stays a string.
    pub fn parse_lenient(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Payload::from(value),
            Err(_) => Payload::Text(raw.to_string()),
        }
    }
}

/// One lifecycle event emitted by the host, as read from a JSON hook payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HookEvent {
    /// The user submitted a message.
    #[serde(alias = "user-prompt-submit")]
    UserMessage { text: String },
    /// A tool is about to run.
    ToolCall {
        #[serde(rename = "tool")]
        tool_name: String,
        #[serde(default)]
        params: Payload,
    },
    /// A tool finished, successfully or not.
    ToolResult {
        #[serde(rename = "tool")]
        tool_name: String,
        #[serde(default)]
        result: Payload,
        #[serde(default)]
        error: Option<String>,
    },
}
