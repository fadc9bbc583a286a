// ABOUTME: Pure formatting for log records: timestamps, params, tool output, truncation.
// ABOUTME: Renders the exact text templates appended for each hook event.

use chrono::{Local, Timelike};
use serde_json::Value;

use crate::event::Payload;

/// Default cap for user messages and string params.
pub const MESSAGE_MAX_CHARS: usize = 200;

/// Default cap for tool output.
pub const OUTPUT_MAX_CHARS: usize = 5000;

/// Appended to tool output that exceeded the cap.
pub const OUTPUT_TRUNCATED_MARKER: &str = "\n... (output truncated)";

/// Character caps applied while rendering records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub message_max_chars: usize,
    pub output_max_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            message_max_chars: MESSAGE_MAX_CHARS,
            output_max_chars: OUTPUT_MAX_CHARS,
        }
    }
}

/// Current local wall-clock time as `HH:MM:SS`.
pub fn timestamp() -> String {
    format_time(&Local::now())
}

/// Render any time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Keep at most `max_chars` characters, marking a cut with `...`.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        None => message.to_string(),
        Some((cut, _)) => format!("{}...", &message[..cut]),
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Pretty JSON with 2-space indentation, falling back to the compact `Display` form.
fn pretty(value: &Value) -> String {
    let value = integral_floats(value);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Rewrite whole-valued floats as integers so `1.0` renders as `1`.
fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER)
            .map(|f| Value::from(f as i64))
            .unwrap_or_else(|| value.clone()),
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Format tool-call parameters.
pub fn format_params(params: &Payload, limits: &Limits) -> String {
    match params {
        Payload::Absent => "(none)".to_string(),
        Payload::Text(s) => truncate_message(s, limits.message_max_chars),
        Payload::Structured(value) => pretty(value),
    }
}

/// Format a tool result, capping very long output.
pub fn format_output(result: &Payload, limits: &Limits) -> String {
    let output = match result {
        Payload::Absent => return "(no output)".to_string(),
        Payload::Text(s) => s.clone(),
        Payload::Structured(value) => pretty(value),
    };

    match output.char_indices().nth(limits.output_max_chars) {
        None => output,
        Some((cut, _)) => format!("{}{}", &output[..cut], OUTPUT_TRUNCATED_MARKER),
    }
}

pub fn user_message_record(timestamp: &str, text: &str, limits: &Limits) -> String {
    format!(
        "[{}] 💬 USER MESSAGE: {}",
        timestamp,
        truncate_message(text, limits.message_max_chars)
    )
}

pub fn tool_call_record(
    timestamp: &str,
    tool_name: &str,
    params: &Payload,
    limits: &Limits,
) -> String {
    format!(
        "\n---\n[{}] TOOL: {}\nPARAMS: {}",
        timestamp,
        tool_name,
        format_params(params, limits)
    )
}

/// Render a tool result. A present but empty error counts as success.
pub fn tool_result_record(
    timestamp: &str,
    result: &Payload,
    error: Option<&str>,
    limits: &Limits,
) -> String {
    match error.filter(|e| !e.is_empty()) {
        Some(error) => format!("[{}] RESULT: ❌ Failed\nERROR: {}\n---", timestamp, error),
        None => format!(
            "[{}] RESULT: ✅ Success\nOUTPUT:\n{}\n---",
            timestamp,
            format_output(result, limits)
        ),
    }
}
