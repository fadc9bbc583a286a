// ABOUTME: Lifecycle hooks: the three event entry points and the file-backed EventLogger.
// ABOUTME: Every hook is fire-and-forget: no session or a failed write never reaches the caller.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::event::{HookEvent, Payload};
use crate::format::{self, Limits};
use crate::session::{SessionPointer, append_to_log};

/// Callbacks a host invokes at each lifecycle point.
pub trait LifecycleHooks {
    /// A user message was submitted.
    fn on_user_message(&self, text: &str);

    /// A tool is about to be invoked.
    fn on_tool_called(&self, tool_name: &str, params: &Payload);

    /// A tool returned. `error` is set when the invocation failed.
    fn on_tool_result(&self, tool_name: &str, result: &Payload, error: Option<&str>);

    /// Route a decoded event to the matching hook.
    fn dispatch(&self, event: &HookEvent) {
        match event {
            HookEvent::UserMessage { text } => self.on_user_message(text),
            HookEvent::ToolCall { tool_name, params } => self.on_tool_called(tool_name, params),
            HookEvent::ToolResult {
                tool_name,
                result,
                error,
            } => self.on_tool_result(tool_name, result, error.as_deref()),
        }
    }
}

/// Appends a human-readable record for each event to the active session log.
#[derive(Debug, Clone)]
pub struct EventLogger {
    pointer: SessionPointer,
    limits: Limits,
}

impl EventLogger {
    pub fn new(pointer: SessionPointer, limits: Limits) -> Self {
        Self { pointer, limits }
    }

    /// Logger for `workspace_dir` with the default pointer location and caps.
    pub fn for_workspace(workspace_dir: &Path) -> Self {
        Self::new(SessionPointer::in_workspace(workspace_dir), Limits::default())
    }

    /// Logger for `workspace_dir` using the pointer location and caps from `config`.
    pub fn from_config(workspace_dir: &Path, config: &Config) -> Self {
        Self::new(
            SessionPointer::new(workspace_dir, &config.session.pointer_file),
            config.format.limits(),
        )
    }

    /// The active log file, if a session is running.
    pub fn active_log_file(&self) -> Option<PathBuf> {
        self.pointer.resolve()
    }

    /// Render and append one record if a session is active.
    fn record<F>(&self, kind: &str, render: F)
    where
        F: FnOnce(&str, &Limits) -> String,
    {
        let Some(log_file) = self.active_log_file() else {
            tracing::debug!(kind, "no active log session, skipping");
            return;
        };

        let text = render(&format::timestamp(), &self.limits);
        if let Err(e) = append_to_log(&log_file, &text) {
            tracing::warn!(
                kind,
                log_file = %log_file.display(),
                "failed to append to session log: {}",
                e
            );
        }
    }
}

impl LifecycleHooks for EventLogger {
    fn on_user_message(&self, text: &str) {
        self.record("user-message", |ts, limits| {
            format::user_message_record(ts, text, limits)
        });
    }

    fn on_tool_called(&self, tool_name: &str, params: &Payload) {
        self.record("tool-call", |ts, limits| {
            format::tool_call_record(ts, tool_name, params, limits)
        });
    }

    fn on_tool_result(&self, _tool_name: &str, result: &Payload, error: Option<&str>) {
        self.record("tool-result", |ts, limits| {
            format::tool_result_record(ts, result, error, limits)
        });
    }
}
