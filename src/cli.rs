// ABOUTME: Command-line surface for archlog: one subcommand per hook plus a JSON stdin mode.
// ABOUTME: Every path exits cleanly; bad input or config is reported as a warning only.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::event::{HookEvent, Payload};
use crate::hooks::{EventLogger, LifecycleHooks};

/// Environment variable holding the diagnostics filter (e.g. `warn`, `debug`).
pub const LOG_FILTER_ENV: &str = "ARCHLOG_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "archlog",
    version,
    about = "Append agent lifecycle events to the active session log"
)]
pub struct Cli {
    /// Workspace containing the session pointer (defaults to the current directory).
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Config file (defaults to ~/.architect-logger/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a submitted user message.
    #[command(alias = "user-prompt-submit")]
    UserMessage {
        /// Message text; read from stdin when omitted.
        text: Option<String>,
    },
    /// Log a tool invocation.
    ToolCall {
        #[arg(long)]
        tool: String,
        /// Parameters as JSON; non-JSON text is logged as a string.
        #[arg(long)]
        params: Option<String>,
    },
    /// Log a tool result.
    ToolResult {
        #[arg(long)]
        tool: String,
        /// Result as JSON; non-JSON text is logged as a string.
        #[arg(long)]
        result: Option<String>,
        /// Error message when the tool failed.
        #[arg(long)]
        error: Option<String>,
    },
    /// Read one JSON-encoded event from stdin.
    Hook,
}

impl Command {
    /// Turn the subcommand into an event, reading stdin where it is the input.
    fn into_event(self, stdin: &mut dyn Read) -> anyhow::Result<HookEvent> {
        let event = match self {
            Command::UserMessage { text } => {
                let text = match text {
                    Some(text) => text,
                    None => read_all(stdin)?.trim_end_matches(['\r', '\n']).to_string(),
                };
                HookEvent::UserMessage { text }
            }
            Command::ToolCall { tool, params } => HookEvent::ToolCall {
                tool_name: tool,
                params: params
                    .as_deref()
                    .map(Payload::parse_lenient)
                    .unwrap_or_default(),
            },
            Command::ToolResult {
                tool,
                result,
                error,
            } => HookEvent::ToolResult {
                tool_name: tool,
                result: result
                    .as_deref()
                    .map(Payload::parse_lenient)
                    .unwrap_or_default(),
                error,
            },
            Command::Hook => serde_json::from_str(&read_all(stdin)?)?,
        };
        Ok(event)
    }
}

fn read_all(stdin: &mut dyn Read) -> anyhow::Result<String> {
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Install the stderr diagnostics subscriber. Silent unless `ARCHLOG_LOG` is set.
///
/// Call after `load_dotenv` so a workspace `.env` can set the filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Load `<workspace>/.env` into the process environment. Existing variables win.
pub fn load_dotenv(workspace: &Path) {
    let _ = dotenvy::from_path(workspace.join(".env"));
}

/// The workspace named by `--workspace`, else the current directory.
pub fn workspace_dir(workspace: Option<&Path>) -> PathBuf {
    workspace
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Whether a parse outcome is a help or version request rather than bad input.
pub fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Process entry point: parse arguments and run the hook.
///
/// Only `--help` and `--version` leave through clap's own exit. Invalid arguments are a
/// warning and the process still exits 0, so a host pipeline is never blocked.
pub fn main_entry() {
    match Cli::try_parse() {
        Ok(cli) => {
            load_dotenv(&workspace_dir(cli.workspace.as_deref()));
            init_tracing();
            run(cli);
        }
        Err(e) if is_informational(e.kind()) => e.exit(),
        Err(e) => {
            load_dotenv(&workspace_dir(None));
            init_tracing();
            tracing::warn!(kind = ?e.kind(), "ignoring invalid hook invocation: {}", e);
        }
    }
}

/// Resolve config: defaults, then the config file, then environment overrides.
pub fn load_config(cli: &Cli, workspace: &Path) -> Config {
    load_dotenv(workspace);

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });
    config.apply_env();
    config
}

/// Run the CLI against the real process stdin.
pub fn run(cli: Cli) {
    run_with_input(cli, &mut std::io::stdin());
}

/// Run the CLI, reading event input from `stdin`. Never fails.
pub fn run_with_input(cli: Cli, stdin: &mut dyn Read) {
    let workspace = workspace_dir(cli.workspace.as_deref());
    let config = load_config(&cli, &workspace);
    let logger = EventLogger::from_config(&workspace, &config);

    match cli.command.into_event(stdin) {
        Ok(event) => logger.dispatch(&event),
        Err(e) => tracing::warn!("ignoring unreadable hook input: {}", e),
    }
}
