//! Assemble and print the system prompt for a tool-use agent.
//!
//! Useful for inspecting exactly what an agent runtime would send for a given
//! configuration, without running the agent.
//!
//! # Examples
//!
//! ```sh
//! # Default prompt with the builtin tool set
//! promptweave
//!
//! # Plan mode with tools loaded from a JSON file
//! promptweave --approval-mode plan --tools tools.json
//!
//! # Discover context files under a project and append their content
//! promptweave --project-root . --context-file AGENTS.md --context-file STYLE.md
//!
//! # Non-interactive agent with an approved plan
//! promptweave --non-interactive --approved-plan .agents/tmp/plans/plan-1.md
//! ```

use clap::Parser;
use promptweave::config::{ApprovalMode, ConfigSnapshot, StorageLayout};
use promptweave::context_files::{self, DEFAULT_CONTEXT_FILENAME};
use promptweave::prompt::PromptProvider;
use promptweave::tools::{ToolDescriptor, ToolRegistry};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process;

/// Assemble and print the system prompt for a tool-use agent.
#[derive(Parser)]
#[command(name = "promptweave")]
struct Cli {
    // ── Identity ───────────────────────────────────────────────
    /// Active model identifier
    #[arg(long, default_value = "anthropic/claude-sonnet-4")]
    model: String,

    /// Approval mode: default, auto-accept, or plan
    #[arg(long, default_value = "default", value_parser = parse_approval_mode)]
    approval_mode: ApprovalMode,

    // ── Capability flags ───────────────────────────────────────
    /// Mark the session non-interactive (no user available mid-task)
    #[arg(long)]
    non_interactive: bool,

    /// Disable the interactive-shell guidance
    #[arg(long)]
    no_interactive_shell: bool,

    /// Include shell-output efficiency guidance
    #[arg(long)]
    shell_output_efficiency: bool,

    // ── Tools ──────────────────────────────────────────────────
    /// JSON file describing the available tools (defaults to the builtin set)
    #[arg(long)]
    tools: Option<PathBuf>,

    // ── Context files & memory ─────────────────────────────────
    /// Project root to discover context files under
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Context filename(s) to discover, in order (repeatable)
    #[arg(long = "context-file", default_value = DEFAULT_CONTEXT_FILENAME)]
    context_files: Vec<String>,

    /// File whose content is appended as contextual instructions
    /// (overrides content discovered via --project-root)
    #[arg(long)]
    memory: Option<PathBuf>,

    // ── Paths ──────────────────────────────────────────────────
    /// Project temp directory for scratch and plan files
    #[arg(long, default_value = ".agents/tmp")]
    temp_dir: PathBuf,

    /// Path to a user-approved plan the agent should execute
    #[arg(long)]
    approved_plan: Option<PathBuf>,
}

fn parse_approval_mode(value: &str) -> Result<ApprovalMode, String> {
    match value {
        "default" => Ok(ApprovalMode::Default),
        "auto-accept" => Ok(ApprovalMode::AutoAccept),
        "plan" => Ok(ApprovalMode::Plan),
        other => Err(format!(
            "unknown approval mode '{other}' (expected: default, auto-accept, plan)"
        )),
    }
}

/// One entry of a `--tools` JSON file.
#[derive(Deserialize)]
struct ToolFileEntry {
    name: String,
    #[serde(default)]
    description: String,
    /// Origin server name for externally registered tools.
    #[serde(default)]
    server: Option<String>,
    #[serde(default)]
    parameters: Option<serde_json::Value>,
}

fn load_tools(path: &Path) -> Result<ToolRegistry, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let entries: Vec<ToolFileEntry> =
        serde_json::from_str(&raw).map_err(|e| format!("invalid tools file: {e}"))?;

    let mut registry = ToolRegistry::new();
    for entry in entries {
        let mut tool = match entry.server {
            Some(server) => ToolDescriptor::from_server(entry.name, server, entry.description),
            None => ToolDescriptor::builtin(entry.name, entry.description),
        };
        if let Some(parameters) = entry.parameters {
            tool = tool.with_parameters(parameters);
        }
        registry.register(tool);
    }
    Ok(registry)
}

fn run(cli: Cli) -> Result<String, String> {
    let tools = match &cli.tools {
        Some(path) => load_tools(path)?,
        None => ToolRegistry::with_builtins(),
    };

    let discovered = context_files::discover(cli.project_root.as_deref(), &cli.context_files);

    let memory = match &cli.memory {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        ),
        None if !discovered.content.is_empty() => Some(discovered.content.clone()),
        None => None,
    };

    let mut config = ConfigSnapshot::new(cli.model)
        .with_approval_mode(cli.approval_mode)
        .with_interactive(!cli.non_interactive)
        .with_interactive_shell(!cli.no_interactive_shell)
        .with_shell_output_efficiency(cli.shell_output_efficiency)
        .with_storage(StorageLayout::new(cli.temp_dir))
        .with_context_filenames(discovered.filenames)
        .with_tools(tools);
    if let Some(path) = cli.approved_plan {
        config = config.with_approved_plan_path(path);
    }

    PromptProvider::new()
        .build(&config, memory.as_deref())
        .map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(prompt) => println!("{prompt}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
