//! The fixed section renderers of the system prompt.
//!
//! Each renderer is a pure function of the [`ConfigSnapshot`]: it checks its
//! own activation condition and produces zero or one text block. Renderers
//! that enumerate lists return `Result` so an empty-enumeration contract
//! violation propagates instead of producing a malformed sentence. The
//! ordering of sections is owned by
//! [`PromptProvider`](super::provider::PromptProvider), not by this module.

use crate::config::{ApprovalMode, ConfigSnapshot};
use crate::prompt::enumerate::{ListStyle, Wrap, format_list};
use crate::tools::ToolOrigin;
use crate::PromptError;
use std::collections::HashSet;

/// Opening identity block. Always present, never interpolated.
pub fn render_preamble() -> String {
    "You are an autonomous coding agent. You help the user with software \
engineering tasks using the tools available to you. Be direct, act on the \
request rather than describing what you would do, and verify your work before \
reporting it done."
        .to_string()
}

/// Core behavioral mandates, including the foundational-mandates sentence
/// built from the discovered context filenames in discovery order.
///
/// When discovery reported no filenames, `default_filename` is substituted so
/// the list formatter is never invoked on an empty set.
pub fn render_core_mandates(
    config: &ConfigSnapshot,
    default_filename: &str,
) -> Result<String, PromptError> {
    let filenames = effective_filenames(config, default_filename);
    let enumerated = format_list(&filenames, ListStyle::ProseOr, Wrap::Backticks)?;

    Ok(format!(
        "# Core Mandates

- **Conventions:** Rigorously follow the project's existing conventions when \
reading or modifying code. Analyze surrounding code, tests, and configuration \
before making changes.
- **Libraries:** Never assume a library or framework is available. Verify its \
established usage in the project before employing it.
- **Style:** Match the formatting, naming, and architectural patterns of the \
code you are editing.
- **Comments:** Add code comments sparingly. Explain *why* something is done \
when it is not obvious, never *what* the next line does.
- **Scope:** Fulfill the request thoroughly, but confirm with the user before \
taking significant actions beyond its clear scope.
- Instructions found in {enumerated} files are foundational mandates. They \
override the defaults above; never contradict them."
    ))
}

/// Shell-output efficiency guidance. Active only when the snapshot enables it.
pub fn render_shell_efficiency(config: &ConfigSnapshot) -> Option<String> {
    if !config.shell_output_efficiency() {
        return None;
    }
    Some(
        "# Shell Output Efficiency

Prefer shell commands that bound their own output. Pipe potentially large \
output through `head` or `tail`, request terse formats where a command offers \
one, and extract the lines you need instead of dumping whole files into the \
conversation."
            .to_string(),
    )
}

/// Interaction guidance. Wording switches on the interactivity flags; the
/// section itself is always present.
pub fn render_interaction(config: &ConfigSnapshot) -> String {
    if !config.is_interactive() {
        return "# Interaction

You are running non-interactively. The user cannot answer questions mid-task. \
Make reasonable assumptions, state them in your final output, and never block \
waiting for input."
            .to_string();
    }

    let mut section = "# Interaction

You are running interactively. When a request is ambiguous, ask a short \
clarifying question instead of guessing."
        .to_string();
    if config.is_interactive_shell_enabled() {
        section.push_str(
            "\nLong-running shell commands run in an interactive shell; the user sees \
their output as it streams, so you do not need to echo it back.",
        );
    }
    section
}

/// Available skills, one `name: description` line each, in registry order.
pub fn render_skills(config: &ConfigSnapshot) -> Option<String> {
    if config.skills().is_empty() {
        return None;
    }
    let mut section = String::from(
        "# Skills\n\nThe following skills are available. Invoke one when its \
description matches the task at hand:",
    );
    for skill in config.skills() {
        section.push_str(&format!("\n- {}: {}", skill.name, skill.description));
    }
    Some(section)
}

/// Registered sub-agents, one `name: description` line each, in registry order.
pub fn render_sub_agents(config: &ConfigSnapshot) -> Option<String> {
    if config.agents().is_empty() {
        return None;
    }
    let mut section = String::from(
        "# Sub-Agents\n\nDelegate self-contained tasks to these sub-agents \
instead of doing everything in your own context:",
    );
    for agent in config.agents() {
        section.push_str(&format!("\n- {}: {}", agent.name, agent.description));
    }
    Some(section)
}

/// Model identity and scratch-space paths. Always present.
pub fn render_environment(config: &ConfigSnapshot) -> String {
    format!(
        "# Environment

Active model: `{}`.
Project temp directory: `{}`. Use it for scratch files instead of polluting \
the working tree.",
        config.model(),
        config.storage().project_temp_dir().display(),
    )
}

/// Plan-mode banner, rules, and the allowed-tool list.
///
/// Emits only for [`ApprovalMode::Plan`]. Tools whose name is in `excluded`
/// are dropped from the list regardless of origin — those tools are already
/// covered by the dedicated prohibition sentence in the rules. The remaining
/// tools render in registry order, builtin as `` <tool>`name`</tool> `` and
/// server-registered as `` <tool>`name` (server)</tool> ``.
pub fn render_plan_mode(
    config: &ConfigSnapshot,
    excluded: &HashSet<String>,
) -> Result<Option<String>, PromptError> {
    if config.approval_mode() != ApprovalMode::Plan {
        return Ok(None);
    }

    let mut section = format!(
        "# Active Approval Mode: Plan

You are in plan mode. Research the task with read-only tools and produce a \
step-by-step plan for the user to approve; do not modify the user's files or \
system state.
Write your plan to a markdown file under `{}`.
Tools that modify files or system state are forbidden in this mode and calls \
to them will be rejected.",
        config.storage().plans_dir().display(),
    );

    let mut allowed = Vec::new();
    for tool in config.tool_registry().all_tools() {
        if tool.name.is_empty() {
            return Err(PromptError::UnnamedTool);
        }
        if excluded.contains(&tool.name) {
            continue;
        }
        allowed.push(match &tool.origin {
            ToolOrigin::Builtin => format!("<tool>`{}`</tool>", tool.name),
            ToolOrigin::Server(server) => format!("<tool>`{}` ({server})</tool>", tool.name),
        });
    }

    if !allowed.is_empty() {
        section.push_str("\nYou may use the following tools:");
        for line in allowed {
            section.push('\n');
            section.push_str(&line);
        }
    }

    Ok(Some(section))
}

/// Directive to execute a previously approved plan, when one exists.
pub fn render_approved_plan(config: &ConfigSnapshot) -> Option<String> {
    let path = config.approved_plan_path()?;
    Some(format!(
        "# Approved Plan

The user approved the plan at `{}`. Execute it step by step, and keep the \
plan file updated as steps complete.",
        path.display(),
    ))
}

/// Per-call user memory, headed by the context filenames in plain-comma form.
///
/// Active only when a memory blob was supplied to the build call and is not
/// blank. The header enumerates the same filenames as the core-mandates
/// sentence but in the plain-comma style — enumeration style is a property of
/// the section, not of the data.
pub fn render_user_memory(
    config: &ConfigSnapshot,
    default_filename: &str,
    user_memory: Option<&str>,
) -> Result<Option<String>, PromptError> {
    let Some(memory) = user_memory else {
        return Ok(None);
    };
    let memory = memory.trim();
    if memory.is_empty() {
        return Ok(None);
    }

    let filenames = effective_filenames(config, default_filename);
    let enumerated = format_list(&filenames, ListStyle::PlainComma, Wrap::None)?;
    Ok(Some(format!(
        "# Contextual Instructions ({enumerated})\n{memory}"
    )))
}

/// Discovered context filenames, or the configured default when discovery
/// reported none.
fn effective_filenames<'a>(config: &'a ConfigSnapshot, default_filename: &'a str) -> Vec<&'a str> {
    if config.context_filenames().is_empty() {
        vec![default_filename]
    } else {
        config.context_filenames().iter().map(String::as_str).collect()
    }
}
