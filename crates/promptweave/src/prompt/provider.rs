//! Fixed-order prompt assembly.
//!
//! [`PromptProvider`] owns the two policy knobs the renderers parameterize
//! over — the plan-mode excluded-tool set and the default context filename —
//! and composes all section renderers in a fixed, documented order.

use crate::config::ConfigSnapshot;
use crate::context_files::DEFAULT_CONTEXT_FILENAME;
use crate::prompt::builder::PromptBuilder;
use crate::prompt::sections;
use crate::tools::names;
use crate::PromptError;
use std::collections::HashSet;

/// Assembles the full system prompt from a [`ConfigSnapshot`].
///
/// `build` is pure: no I/O, no clocks, no randomness. Two structurally equal
/// snapshots produce byte-identical documents.
#[derive(Debug, Clone)]
pub struct PromptProvider {
    /// Tool names omitted from the plan-mode allowed list because a dedicated
    /// instruction in that section already covers them. Matching is by exact
    /// name, irrespective of origin server.
    excluded_plan_tools: HashSet<String>,
    /// Filename substituted when discovery reported no context files.
    default_context_filename: String,
}

impl Default for PromptProvider {
    fn default() -> Self {
        Self {
            excluded_plan_tools: [names::WRITE_FILE, names::EDIT_FILE, names::SHELL]
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            default_context_filename: DEFAULT_CONTEXT_FILENAME.to_string(),
        }
    }
}

impl PromptProvider {
    /// Create a provider with the default excluded-tool set
    /// (`write_file`, `edit_file`, `shell`) and default context filename.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the plan-mode excluded-tool set.
    pub fn with_excluded_plan_tools<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_plan_tools = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default context filename.
    pub fn with_default_context_filename(mut self, filename: impl Into<String>) -> Self {
        self.default_context_filename = filename.into();
        self
    }

    /// Assemble the prompt document.
    ///
    /// Section order is fixed: preamble, core mandates, shell efficiency,
    /// interaction, skills, sub-agents, environment, plan mode, approved
    /// plan, user memory. Non-empty sections are separated by exactly one
    /// blank line; inactive sections leave no trace. A failed render returns
    /// the error and no document.
    pub fn build(
        &self,
        config: &ConfigSnapshot,
        user_memory: Option<&str>,
    ) -> Result<String, PromptError> {
        let default_filename = self.default_context_filename.as_str();

        Ok(PromptBuilder::new()
            .push(sections::render_preamble())
            .push(sections::render_core_mandates(config, default_filename)?)
            .push_opt(sections::render_shell_efficiency(config))
            .push(sections::render_interaction(config))
            .push_opt(sections::render_skills(config))
            .push_opt(sections::render_sub_agents(config))
            .push(sections::render_environment(config))
            .push_opt(sections::render_plan_mode(config, &self.excluded_plan_tools)?)
            .push_opt(sections::render_approved_plan(config))
            .push_opt(sections::render_user_memory(
                config,
                default_filename,
                user_memory,
            )?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApprovalMode, ConfigSnapshot};
    use crate::tools::{ToolDescriptor, ToolRegistry};

    fn snapshot() -> ConfigSnapshot {
        ConfigSnapshot::new("test-model")
    }

    #[test]
    fn multiple_context_filenames_in_core_mandates() {
        let config = snapshot().with_context_filenames(vec![
            "GEMINI.md".into(),
            "CUSTOM.md".into(),
            "ANOTHER.md".into(),
        ]);
        let prompt = PromptProvider::new().build(&config, None).unwrap();
        assert!(prompt.contains(
            "Instructions found in `GEMINI.md`, `CUSTOM.md` or `ANOTHER.md` files are \
foundational mandates."
        ));
    }

    #[test]
    fn user_memory_section_headed_by_plain_comma_list() {
        let config = snapshot()
            .with_context_filenames(vec!["GEMINI.md".into(), "CUSTOM.md".into()]);
        let prompt = PromptProvider::new()
            .build(&config, Some("Some memory content"))
            .unwrap();
        assert!(
            prompt.contains("# Contextual Instructions (GEMINI.md, CUSTOM.md)\nSome memory content")
        );
    }

    #[test]
    fn same_filenames_rendered_in_both_styles() {
        let config = snapshot()
            .with_context_filenames(vec!["ONE.md".into(), "TWO.md".into()]);
        let prompt = PromptProvider::new().build(&config, Some("memory")).unwrap();
        // Prose-or in core mandates, plain comma in the memory header.
        assert!(prompt.contains("`ONE.md` or `TWO.md`"));
        assert!(prompt.contains("(ONE.md, TWO.md)"));
    }

    #[test]
    fn plan_mode_lists_allowed_tools() {
        let tools = ToolRegistry::new()
            .with_tool(ToolDescriptor::builtin("read_file", ""))
            .with_tool(ToolDescriptor::from_server("list", "mcp", ""))
            .with_tool(ToolDescriptor::builtin("write_file", ""));
        let config = snapshot()
            .with_approval_mode(ApprovalMode::Plan)
            .with_tools(tools);
        let provider = PromptProvider::new().with_excluded_plan_tools(["write_file"]);

        let prompt = provider.build(&config, None).unwrap();
        assert!(prompt.contains("# Active Approval Mode: Plan"));
        assert!(prompt.contains("<tool>`read_file`</tool>"));
        assert!(prompt.contains("<tool>`list` (mcp)</tool>"));
        assert!(!prompt.contains("<tool>`write_file`</tool>"));
    }

    #[test]
    fn plan_banner_absent_outside_plan_mode() {
        for mode in [ApprovalMode::Default, ApprovalMode::AutoAccept] {
            let prompt = PromptProvider::new()
                .build(&snapshot().with_approval_mode(mode), None)
                .unwrap();
            assert!(!prompt.contains("# Active Approval Mode: Plan"));
        }
    }

    #[test]
    fn build_is_deterministic_across_equal_snapshots() {
        let make = || {
            snapshot()
                .with_approval_mode(ApprovalMode::Plan)
                .with_context_filenames(vec!["AGENTS.md".into(), "CUSTOM.md".into()])
                .with_tools(ToolRegistry::with_builtins())
        };
        let provider = PromptProvider::new();
        let first = provider.build(&make(), Some("memory")).unwrap();
        let second = provider.build(&make(), Some("memory")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sections_separated_by_exactly_one_blank_line() {
        let prompt = PromptProvider::new().build(&snapshot(), None).unwrap();
        assert!(!prompt.contains("\n\n\n"));
        assert!(prompt.contains("\n\n# Core Mandates"));
    }

    #[test]
    fn default_context_filename_used_when_discovery_empty() {
        let prompt = PromptProvider::new().build(&snapshot(), None).unwrap();
        assert!(prompt.contains("Instructions found in `AGENTS.md` files are foundational mandates."));

        let custom = PromptProvider::new()
            .with_default_context_filename("PROJECT.md")
            .build(&snapshot(), None)
            .unwrap();
        assert!(custom.contains("Instructions found in `PROJECT.md` files"));
    }

    #[test]
    fn default_excluded_set_drops_write_capability_tools() {
        let config = snapshot()
            .with_approval_mode(ApprovalMode::Plan)
            .with_tools(ToolRegistry::with_builtins());
        let prompt = PromptProvider::new().build(&config, None).unwrap();
        assert!(prompt.contains("<tool>`read_file`</tool>"));
        assert!(!prompt.contains("<tool>`write_file`</tool>"));
        assert!(!prompt.contains("<tool>`edit_file`</tool>"));
        assert!(!prompt.contains("<tool>`shell`</tool>"));
    }

    #[test]
    fn unnamed_tool_fails_the_whole_build() {
        let tools = ToolRegistry::new().with_tool(ToolDescriptor::builtin("", ""));
        let config = snapshot()
            .with_approval_mode(ApprovalMode::Plan)
            .with_tools(tools);
        assert_eq!(
            PromptProvider::new().build(&config, None),
            Err(PromptError::UnnamedTool)
        );
    }
}
