//! Configuration snapshot consumed by the prompt renderers.
//!
//! A [`ConfigSnapshot`] is constructed fresh for each prompt build and never
//! mutated afterward — renderers only read from it. Construction uses builder
//! methods for the fields that differ from the defaults:
//!
//! ```
//! use promptweave::{ApprovalMode, ConfigSnapshot, ToolRegistry};
//!
//! let config = ConfigSnapshot::new("anthropic/claude-sonnet-4")
//!     .with_approval_mode(ApprovalMode::Plan)
//!     .with_interactive(false)
//!     .with_tools(ToolRegistry::with_builtins());
//! ```

use crate::tools::ToolRegistry;
use std::path::{Path, PathBuf};

/// How much autonomy the agent has over side-effecting actions.
///
/// Only [`ApprovalMode::Plan`] changes the assembled prompt; the other modes
/// are enforced by the approval layer at tool-call time, not by extra
/// instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalMode {
    /// Confirm side-effecting tool calls with the user.
    #[default]
    Default,
    /// Apply edits without per-call confirmation.
    AutoAccept,
    /// Research and plan only — no modifications to files or system state.
    Plan,
}

/// On-disk locations the agent may use for scratch and plan files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    project_temp_dir: PathBuf,
    plans_dir: PathBuf,
}

impl StorageLayout {
    /// Create a layout rooted at the given temp directory, with plans stored
    /// in a `plans/` subdirectory.
    pub fn new(project_temp_dir: impl Into<PathBuf>) -> Self {
        let project_temp_dir = project_temp_dir.into();
        let plans_dir = project_temp_dir.join("plans");
        Self {
            project_temp_dir,
            plans_dir,
        }
    }

    /// Override the plans directory.
    pub fn with_plans_dir(mut self, plans_dir: impl Into<PathBuf>) -> Self {
        self.plans_dir = plans_dir.into();
        self
    }

    /// Directory for agent scratch files.
    pub fn project_temp_dir(&self) -> &Path {
        &self.project_temp_dir
    }

    /// Directory where plan-mode plans are written.
    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::new(".agents/tmp")
    }
}

/// A named skill the agent can invoke, consumed only for its name and
/// description when rendering the skills section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDescriptor {
    /// Skill name.
    pub name: String,
    /// One-line description of what the skill does.
    pub description: String,
}

impl SkillDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A registered sub-agent definition, consumed only for its name and
/// description when rendering the sub-agents section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    /// Sub-agent name.
    pub name: String,
    /// One-line description of the tasks it should be delegated.
    pub description: String,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Immutable view of the agent configuration at prompt-build time.
///
/// All dynamic data a renderer needs arrives pre-resolved here: discovered
/// context filenames keep their discovery order (never re-sorted, uniqueness
/// not assumed), the tool registry keeps its registration order, and no field
/// changes after construction.
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    model: String,
    approval_mode: ApprovalMode,
    interactive: bool,
    interactive_shell: bool,
    shell_output_efficiency: bool,
    storage: StorageLayout,
    approved_plan_path: Option<PathBuf>,
    context_filenames: Vec<String>,
    tools: ToolRegistry,
    skills: Vec<SkillDescriptor>,
    agents: Vec<AgentDescriptor>,
}

impl ConfigSnapshot {
    /// Create a snapshot for the given model with default settings:
    /// interactive, default approval mode, empty registries.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            approval_mode: ApprovalMode::Default,
            interactive: true,
            interactive_shell: true,
            shell_output_efficiency: false,
            storage: StorageLayout::default(),
            approved_plan_path: None,
            context_filenames: Vec::new(),
            tools: ToolRegistry::new(),
            skills: Vec::new(),
            agents: Vec::new(),
        }
    }

    pub fn with_approval_mode(mut self, mode: ApprovalMode) -> Self {
        self.approval_mode = mode;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_interactive_shell(mut self, enabled: bool) -> Self {
        self.interactive_shell = enabled;
        self
    }

    pub fn with_shell_output_efficiency(mut self, enabled: bool) -> Self {
        self.shell_output_efficiency = enabled;
        self
    }

    pub fn with_storage(mut self, storage: StorageLayout) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_approved_plan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.approved_plan_path = Some(path.into());
        self
    }

    /// Set the discovered context filenames, in discovery order.
    pub fn with_context_filenames(mut self, filenames: Vec<String>) -> Self {
        self.context_filenames = filenames;
        self
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillDescriptor>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_agents(mut self, agents: Vec<AgentDescriptor>) -> Self {
        self.agents = agents;
        self
    }

    /// The active model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn approval_mode(&self) -> ApprovalMode {
        self.approval_mode
    }

    /// Whether a user is present to answer questions mid-task.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether long-running shell commands stream to an interactive shell.
    pub fn is_interactive_shell_enabled(&self) -> bool {
        self.interactive_shell
    }

    /// Whether the prompt should carry shell-output efficiency guidance.
    pub fn shell_output_efficiency(&self) -> bool {
        self.shell_output_efficiency
    }

    pub fn storage(&self) -> &StorageLayout {
        &self.storage
    }

    /// Path of a user-approved plan to execute, if one exists.
    pub fn approved_plan_path(&self) -> Option<&Path> {
        self.approved_plan_path.as_deref()
    }

    /// Discovered context filenames, in discovery order. May be empty; the
    /// provider substitutes its configured default filename in that case.
    pub fn context_filenames(&self) -> &[String] {
        &self.context_filenames
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn skills(&self) -> &[SkillDescriptor] {
        &self.skills
    }

    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }
}
