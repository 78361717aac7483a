//! Deterministic system prompt composition for tool-use agents.
//!
//! `promptweave` assembles the system prompt an agent runtime sends to its
//! model: a fixed, ordered set of named sections, each conditionally included
//! and interpolated from an immutable [`ConfigSnapshot`]. The assembly is a
//! pure function — given structurally equal snapshots it produces
//! byte-identical documents, with no I/O, clocks, or randomness involved.
//!
//! # Getting started
//!
//! ```
//! use promptweave::{ApprovalMode, ConfigSnapshot, PromptProvider, ToolRegistry};
//!
//! let config = ConfigSnapshot::new("anthropic/claude-sonnet-4")
//!     .with_approval_mode(ApprovalMode::Plan)
//!     .with_context_filenames(vec!["AGENTS.md".into()])
//!     .with_tools(ToolRegistry::with_builtins());
//!
//! let prompt = PromptProvider::new().build(&config, None).unwrap();
//! assert!(prompt.contains("# Active Approval Mode: Plan"));
//! ```
//!
//! # Where to find things
//!
//! If you're looking for how to...
//!
//! - **Describe the agent's configuration:** see [`ConfigSnapshot`] and its
//!   builder methods, [`ApprovalMode`], and [`StorageLayout`](config::StorageLayout).
//! - **Describe the available tools:** see [`ToolDescriptor`],
//!   [`ToolOrigin`] (builtin vs. registered by an external server), and
//!   [`ToolRegistry`]. Canonical tool names live in [`tools::names`].
//! - **Assemble the prompt:** see [`PromptProvider`] for the full fixed-order
//!   document, [`PromptBuilder`](prompt::PromptBuilder) for the low-level
//!   block joiner, and [`prompt::sections`] for the individual renderers.
//! - **Render name lists as prose:** see [`prompt::enumerate`] —
//!   [`ListStyle`](prompt::ListStyle) selects between the `"A, B or C"` and
//!   `"A, B, C"` forms.
//! - **Discover instruction files on disk:** see [`context_files`], the only
//!   module here that touches the filesystem.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | [`ConfigSnapshot`] and the enums/descriptors it carries |
//! | [`tools`] | [`ToolRegistry`], [`ToolDescriptor`], canonical name constants |
//! | [`prompt`] | Section renderers, list formatter, block builder, [`PromptProvider`] |
//! | [`context_files`] | Hierarchical discovery of `AGENTS.md`-style instruction files |

pub mod config;
pub mod context_files;
pub mod prompt;
pub mod tools;

pub use config::{AgentDescriptor, ApprovalMode, ConfigSnapshot, SkillDescriptor};
pub use context_files::{ContextFiles, DEFAULT_CONTEXT_FILENAME};
pub use prompt::PromptProvider;
pub use tools::{ToolDescriptor, ToolOrigin, ToolRegistry};

use thiserror::Error;

/// Errors produced while assembling a prompt.
///
/// Both variants indicate a collaborator contract violation rather than a
/// user-recoverable condition: context-file discovery must never legitimately
/// report an empty filename list, and a tool registry must never hand out a
/// nameless descriptor. A failed build returns no document at all — there are
/// no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A section attempted prose enumeration over zero items without a
    /// non-empty fallback.
    #[error("cannot enumerate an empty list")]
    EmptyEnumeration,
    /// A tool descriptor with an empty name reached a renderer.
    #[error("tool descriptor has no name")]
    UnnamedTool,
}
