//! Prompt assembly: list formatter, block builder, section renderers, provider.
//!
//! The prompt system has three layers:
//!
//! 1. **[`enumerate`]** — renders a list of names as a grammatically correct
//!    phrase. [`ListStyle`] selects between prose (`"A, B or C"`) and plain
//!    comma (`"A, B, C"`) forms; the style belongs to the section, not the
//!    data, so two sections may render the same list differently.
//!
//! 2. **[`builder`]** — [`PromptBuilder`] joins non-empty text blocks with
//!    exactly one blank line. Empty blocks contribute no separator.
//!
//! 3. **[`sections`] + [`provider`]** — a fixed ordered set of renderers,
//!    each a pure function of the [`ConfigSnapshot`](crate::ConfigSnapshot)
//!    producing zero or one block, composed by [`PromptProvider::build`].

pub mod builder;
pub mod enumerate;
pub mod provider;
pub mod sections;

pub use builder::PromptBuilder;
pub use enumerate::{ListStyle, Wrap, format_list};
pub use provider::PromptProvider;
