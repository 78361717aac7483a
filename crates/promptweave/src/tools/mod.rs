//! Tool descriptors and the registry the prompt renderers query.
//!
//! - [`registry`] — [`ToolDescriptor`] with a provenance tag
//!   ([`ToolOrigin`]), and [`ToolRegistry`] for order-preserving enumeration.
//! - [`names`] — canonical tool-name constants shared by the registry and the
//!   plan-mode exclusion defaults.

pub mod names;
pub mod registry;

pub use registry::{ToolDescriptor, ToolOrigin, ToolRegistry};
