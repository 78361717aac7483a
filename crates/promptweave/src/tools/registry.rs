//! Provenance-tagged tool descriptors and the registry that enumerates them.
//!
//! A [`ToolDescriptor`] carries everything the prompt needs to reference a
//! tool: its name, a short description, an opaque JSON-schema parameter
//! object, and a [`ToolOrigin`] saying whether the tool is built into the
//! agent or registered by an external capability server. The origin is a
//! tagged variant rather than an optional server-name field so the two
//! rendering branches are exhaustive.

use crate::tools::names;

/// Where a tool came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolOrigin {
    /// Built into the agent itself.
    #[default]
    Builtin,
    /// Registered by the named external capability server.
    Server(String),
}

/// One capability exposed to the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Canonical tool name. An empty name is representable (descriptors may
    /// arrive from untrusted JSON) but fails the build when rendered.
    pub name: String,
    /// Short description shown in tool listings.
    pub description: String,
    /// JSON-schema parameter object, passed through opaquely.
    pub parameters: serde_json::Value,
    /// Provenance of the tool.
    pub origin: ToolOrigin,
}

impl ToolDescriptor {
    /// Create a descriptor for a tool built into the agent.
    pub fn builtin(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: empty_parameters(),
            origin: ToolOrigin::Builtin,
        }
    }

    /// Create a descriptor for a tool registered by an external server.
    pub fn from_server(
        name: impl Into<String>,
        origin_server: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: empty_parameters(),
            origin: ToolOrigin::Server(origin_server.into()),
        }
    }

    /// Attach a JSON-schema parameter object.
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }

    /// The origin server name, when the tool is externally registered.
    pub fn origin_server(&self) -> Option<&str> {
        match &self.origin {
            ToolOrigin::Builtin => None,
            ToolOrigin::Server(server) => Some(server),
        }
    }
}

fn empty_parameters() -> serde_json::Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

/// Ordered collection of the tools currently available to the agent.
///
/// Enumeration order is registration order — renderers never re-sort it.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the builtin tool set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins = [
            (names::READ_FILE, "Read a file from the working tree"),
            (names::EDIT_FILE, "Apply a targeted edit to a file"),
            (names::WRITE_FILE, "Create or overwrite a file"),
            (names::LIST_DIR, "List a directory"),
            (names::GREP, "Search file contents by regex pattern"),
            (names::SHELL, "Run a shell command"),
            (names::WEB_SEARCH, "Search the web"),
            (names::THINK, "Record private reasoning without acting"),
            (names::TODO, "Track outstanding task items"),
        ];
        for (name, description) in builtins {
            registry.register(ToolDescriptor::builtin(name, description));
        }
        registry
    }

    /// Append a tool. Order of registration is the order of enumeration.
    pub fn register(&mut self, tool: ToolDescriptor) {
        self.tools.push(tool);
    }

    /// Append a tool (builder pattern).
    pub fn with_tool(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    /// All registered tools, in registration order.
    pub fn all_tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// All registered tool names, in registration order.
    pub fn all_tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_descriptor_has_no_origin_server() {
        let tool = ToolDescriptor::builtin("read_file", "Read a file");
        assert_eq!(tool.origin, ToolOrigin::Builtin);
        assert!(tool.origin_server().is_none());
    }

    #[test]
    fn server_descriptor_reports_origin() {
        let tool = ToolDescriptor::from_server("list", "mcp", "List resources");
        assert_eq!(tool.origin_server(), Some("mcp"));
    }

    #[test]
    fn registration_order_is_enumeration_order() {
        let registry = ToolRegistry::new()
            .with_tool(ToolDescriptor::builtin("zeta", ""))
            .with_tool(ToolDescriptor::builtin("alpha", ""))
            .with_tool(ToolDescriptor::from_server("mid", "srv", ""));

        assert_eq!(registry.all_tool_names(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn builtins_include_core_file_tools() {
        let registry = ToolRegistry::with_builtins();
        let tool_names = registry.all_tool_names();
        assert!(tool_names.contains(&names::READ_FILE));
        assert!(tool_names.contains(&names::WRITE_FILE));
        assert!(tool_names.contains(&names::SHELL));
    }

    #[test]
    fn with_parameters_replaces_default_schema() {
        let tool = ToolDescriptor::builtin("grep", "Search").with_parameters(serde_json::json!({
            "type": "object",
            "properties": { "pattern": { "type": "string" } },
            "required": ["pattern"]
        }));
        assert_eq!(tool.parameters["required"][0], "pattern");
    }
}
