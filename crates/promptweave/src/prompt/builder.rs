//! Block-level prompt assembly.
//!
//! [`PromptBuilder`] collects rendered section blocks and joins the non-empty
//! ones with exactly one blank line. Sections that rendered nothing leave no
//! separator or whitespace artifact behind.

/// Builder that joins non-empty text blocks with a blank line.
///
/// # Example
///
/// ```
/// use promptweave::prompt::PromptBuilder;
///
/// let doc = PromptBuilder::new()
///     .push("# First")
///     .push("")
///     .push_opt(None)
///     .push("# Second")
///     .build();
///
/// assert_eq!(doc, "# First\n\n# Second");
/// ```
#[derive(Debug, Default)]
pub struct PromptBuilder {
    blocks: Vec<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block. Empty blocks are silently skipped.
    pub fn push(mut self, block: impl Into<String>) -> Self {
        let block = block.into();
        if !block.is_empty() {
            self.blocks.push(block);
        }
        self
    }

    /// Append a block only if it is `Some`.
    pub fn push_opt(self, block: Option<String>) -> Self {
        match block {
            Some(block) => self.push(block),
            None => self,
        }
    }

    /// Join all collected blocks with a single blank line between them.
    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_produces_empty_document() {
        assert_eq!(PromptBuilder::new().build(), "");
    }

    #[test]
    fn blocks_joined_with_one_blank_line() {
        let doc = PromptBuilder::new().push("a").push("b").push("c").build();
        assert_eq!(doc, "a\n\nb\n\nc");
    }

    #[test]
    fn empty_blocks_leave_no_artifacts() {
        let doc = PromptBuilder::new().push("a").push("").push("b").build();
        assert_eq!(doc, "a\n\nb");
        assert!(!doc.contains("\n\n\n"));
    }

    #[test]
    fn push_opt_none_skipped() {
        let doc = PromptBuilder::new()
            .push("a")
            .push_opt(None)
            .push_opt(Some("b".into()))
            .build();
        assert_eq!(doc, "a\n\nb");
    }
}
