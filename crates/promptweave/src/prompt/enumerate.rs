//! Render name lists as prose.
//!
//! Two sections of the assembled prompt enumerate the same context filenames
//! in deliberately different styles: the core-mandates sentence uses
//! `` `A`, `B` or `C` `` while the contextual-instructions header uses
//! `A, B, C`. One shared implementation with a [`ListStyle`] parameter keeps
//! the two from drifting while preserving the intentional difference.

use crate::PromptError;

/// How the items of a list are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `"A"`, `"A or B"`, `"A, B or C"` — no comma before the conjunction.
    ProseOr,
    /// `"A"`, `"A, B"`, `"A, B, C"` — no conjunction at all.
    PlainComma,
}

/// How each individual item is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// Items appear bare.
    None,
    /// Items are wrapped in backticks, e.g. `` `AGENTS.md` ``.
    Backticks,
}

/// Join `items` into a single phrase.
///
/// Fails with [`PromptError::EmptyEnumeration`] on an empty slice — callers
/// must supply a fallback item instead of asking for an empty phrase.
pub fn format_list<S: AsRef<str>>(
    items: &[S],
    style: ListStyle,
    wrap: Wrap,
) -> Result<String, PromptError> {
    let wrapped: Vec<String> = items
        .iter()
        .map(|item| match wrap {
            Wrap::None => item.as_ref().to_string(),
            Wrap::Backticks => format!("`{}`", item.as_ref()),
        })
        .collect();

    let Some((last, head)) = wrapped.split_last() else {
        return Err(PromptError::EmptyEnumeration);
    };

    Ok(match style {
        ListStyle::PlainComma => wrapped.join(", "),
        ListStyle::ProseOr if head.is_empty() => last.clone(),
        ListStyle::ProseOr => format!("{} or {last}", head.join(", ")),
    })
}
