//! Define the line-shape vocabulary of the B+ language.
//!
//! This module is the single source of truth for the six line shapes the translator recognizes: a stable
//! identifier ([`DirectiveId`]) plus a const metadata table ([`DIRECTIVES`]) that records the literal matcher,
//! block effect, a summary and a source/target example.
//!
//! ## Notes
//! - The order of [`DIRECTIVES`] **is** the classification priority. The first matching entry wins.
//! - Matching is case-sensitive and operates on an already trimmed line.
//! - This registry is pure (no IO, no translation state). Rewriting lives in [`crate::line`].
//!
//! ## Examples
//! ```rust
//! use bplus_syntax::directives::{self, DirectiveId};
//!
//! assert_eq!(directives::match_line("write var x"), Some((DirectiveId::WriteVar, "x")));
//! assert_eq!(directives::match_line("end"), Some((DirectiveId::End, "")));
//! assert_eq!(directives::match_line("ending"), None);
//! ```

/// Stable identifier for every recognized line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveId {
    WriteString,
    WriteVar,
    Var,
    For,
    While,
    End,
}

/// How a directive's matcher is compared against a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// The line starts with the literal; the remainder is everything after it.
    Prefix(&'static str),
    /// The whole line equals the literal; the remainder is empty.
    Exact(&'static str),
}

impl Matcher {
    /// The literal text of the matcher.
    pub const fn literal(self) -> &'static str {
        match self {
            Matcher::Prefix(s) | Matcher::Exact(s) => s,
        }
    }

    /// Match a trimmed line, returning the remainder on success.
    pub fn matches(self, line: &str) -> Option<&str> {
        match self {
            Matcher::Prefix(prefix) => line.strip_prefix(prefix),
            Matcher::Exact(exact) => (line == exact).then_some(""),
        }
    }
}

/// Effect a directive has on the block stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockEffect {
    None,
    Open,
    Close,
}

/// Source/target example pair for generated documentation and guardrail tests.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub source: &'static str,
    pub target: &'static str,
}

/// Metadata for a directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveInfo {
    pub id: DirectiveId,
    pub matcher: Matcher,
    pub block: BlockEffect,
    pub summary: &'static str,
    pub example: Example,
}

/// Registry of all directives, in classification priority order.
pub const DIRECTIVES: &[DirectiveInfo] = &[
    info(
        DirectiveId::WriteString,
        Matcher::Prefix("write string "),
        BlockEffect::None,
        "Print the rest of the line as a string literal (inserted verbatim, not escaped).",
        "write string Hello",
        "print(\"Hello\")",
    ),
    info(
        DirectiveId::WriteVar,
        Matcher::Prefix("write var "),
        BlockEffect::None,
        "Print the rest of the line as a bare expression.",
        "write var a + 1",
        "print(a + 1)",
    ),
    info(
        DirectiveId::Var,
        Matcher::Prefix("var "),
        BlockEffect::None,
        "Emit the line with the first occurrence of `var ` removed.",
        "var int a = 0",
        "int a = 0",
    ),
    info(
        DirectiveId::For,
        Matcher::Prefix("for "),
        BlockEffect::Open,
        "Open a `for` block; the remainder must split into exactly two parts around ` in `.",
        "for fruit in fruits",
        "for fruit in fruits:",
    ),
    info(
        DirectiveId::While,
        Matcher::Prefix("while "),
        BlockEffect::Open,
        "Open a `while` block over the rest of the line.",
        "while a < 100",
        "while a < 100:",
    ),
    info(
        DirectiveId::End,
        Matcher::Exact("end"),
        BlockEffect::Close,
        "Close the most recently opened block.",
        "end",
        "",
    ),
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (a bug in [`DIRECTIVES`]).
pub fn info_for(id: DirectiveId) -> &'static DirectiveInfo {
    DIRECTIVES
        .iter()
        .find(|d| d.id == id)
        .expect("INVARIANT: every DirectiveId has a DIRECTIVES entry")
}

/// Matcher for a directive.
pub fn matcher(id: DirectiveId) -> Matcher {
    info_for(id).matcher
}

/// Block effect for a directive.
pub fn block_effect(id: DirectiveId) -> BlockEffect {
    info_for(id).block
}

/// Classify a trimmed line against the registry in priority order.
///
/// ## Returns
/// - `Some((id, rest))` for the first directive whose matcher accepts the line.
/// - `None` if no directive matches.
pub fn match_line(line: &str) -> Option<(DirectiveId, &str)> {
    DIRECTIVES
        .iter()
        .find_map(|d| d.matcher.matches(line).map(|rest| (d.id, rest)))
}

const fn info(
    id: DirectiveId,
    matcher: Matcher,
    block: BlockEffect,
    summary: &'static str,
    source: &'static str,
    target: &'static str,
) -> DirectiveInfo {
    DirectiveInfo {
        id,
        matcher,
        block,
        summary,
        example: Example { source, target },
    }
}
