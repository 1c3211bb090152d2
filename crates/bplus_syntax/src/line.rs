//! Line splitting and classification.
//!
//! B+ has no tokens and no expressions: a program is a list of lines, and each trimmed line is classified by literal
//! prefix into a [`LineKind`]. The kinds form a closed set; every consumer matches on it exhaustively.
//!
//! ## Examples
//! ```rust
//! use bplus_syntax::line::{classify, LineKind};
//!
//! assert_eq!(classify("for x in items"), LineKind::For { binding: "x", iterable: "items" });
//! assert_eq!(classify("var int a = 0"), LineKind::Var("int a = 0".to_string()));
//! assert_eq!(classify("print hello"), LineKind::Unrecognized);
//! ```

use std::fmt;

use crate::directives::{self, DirectiveId};

/// Byte range into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kind of an indentation-introducing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    For,
    While,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::For => write!(f, "for"),
            BlockKind::While => write!(f, "while"),
        }
    }
}

/// A non-blank source line, trimmed, with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    pub span: Span,
    pub text: &'a str,
}

/// Characters stripped from both ends of a line: Unicode whitespace plus the ASCII information separators
/// (`\x1c`..=`\x1f`), which Python's `str.strip` also treats as whitespace.
fn is_line_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split `source` on `'\n'`, trim each line and skip blank ones.
///
/// Trimming also removes a trailing `'\r'`, so CRLF input classifies the same as LF input.
pub fn split_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0usize;
    source.split('\n').enumerate().filter_map(move |(index, raw)| {
        let line_start = offset;
        offset += raw.len() + 1;

        let text = raw.trim_matches(is_line_padding);
        if text.is_empty() {
            return None;
        }
        let start = line_start + (raw.len() - raw.trim_start_matches(is_line_padding).len());
        Some(SourceLine {
            number: index + 1,
            span: Span::new(start, start + text.len()),
            text,
        })
    })
}

/// Classified line shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `write string <rest>`; `rest` is emitted verbatim inside quotes.
    WriteString(&'a str),
    /// `write var <rest>`; `rest` is emitted as a bare expression.
    WriteVar(&'a str),
    /// `var ...`; the line with its first `var ` removed.
    Var(String),
    /// `for <binding> in <iterable>`, both parts trimmed.
    For { binding: &'a str, iterable: &'a str },
    /// `for <rest>` where `rest` does not split into exactly two parts around ` in `.
    MalformedFor(&'a str),
    /// `while <condition>`.
    While(&'a str),
    /// Exactly `end`.
    End,
    /// Anything else.
    Unrecognized,
}

/// Classify an already trimmed, non-blank line.
pub fn classify(line: &str) -> LineKind<'_> {
    let Some((id, rest)) = directives::match_line(line) else {
        return LineKind::Unrecognized;
    };

    match id {
        DirectiveId::WriteString => LineKind::WriteString(rest),
        DirectiveId::WriteVar => LineKind::WriteVar(rest),
        // Only the first occurrence is removed; later `var ` substrings stay.
        DirectiveId::Var => LineKind::Var(line.replacen("var ", "", 1)),
        DirectiveId::For => {
            let mut parts = rest.split(" in ");
            match (parts.next(), parts.next(), parts.next()) {
                (Some(binding), Some(iterable), None) => LineKind::For {
                    binding: binding.trim(),
                    iterable: iterable.trim(),
                },
                _ => LineKind::MalformedFor(rest),
            }
        }
        DirectiveId::While => LineKind::While(rest),
        DirectiveId::End => LineKind::End,
    }
}
