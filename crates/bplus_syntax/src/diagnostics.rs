//! Diagnostics for B+ translation.
//!
//! Translation never fails outright. Lines that cannot be translated are still dropped from the output, but each
//! drop (and each unbalanced block) is recorded as a [`Diagnostic`] with the originating line so callers can surface
//! it. Diagnostics implement [`miette::Diagnostic`] and render with source context through a `miette::Report`.

use std::fmt;

use miette::{LabeledSpan, Severity, SourceSpan};
use thiserror::Error;

use crate::line::{BlockKind, Span};

/// Category of a translation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A non-blank line matched none of the directives.
    UnrecognizedLine,
    /// A `for` line whose remainder does not split into exactly two parts around ` in `.
    MalformedForClause,
    /// An `end` line with no open block.
    UnbalancedEnd,
    /// End of input reached while a block was still open.
    UnterminatedBlock,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 4] = [
        DiagnosticKind::UnrecognizedLine,
        DiagnosticKind::MalformedForClause,
        DiagnosticKind::UnbalancedEnd,
        DiagnosticKind::UnterminatedBlock,
    ];

    /// Stable diagnostic code, also used as the JSON `code` field.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedLine => "bplus::unrecognized-line",
            DiagnosticKind::MalformedForClause => "bplus::malformed-for",
            DiagnosticKind::UnbalancedEnd => "bplus::unbalanced-end",
            DiagnosticKind::UnterminatedBlock => "bplus::unterminated-block",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedLine => {
                "lines must start with `write string `, `write var `, `var `, `for `, `while ` or be exactly `end`"
            }
            DiagnosticKind::MalformedForClause => "write the loop as `for <name> in <iterable>`",
            DiagnosticKind::UnbalancedEnd => "remove this `end` or open a block before it",
            DiagnosticKind::UnterminatedBlock => "add an `end` line to close the block",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedLine => "dropped from the output",
            DiagnosticKind::MalformedForClause => "loop header dropped",
            DiagnosticKind::UnbalancedEnd => "nothing to close",
            DiagnosticKind::UnterminatedBlock => "opened here",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnrecognizedLine => write!(f, "unrecognized line"),
            DiagnosticKind::MalformedForClause => write!(f, "malformed for clause"),
            DiagnosticKind::UnbalancedEnd => write!(f, "unbalanced end"),
            DiagnosticKind::UnterminatedBlock => write!(f, "unterminated block"),
        }
    }
}

/// A translation diagnostic anchored to one source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number in the original source.
    pub line: usize,
    /// Byte span of the trimmed line text.
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn unrecognized_line(line: usize, span: Span, text: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnrecognizedLine,
            line,
            span,
            message: format!("unrecognized line `{}`", text),
        }
    }

    pub fn malformed_for(line: usize, span: Span, text: &str) -> Self {
        Self {
            kind: DiagnosticKind::MalformedForClause,
            line,
            span,
            message: format!("malformed for clause `{}`", text),
        }
    }

    pub fn unbalanced_end(line: usize, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::UnbalancedEnd,
            line,
            span,
            message: "`end` without an open block".to_string(),
        }
    }

    pub fn unterminated_block(line: usize, span: Span, kind: BlockKind) -> Self {
        Self {
            kind: DiagnosticKind::UnterminatedBlock,
            line,
            span,
            message: format!("`{}` block opened on line {} is never closed", kind, line),
        }
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Warning)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::from((self.span.start, self.span.len()));
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.label().to_string()),
            span,
        ))))
    }
}
