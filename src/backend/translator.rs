//! The B+ to Python translator.
//!
//! A single forward pass over the source lines. Each non-blank line is classified by
//! [`bplus_syntax::line::classify`] and handled by exactly one arm of a `match`; block nesting is tracked with an
//! explicit [`BlockStack`] whose frames remember the indentation to restore on `end`.
//!
//! All mutable state for a run lives in [`TranslationState`], created per call, so a [`Translator`] can be shared
//! across threads and invoked concurrently.

use bplus_syntax::line::{self, BlockKind, LineKind, SourceLine, Span};
use bplus_syntax::Diagnostic;

use super::writer::OutputWriter;
use crate::config::TranslateConfig;

/// An open `for`/`while` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFrame {
    pub kind: BlockKind,
    /// Indentation (in spaces) active before the block's body was entered.
    pub indent_at_open: usize,
    /// Line number of the opening line.
    pub opened_at: usize,
    /// Span of the opening line.
    pub span: Span,
}

/// LIFO stack of open blocks.
#[derive(Debug, Default)]
pub struct BlockStack {
    frames: Vec<BlockFrame>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: BlockFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<BlockFrame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Drain remaining frames, innermost first.
    fn drain_innermost_first(&mut self) -> impl Iterator<Item = BlockFrame> + '_ {
        self.frames.drain(..).rev()
    }
}

/// Result of one translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The generated program, preamble included.
    pub text: String,
    /// Everything that was dropped or left unbalanced, in source order (unterminated blocks last).
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Per-run state threaded through the line handlers.
struct TranslationState {
    writer: OutputWriter,
    blocks: BlockStack,
    diagnostics: Vec<Diagnostic>,
}

impl TranslationState {
    fn new(config: &TranslateConfig) -> Self {
        Self {
            writer: OutputWriter::new(&config.preamble, config.indent_width),
            blocks: BlockStack::new(),
            diagnostics: Vec::new(),
        }
    }

    fn step(&mut self, line: SourceLine<'_>) {
        match line::classify(line.text) {
            LineKind::WriteString(rest) => self.writer.emit(&format!("print(\"{}\")", rest)),
            LineKind::WriteVar(rest) => self.writer.emit(&format!("print({})", rest)),
            LineKind::Var(stripped) => self.writer.emit(&stripped),
            LineKind::For { binding, iterable } => {
                self.writer.emit(&format!("for {} in {}:", binding, iterable));
                self.open(BlockKind::For, &line);
            }
            LineKind::While(condition) => {
                self.writer.emit(&format!("while {}:", condition));
                self.open(BlockKind::While, &line);
            }
            LineKind::End => match self.blocks.pop() {
                Some(frame) => {
                    tracing::trace!(kind = %frame.kind, line = line.number, indent = frame.indent_at_open, "close block");
                    self.writer.restore(frame.indent_at_open);
                }
                None => self.drop_line(Diagnostic::unbalanced_end(line.number, line.span)),
            },
            LineKind::MalformedFor(_) => {
                self.drop_line(Diagnostic::malformed_for(line.number, line.span, line.text))
            }
            LineKind::Unrecognized => {
                self.drop_line(Diagnostic::unrecognized_line(line.number, line.span, line.text))
            }
        }
    }

    fn open(&mut self, kind: BlockKind, line: &SourceLine<'_>) {
        let indent_at_open = self.writer.open_block();
        tracing::trace!(%kind, line = line.number, indent = indent_at_open, depth = self.blocks.depth() + 1, "open block");
        self.blocks.push(BlockFrame {
            kind,
            indent_at_open,
            opened_at: line.number,
            span: line.span,
        });
    }

    fn drop_line(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(line = diagnostic.line, kind = %diagnostic.kind, "dropping line");
        self.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> Translation {
        let unterminated: Vec<_> = self
            .blocks
            .drain_innermost_first()
            .map(|frame| Diagnostic::unterminated_block(frame.opened_at, frame.span, frame.kind))
            .collect();
        self.diagnostics.extend(unterminated);

        Translation {
            text: self.writer.finish(),
            diagnostics: self.diagnostics,
        }
    }
}

/// Translator from B+ source to Python source.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslateConfig,
}

impl Translator {
    pub fn new(config: TranslateConfig) -> Self {
        Self { config }
    }

    /// Translate `source`, collecting diagnostics for every dropped or unbalanced line.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn translate(&self, source: &str) -> Translation {
        let mut state = TranslationState::new(&self.config);
        for line in line::split_lines(source) {
            state.step(line);
        }
        let translation = state.finish();
        tracing::debug!(diagnostics = translation.diagnostics.len(), "translation finished");
        translation
    }
}
