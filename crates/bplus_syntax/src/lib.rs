//! Syntax frontend for the B+ language: directive registry, line classification, diagnostics.
//!
//! This crate is dependency-light and shared by the translator, the CLI and tooling such as the fuzz target.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it classifies lines but keeps no indentation or block state. The
//!   state machine lives in `bplus::backend`.
//! - The recognized line shapes come from the [`directives`] registry.
//!
//! ## Examples
//! ```rust
//! use bplus_syntax::line::{self, LineKind};
//!
//! let kinds: Vec<_> = line::split_lines("while x\n\nend\n").map(|l| line::classify(l.text)).collect();
//! assert_eq!(kinds, vec![LineKind::While("x"), LineKind::End]);
//! ```

pub mod diagnostics;
pub mod directives;
pub mod line;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use line::{BlockKind, LineKind, SourceLine, Span};
