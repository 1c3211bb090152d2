#![forbid(unsafe_code)]
//! B+ to Python translator
//!
//! B+ is a tiny line-oriented pseudocode. This crate turns a B+ program into an equivalent Python program, one line
//! at a time, tracking `for`/`while`/`end` nesting with an explicit block stack.
//!
//! ## Layout
//!
//! - [`bplus_syntax`] (re-exported as [`syntax`]): directive registry, line classification, diagnostics
//! - [`backend`]: the translator state machine and output writer
//! - [`sink`]: where translated text goes (file, stdout, memory)
//! - [`cli`]: the `bplus` command-line tool
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: use `.expect("INVARIANT: reason")`.
//!
//! ## Examples
//! ```rust
//! let python = bplus::translate("var int a = 0\nwhile a < 100\n    write var a\nend\n");
//! assert_eq!(
//!     python,
//!     "import numpy as np\nimport pandas as pd\n\nint a = 0\nwhile a < 100:\n    print(a)"
//! );
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod sink;
pub mod version;

pub use bplus_syntax as syntax;
pub use bplus_syntax::{Diagnostic, DiagnosticKind};

pub use backend::{Translation, Translator, translate, translate_to, translate_with_diagnostics};
pub use config::TranslateConfig;
pub use sink::{FileSink, MemorySink, SinkError, TranslationSink, WriterSink};
