//! Backend: B+ lines to Python lines.
//!
//! ## Entry points
//!
//! - [`translate`]: the plain contract; returns only the program text and never fails.
//! - [`translate_with_diagnostics`]: same output plus the diagnostics for dropped and unbalanced lines.
//! - [`translate_to`]: translate and hand the text to a caller-supplied [`TranslationSink`].
//!
//! Use [`Translator`] directly for a non-default [`TranslateConfig`].

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod translator;
mod writer;

pub use translator::{BlockFrame, BlockStack, Translation, Translator};
pub use writer::OutputWriter;

use crate::config::TranslateConfig;
use crate::sink::{SinkError, TranslationSink};

/// Translate B+ source into Python source with the default configuration.
pub fn translate(source: &str) -> String {
    translate_with_diagnostics(source).text
}

/// Translate B+ source, keeping the diagnostics.
pub fn translate_with_diagnostics(source: &str) -> Translation {
    Translator::new(TranslateConfig::default()).translate(source)
}

/// Translate B+ source and deliver the text to `sink`.
///
/// ## Errors
///
/// Only the sink can fail; translation itself always succeeds.
pub fn translate_to<S: TranslationSink>(source: &str, mut sink: S) -> Result<Translation, SinkError> {
    let translation = translate_with_diagnostics(source);
    sink.accept(&translation.text)?;
    Ok(translation)
}
