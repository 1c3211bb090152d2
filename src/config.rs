//! Translation configuration.
//!
//! The defaults reproduce the reference output exactly: 4-space indentation and a fixed two-line import preamble
//! followed by one blank line.

/// Import lines emitted at the top of every translation, before the blank separator line.
pub const DEFAULT_PREAMBLE: [&str; 2] = ["import numpy as np", "import pandas as pd"];

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    /// Number of spaces added per open block
    pub indent_width: usize,
    /// Header lines; a blank line is always emitted after them
    pub preamble: Vec<String>,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            preamble: DEFAULT_PREAMBLE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TranslateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Replace the preamble lines
    pub fn with_preamble<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preamble = lines.into_iter().map(Into::into).collect();
        self
    }
}
