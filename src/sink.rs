//! Output surfaces for translated programs.
//!
//! Translation itself produces a string. Where that string goes (a file, stdout, an editor pane) is decided by the
//! caller through a [`TranslationSink`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.py";

/// Errors raised while handing translated text to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Receiver of a finished translation.
pub trait TranslationSink {
    fn accept(&mut self, text: &str) -> Result<(), SinkError>;
}

/// Persists the translation to a file, replacing previous contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink writing to `output.py` in the current directory.
    pub fn default_output() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranslationSink for FileSink {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        fs::write(&self.path, text).map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "wrote translation");
        Ok(())
    }
}

/// Writes the translation to any [`io::Write`], followed by a newline.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TranslationSink for WriterSink<W> {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps the most recently accepted translation in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    last: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl TranslationSink for MemorySink {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

impl<S: TranslationSink + ?Sized> TranslationSink for &mut S {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).accept(text)
    }
}
