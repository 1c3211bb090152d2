//! Output writer with indentation tracking
//!
//! Collects emitted target lines, prefixing each with the current indentation.

/// Writer that tracks indentation and builds the translated program
#[derive(Debug)]
pub struct OutputWriter {
    /// Emitted lines, without trailing newlines
    lines: Vec<String>,
    /// Current indentation in spaces
    indent: usize,
    /// Spaces added per open block
    indent_width: usize,
}

impl OutputWriter {
    /// Create a writer that starts with `preamble` followed by one blank line
    pub fn new(preamble: &[String], indent_width: usize) -> Self {
        let mut lines = Vec::with_capacity(preamble.len() + 1);
        lines.extend(preamble.iter().cloned());
        lines.push(String::new());
        Self {
            lines,
            indent: 0,
            indent_width,
        }
    }

    /// Emit one line at the current indentation
    pub fn emit(&mut self, line: &str) {
        self.lines.push(format!("{}{}", " ".repeat(self.indent), line));
    }

    /// Enter a block body; returns the indentation active before entering
    pub fn open_block(&mut self) -> usize {
        let before = self.indent;
        self.indent += self.indent_width;
        before
    }

    /// Restore the indentation recorded when a block was opened
    pub fn restore(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// Join the emitted lines with `'\n'`
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> OutputWriter {
        let preamble = vec!["import numpy as np".to_string(), "import pandas as pd".to_string()];
        OutputWriter::new(&preamble, 4)
    }

    #[test]
    fn test_new_writer_is_preamble_and_blank() {
        assert_eq!(default_writer().finish(), "import numpy as np\nimport pandas as pd\n");
    }

    #[test]
    fn test_empty_preamble_leaves_only_separator() {
        let writer = OutputWriter::new(&[], 4);
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_emit_at_zero() {
        let mut writer = OutputWriter::new(&[], 4);
        writer.emit("print(a)");
        assert_eq!(writer.finish(), "\nprint(a)");
    }

    #[test]
    fn test_open_block_indents_following_lines() {
        let mut writer = OutputWriter::new(&[], 4);
        writer.emit("while x:");
        let before = writer.open_block();
        writer.emit("print(x)");
        writer.restore(before);
        writer.emit("print(0)");
        assert_eq!(writer.finish(), "\nwhile x:\n    print(x)\nprint(0)");
    }

    #[test]
    fn test_open_block_returns_previous_indent() {
        let mut writer = default_writer();
        assert_eq!(writer.open_block(), 0);
        assert_eq!(writer.open_block(), 4);
        writer.emit("x");
        assert_eq!(writer.finish(), "import numpy as np\nimport pandas as pd\n\n        x");
    }

    #[test]
    fn test_custom_indent_width() {
        let mut writer = OutputWriter::new(&[], 2);
        writer.open_block();
        writer.emit("x");
        assert_eq!(writer.finish(), "\n  x");
    }
}
