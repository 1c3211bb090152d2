//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Component, Path};

use bplus_syntax::Diagnostic;
use miette::{NamedSource, Report};
use serde_json::json;

use super::samples::{self, SAMPLES};
use super::{CliError, CliResult, DiagnosticFormat, ExitCode};
use crate::backend::{Translation, Translator};
use crate::config::TranslateConfig;
use crate::sink::{FileSink, TranslationSink, WriterSink};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Reject output paths containing `..`; warn about absolute ones.
pub fn validate_output_path(path: &Path) -> CliResult<()> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::failure(format!(
            "Output path '{}' contains path traversal (..)",
            path.display()
        )));
    }

    if path.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            path.display()
        );
    }

    Ok(())
}

/// Render diagnostics for display.
pub fn render_diagnostics(
    file_name: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    format: DiagnosticFormat,
) -> String {
    match format {
        DiagnosticFormat::Human => {
            let mut out = String::new();
            for diag in diagnostics {
                let report = Report::new(diag.clone())
                    .with_source_code(NamedSource::new(file_name, source.to_string()));
                out.push_str(&format!("{:?}\n", report));
            }
            out
        }
        DiagnosticFormat::Json => {
            let items: Vec<_> = diagnostics
                .iter()
                .map(|d| {
                    json!({
                        "code": d.kind.code(),
                        "kind": d.kind.to_string(),
                        "file": file_name,
                        "line": d.line,
                        "start": d.span.start,
                        "end": d.span.end,
                        "message": d.message,
                        "help": d.kind.help(),
                    })
                })
                .collect();
            format!("{}\n", serde_json::Value::Array(items))
        }
    }
}

fn translate_source(file_path: &Path) -> CliResult<(String, Translation)> {
    let source = read_source(file_path)?;
    let translation = Translator::new(TranslateConfig::default()).translate(&source);
    Ok((source, translation))
}

/// Translate a file and write the result.
///
/// Without `-o`, the translation goes to `output.py` unless `--stdout` was requested on its own.
pub fn translate_file(
    file_path: &Path,
    output: Option<&Path>,
    to_stdout: bool,
    strict: bool,
    format: DiagnosticFormat,
) -> CliResult<ExitCode> {
    let (source, translation) = translate_source(file_path)?;

    let file_sink = match (output, to_stdout) {
        (Some(path), _) => Some(FileSink::new(path)),
        (None, false) => Some(FileSink::default_output()),
        (None, true) => None,
    };

    if let Some(mut sink) = file_sink {
        validate_output_path(sink.path())?;
        sink.accept(&translation.text)
            .map_err(|e| CliError::failure(e.to_string()))?;
        tracing::info!(output = %sink.path().display(), "translated {}", file_path.display());
    }
    if to_stdout {
        WriterSink::stdout()
            .accept(&translation.text)
            .map_err(|e| CliError::failure(e.to_string()))?;
    }

    if !translation.diagnostics.is_empty() {
        let name = file_path.display().to_string();
        eprint!("{}", render_diagnostics(&name, &source, &translation.diagnostics, format));
    }

    if strict && !translation.is_clean() {
        return Err(CliError::failure(format!(
            "{} diagnostic(s) in strict mode",
            translation.diagnostics.len()
        )));
    }
    Ok(ExitCode::SUCCESS)
}

/// Report diagnostics for a file without writing output.
pub fn check_file(file_path: &Path, format: DiagnosticFormat) -> CliResult<ExitCode> {
    let (source, translation) = translate_source(file_path)?;
    let name = file_path.display().to_string();

    if translation.is_clean() {
        match format {
            DiagnosticFormat::Human => println!("✓ {} translates cleanly", name),
            DiagnosticFormat::Json => println!("[]"),
        }
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", render_diagnostics(&name, &source, &translation.diagnostics, format));
    Ok(ExitCode::FAILURE)
}

/// Print a bundled sample, or list them.
pub fn print_example(name: Option<&str>) -> CliResult<ExitCode> {
    let Some(name) = name else {
        for sample in SAMPLES {
            println!("{:<16} {}", sample.name, sample.summary);
        }
        return Ok(ExitCode::SUCCESS);
    };

    let sample = samples::find(name).ok_or_else(|| {
        let known: Vec<_> = SAMPLES.iter().map(|s| s.name).collect();
        CliError::failure(format!("Unknown example '{}' (available: {})", name, known.join(", ")))
    })?;
    print!("{}", sample.source);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bplus_syntax::Span;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bplus_cli_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_validate_output_path_rejects_parent_dir() {
        assert!(validate_output_path(Path::new("../out.py")).is_err());
        assert!(validate_output_path(Path::new("build/../out.py")).is_err());
    }

    #[test]
    fn test_validate_output_path_accepts_relative() {
        assert!(validate_output_path(Path::new("output.py")).is_ok());
        assert!(validate_output_path(Path::new("build/out.py")).is_ok());
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.bp")).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_render_json() {
        let diags = vec![Diagnostic::unbalanced_end(2, Span::new(4, 7))];
        let rendered = render_diagnostics("prog.bp", "x\n  end\n", &diags, DiagnosticFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["code"], "bplus::unbalanced-end");
        assert_eq!(value[0]["line"], 2);
        assert_eq!(value[0]["start"], 4);
        assert_eq!(value[0]["file"], "prog.bp");
    }

    #[test]
    fn test_render_human_mentions_message() {
        let diags = vec![Diagnostic::unrecognized_line(1, Span::new(0, 4), "oops")];
        let rendered = render_diagnostics("prog.bp", "oops\n", &diags, DiagnosticFormat::Human);
        assert!(rendered.contains("unrecognized line `oops`"));
    }

    #[test]
    fn test_translate_file_writes_output() {
        let src = temp_path("in.bp");
        let out = temp_path("out.py");
        fs::write(&src, "while a < 3\n  write var a\nend\n").unwrap();

        let code = translate_file(&src, Some(out.as_path()), false, true, DiagnosticFormat::Human).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "import numpy as np\nimport pandas as pd\n\nwhile a < 3:\n    print(a)"
        );

        let _ = fs::remove_file(&src);
        let _ = fs::remove_file(&out);
    }

    #[test]
    fn test_translate_file_strict_fails_but_still_writes() {
        let src = temp_path("strict_in.bp");
        let out = temp_path("strict_out.py");
        fs::write(&src, "nonsense\nwrite var a\n").unwrap();

        let err = translate_file(&src, Some(out.as_path()), false, true, DiagnosticFormat::Json).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(fs::read_to_string(&out).unwrap().ends_with("print(a)"));

        let _ = fs::remove_file(&src);
        let _ = fs::remove_file(&out);
    }

    #[test]
    fn test_check_file_exit_codes() {
        let clean = temp_path("clean.bp");
        let dirty = temp_path("dirty.bp");
        fs::write(&clean, "write var a\n").unwrap();
        fs::write(&dirty, "end\n").unwrap();

        assert_eq!(check_file(&clean, DiagnosticFormat::Json).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check_file(&dirty, DiagnosticFormat::Json).unwrap(), ExitCode::FAILURE);

        let _ = fs::remove_file(&clean);
        let _ = fs::remove_file(&dirty);
    }

    #[test]
    fn test_print_unknown_example() {
        let err = print_example(Some("nope")).unwrap_err();
        assert!(err.message.contains("fibonacci"));
    }
}
