//! Diagnostics for dropped and unbalanced lines.
//!
//! Translation output is unaffected by diagnostics; these tests pin down what is reported and where.

use bplus::{DiagnosticKind, translate, translate_with_diagnostics};

fn reported(source: &str) -> Vec<(DiagnosticKind, usize)> {
    translate_with_diagnostics(source)
        .diagnostics
        .into_iter()
        .map(|d| (d.kind, d.line))
        .collect()
}

#[test]
fn unrecognized_line_reports_original_line_number() {
    assert_eq!(
        reported("\n\nhello there\nwrite var a\n"),
        vec![(DiagnosticKind::UnrecognizedLine, 3)]
    );
}

#[test]
fn malformed_for_is_reported_and_its_end_becomes_unbalanced() {
    assert_eq!(
        reported("for item\n  write var item\nend\n"),
        vec![
            (DiagnosticKind::MalformedForClause, 1),
            (DiagnosticKind::UnbalancedEnd, 3),
        ]
    );
}

#[test]
fn unbalanced_end_leaves_indentation_alone() {
    let source = "while a\nend\nend\nwrite var a";
    assert_eq!(reported(source), vec![(DiagnosticKind::UnbalancedEnd, 3)]);
    assert!(translate(source).ends_with("while a:\nprint(a)"));
}

#[test]
fn unterminated_blocks_point_at_their_opening_lines() {
    let translation = translate_with_diagnostics("for x in y\n  while z\n    write var x\n");
    let opened: Vec<_> = translation.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(opened, vec![2, 1]);
    assert!(translation
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::UnterminatedBlock));
}

#[test]
fn spans_cover_the_trimmed_line() {
    let source = "write var a\n    bogus line   \n";
    let translation = translate_with_diagnostics(source);
    let diag = &translation.diagnostics[0];
    assert_eq!(&source[diag.span.start..diag.span.end], "bogus line");
}

#[test]
fn diagnostics_do_not_change_output() {
    let noisy = "what\nwrite var a\nend\nfor nothing\n";
    let clean = "write var a\n";
    assert_eq!(translate(noisy), translate(clean));
}

#[test]
fn diagnostics_are_in_source_order_with_unterminated_last() {
    let kinds: Vec<_> = reported("while a\nend\nend\n??\nfor q\nwhile b\n")
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::UnbalancedEnd,
            DiagnosticKind::UnrecognizedLine,
            DiagnosticKind::MalformedForClause,
            DiagnosticKind::UnterminatedBlock,
        ]
    );
}
