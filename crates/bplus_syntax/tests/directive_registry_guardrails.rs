use std::collections::HashSet;

use bplus_syntax::directives::{self, BlockEffect, DIRECTIVES, DirectiveId, Matcher};

/// Exhaustive list of ids; adding a variant without listing it here fails to compile.
fn all_ids() -> Vec<DirectiveId> {
    let ids = [
        DirectiveId::WriteString,
        DirectiveId::WriteVar,
        DirectiveId::Var,
        DirectiveId::For,
        DirectiveId::While,
        DirectiveId::End,
    ];
    for id in ids {
        match id {
            DirectiveId::WriteString
            | DirectiveId::WriteVar
            | DirectiveId::Var
            | DirectiveId::For
            | DirectiveId::While
            | DirectiveId::End => {}
        }
    }
    ids.to_vec()
}

#[test]
fn every_directive_has_exactly_one_entry() {
    for id in all_ids() {
        let count = DIRECTIVES.iter().filter(|d| d.id == id).count();
        assert_eq!(count, 1, "expected exactly one registry entry for {:?}", id);
    }
    assert_eq!(DIRECTIVES.len(), all_ids().len());
}

#[test]
fn matcher_literals_are_unique() {
    let mut seen = HashSet::new();
    for info in DIRECTIVES {
        assert!(
            seen.insert(info.matcher.literal()),
            "duplicate matcher literal {:?}",
            info.matcher.literal()
        );
    }
}

#[test]
fn registry_order_is_classification_priority() {
    let order: Vec<_> = DIRECTIVES.iter().map(|d| d.id).collect();
    assert_eq!(order, all_ids());
}

#[test]
fn examples_classify_as_their_own_directive() {
    for info in DIRECTIVES {
        let matched = directives::match_line(info.example.source).map(|(id, _)| id);
        assert_eq!(
            matched,
            Some(info.id),
            "example {:?} does not classify as {:?}",
            info.example.source,
            info.id
        );
    }
}

#[test]
fn only_end_is_exact_and_closes() {
    for info in DIRECTIVES {
        let is_end = info.id == DirectiveId::End;
        assert_eq!(matches!(info.matcher, Matcher::Exact(_)), is_end);
        assert_eq!(info.block == BlockEffect::Close, is_end);
    }
}

#[test]
fn prefix_matchers_end_with_a_space() {
    for info in DIRECTIVES {
        if let Matcher::Prefix(prefix) = info.matcher {
            assert!(prefix.ends_with(' '), "prefix {:?} must end with a space", prefix);
        }
    }
}
