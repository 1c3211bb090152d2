//! Render the language reference from the directive registry.
//!
//! The reference only lists line shapes the translator actually understands, so it cannot drift from the
//! classification rules.

use bplus_syntax::directives::{BlockEffect, DIRECTIVES, Matcher};

use crate::config::DEFAULT_PREAMBLE;

/// Render the reference as plain text.
pub fn render_reference() -> String {
    let mut out = String::new();
    out.push_str("B+ LANGUAGE REFERENCE\n\n");
    out.push_str("Each non-blank line is matched against the shapes below, in order; the first match wins.\n");
    out.push_str("Leading and trailing whitespace is ignored. Lines matching nothing are dropped.\n\n");

    for (index, info) in DIRECTIVES.iter().enumerate() {
        let shape = match info.matcher {
            Matcher::Prefix(prefix) => format!("{}...", prefix),
            Matcher::Exact(exact) => exact.to_string(),
        };
        let effect = match info.block {
            BlockEffect::None => "",
            BlockEffect::Open => " [opens a block]",
            BlockEffect::Close => " [closes a block]",
        };
        out.push_str(&format!("{}. {}{}\n", index + 1, shape, effect));
        out.push_str(&format!("   {}\n", info.summary));
        if !info.example.target.is_empty() {
            out.push_str(&format!("   {}  =>  {}\n", info.example.source, info.example.target));
        }
        out.push('\n');
    }

    out.push_str("Every translation starts with:\n");
    for line in DEFAULT_PREAMBLE {
        out.push_str(&format!("   {}\n", line));
    }
    out
}
