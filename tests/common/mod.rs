#![allow(dead_code)]

use lox_front::{TokenType, parse, scan};

/// Scan and parse, asserting neither stage reported an error.
pub fn render(input: &str) -> Vec<String> {
    let scanned = scan(input);
    assert!(
        !scanned.has_errors(),
        "lex errors for {input:?}: {:?}",
        scanned.errors
    );
    let parsed = parse(&scanned.tokens);
    assert!(
        !parsed.has_errors(),
        "parse errors for {input:?}: {:?}",
        parsed.errors
    );
    parsed.rendered()
}

/// Helper: render a single expression.
pub fn render_one(input: &str) -> String {
    let mut rendered = render(input);
    assert_eq!(rendered.len(), 1, "expected one expression in {input:?}");
    rendered.remove(0)
}

/// Token kinds of a scan, EOF included.
pub fn kinds(input: &str) -> Vec<TokenType> {
    scan(input).tokens.iter().map(|t| t.kind).collect()
}

/// Token listing as printed by `lox tokenize`.
pub fn listing(input: &str) -> Vec<String> {
    scan(input).tokens.iter().map(ToString::to_string).collect()
}
