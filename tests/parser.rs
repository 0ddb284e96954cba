//! Parser edge cases and error tests.

mod common;

use common::{render, render_one};
use lox_front::{Error, MAX_DEPTH, ParseErrorKind, TokenType, parse, parse_str, scan};

// -----------------------------------------------------------
// Rendering.
// -----------------------------------------------------------

#[test]
fn parse_precedence() {
    assert_eq!(render_one("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
}

#[test]
fn parse_grouping() {
    assert_eq!(render_one("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
}

#[test]
fn parse_nested_groups() {
    assert_eq!(render_one("((\"x\"))"), "(group (group x))");
}

#[test]
fn parse_full_precedence_ladder() {
    assert_eq!(
        render_one("-1 * 2 + 3 > 4 == !5"),
        "(== (> (+ (* (- 1.0) 2.0) 3.0) 4.0) (! 5.0))"
    );
}

#[test]
fn parse_fractional_number_keeps_one_digit() {
    assert_eq!(render_one("12.76"), "12.8");
    assert_eq!(render_one("0.5"), "0.5");
}

#[test]
fn parse_string_comparison() {
    assert_eq!(render_one("\"foo\" == \"bar\""), "(== foo bar)");
}

#[test]
fn parse_multiline_input() {
    assert_eq!(
        render("1 +\n2\n(3)\n"),
        vec!["(+ 1.0 2.0)", "(group 3.0)"]
    );
}

// -----------------------------------------------------------
// Parser errors.
// -----------------------------------------------------------

#[test]
fn parse_error_identifier_is_not_expression() {
    let tokens = scan("foo").tokens;
    let parsed = parse(&tokens);
    assert!(parsed.expressions.is_empty());
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::ExpectedExpression);
}

#[test]
fn parse_error_keyword_literals_are_not_expressions() {
    for source in ["true", "false", "nil"] {
        let parsed = parse(&scan(source).tokens);
        assert_eq!(parsed.errors.len(), 1, "{source}");
    }
}

#[test]
fn parse_error_missing_close_paren_found_token() {
    let parsed = parse(&scan("(1 2").tokens);
    assert!(matches!(
        &parsed.errors[0].kind,
        ParseErrorKind::ExpectedToken {
            expected: TokenType::RightParen,
            found,
            ..
        } if found == "2"
    ));
    assert_eq!(
        parsed.errors[0].to_string(),
        "[line 1] Error: Expect ')' after expression."
    );
}

#[test]
fn parse_error_missing_close_paren_keeps_group() {
    let parsed = parse(&scan("(1 + 2").tokens);
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.rendered(), vec!["(group (+ 1.0 2.0))"]);

    let parsed = parse(&scan("(1 2").tokens);
    assert_eq!(parsed.rendered(), vec!["(group 1.0)", "2.0"]);
}

#[test]
fn parse_error_deep_nesting_does_not_crash() {
    let source = "(".repeat(5_000) + "1" + &")".repeat(5_000);
    let parsed = parse(&scan(&source).tokens);
    assert!(parsed.expressions.is_empty());
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::TooDeep);
}

#[test]
fn parse_error_deep_nesting_recovers_at_semicolon() {
    let source = "-".repeat(MAX_DEPTH + 1) + "1; 3 + 4";
    let parsed = parse(&scan(&source).tokens);
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.rendered(), vec!["(+ 3.0 4.0)"]);
}

#[test]
fn parse_error_does_not_stall() {
    let parsed = parse(&scan(") ) )").tokens);
    assert!(parsed.expressions.is_empty());
    assert_eq!(parsed.errors.len(), 1);
}

#[test]
fn parse_error_recovery_keeps_later_expressions() {
    let parsed = parse(&scan("1 * ; var; (2)").tokens);
    assert_eq!(parsed.errors.len(), 2);
    assert_eq!(parsed.rendered(), vec!["(group 2.0)"]);
}

#[test]
fn parse_error_trailing_operator_at_end() {
    let parsed = parse(&scan("1 +\n\n").tokens);
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].line, 3);
}

// -----------------------------------------------------------
// parse_str.
// -----------------------------------------------------------

#[test]
fn parse_str_convenience() {
    let exprs = parse_str("1 <= 2").unwrap();
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].to_string(), "(<= 1.0 2.0)");
}

#[test]
fn parse_str_lex_errors_come_first() {
    let errors = parse_str("1 + ;\n@").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], Error::Lex(_)));
    assert!(matches!(errors[1], Error::Parse(_)));
    assert_eq!(errors[0].to_string(), "[line 2] Error: Unexpected character: @");
}

#[test]
fn parse_str_lex_error_still_parses_remaining_tokens() {
    let scanned = scan("1 + # 2");
    assert!(scanned.has_errors());
    let parsed = parse(&scanned.tokens);
    assert!(!parsed.has_errors());
    assert_eq!(parsed.rendered(), vec!["(+ 1.0 2.0)"]);
}
