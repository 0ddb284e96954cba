//! Scanner and expression parser for a small C-like language.
//!
//! The scanner turns source text into [`Token`]s, collecting every
//! lexical error instead of stopping at the first. The parser reads
//! the token stream as a sequence of arithmetic and comparison
//! expressions and renders each one in fully-parenthesized prefix
//! form.
//!
//! # Quick start
//!
//! ```
//! let scanned = lox_front::scan("(1 + 2) * 3");
//! assert!(!scanned.has_errors());
//!
//! let parsed = lox_front::parse(&scanned.tokens);
//! assert_eq!(parsed.rendered(), vec!["(* (group (+ 1.0 2.0)) 3.0)"]);
//! ```
//!
//! # One-step parsing
//!
//! ```
//! let exprs = lox_front::parse_str("1 + 2 * 3").unwrap();
//! assert_eq!(exprs[0].to_string(), "(+ 1.0 (* 2.0 3.0))");
//!
//! let errors = lox_front::parse_str("1 + @").unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

pub mod ast;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, Scan, scan};
pub use parser::{MAX_DEPTH, ParseError, ParseErrorKind, Parsed, parse};
pub use token::{Literal, Token, TokenType};

/// Unified error type covering both scanning and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexical error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Scan and parse source text in one step.
///
/// # Errors
///
/// Returns every lexical error followed by every parse error when
/// either stage reported a problem.
pub fn parse_str(input: &str) -> Result<Vec<Expr>, Vec<Error>> {
    let scanned = scan(input);
    let parsed = parse(&scanned.tokens);

    if !scanned.has_errors() && !parsed.has_errors() {
        return Ok(parsed.expressions);
    }

    Err(scanned
        .errors
        .into_iter()
        .map(Error::from)
        .chain(parsed.errors.into_iter().map(Error::from))
        .collect())
}
