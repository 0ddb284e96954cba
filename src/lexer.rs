use std::fmt;

use crate::token::{Literal, Token, TokenType};

/// Classifies a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal still open at end of input.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character: {ch}")
            }
            Self::UnterminatedString => write!(f, "Unterminated string."),
        }
    }
}

/// Error produced during scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

/// Result of a scan: every recognized token plus every lexical error.
///
/// The token list always ends with an `EOF` token.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scan {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Line counter value reached at end of input.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.tokens.last().map_or(1, |eof| eof.line)
    }
}

/// Scan source text into tokens.
///
/// Scanning never stops on an error: unexpected characters are
/// skipped one at a time, and an unterminated string consumes the
/// rest of the input without producing a token.
#[must_use]
pub fn scan(source: &str) -> Scan {
    Scanner::new(source).scan()
}

struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn scan(mut self) -> Scan {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token {
            kind: TokenType::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });

        Scan {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '=' => self.add_either('=', TokenType::EqualEqual, TokenType::Equal),
            '!' => self.add_either('=', TokenType::BangEqual, TokenType::Bang),
            '>' => self.add_either('=', TokenType::GreaterEqual, TokenType::Greater),
            '<' => self.add_either('=', TokenType::LessEqual, TokenType::Less),
            '/' => {
                if self.match_char('/') {
                    // line comment
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            '"' => self.read_string(),
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            c if c.is_ascii_digit() => self.read_number(),
            c if is_identifier_start(c) => self.read_identifier(),
            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn add_either(&mut self, next: char, matched: TokenType, single: TokenType) {
        let kind = if self.match_char(next) { matched } else { single };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenType) {
        self.push_token(kind, None);
    }

    fn push_token(&mut self, kind: TokenType, literal: Option<Literal>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.source[self.start..self.current].to_string(),
            literal,
            line: self.line,
        });
    }

    fn error(&mut self, kind: LexErrorKind) {
        self.errors.push(LexError {
            kind,
            line: self.line,
        });
    }

    fn read_string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexErrorKind::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        // The token is attributed to the line reached after the closing
        // quote, so a multi-line string reports its last line.
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_token(TokenType::String, Some(Literal::Str(value)));
    }

    fn read_number(&mut self) {
        self.consume_digits();

        let fractional =
            self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if fractional {
            self.advance(); // dot
            self.consume_digits();
        }

        let text = &self.source[self.start..self.current];
        let integer = if fractional {
            None
        } else {
            text.parse().ok().map(Literal::Integer)
        };
        // digit runs always parse as f64
        let literal = integer
            .unwrap_or_else(|| Literal::Float(text.parse().unwrap_or(f64::NAN)));

        self.push_token(TokenType::Number, Some(literal));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn read_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenType::keyword(text).unwrap_or(TokenType::Identifier);
        self.add_token(kind);
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
