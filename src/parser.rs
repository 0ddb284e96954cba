use std::fmt;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::token::{Token, TokenType};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Token that cannot start a primary expression.
    ExpectedExpression,
    /// A required token is missing, e.g. the `)` closing a group.
    ExpectedToken {
        expected: TokenType,
        found: String,
        message: String,
    },
    /// Groups or prefix operators nested past [`MAX_DEPTH`].
    TooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedExpression => write!(f, "Expected expression."),
            Self::ExpectedToken { message, .. } => f.write_str(message),
            Self::TooDeep => write!(f, "Expression nested too deeply."),
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

/// Result of parsing a token stream: the expressions that parsed, in
/// source order, and every error encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub expressions: Vec<Expr>,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Prefix rendering of each parsed expression.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.expressions.iter().map(crate::formatter::format).collect()
    }
}

/// Parse a token stream as a sequence of bare expressions.
///
/// A `;` right after an expression is accepted as a separator. After
/// an error the parser skips past the next `;` (or to end of input)
/// and carries on, so one bad expression never hides later ones. A
/// group missing its `)` is reported but still kept.
#[must_use]
pub fn parse(tokens: &[Token]) -> Parsed {
    Parser::new(tokens).parse()
}

/// Deepest nesting of groups and prefix operators the parser accepts.
pub const MAX_DEPTH: usize = 256;

type ParseResult = Result<Expr, ParseError>;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    fn parse(mut self) -> Parsed {
        let mut expressions = Vec::new();

        while !self.is_at_end() {
            self.depth = 0;
            match self.expression() {
                Ok(expr) => {
                    expressions.push(expr);
                    self.match_kind(TokenType::Semicolon);
                }
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        Parsed {
            expressions,
            errors: self.errors,
        }
    }

    fn expression(&mut self) -> ParseResult {
        self.equality()
    }

    fn equality(&mut self) -> ParseResult {
        let mut expr = self.comparison()?;
        while let Some(op) = self.match_binary(&[
            (TokenType::BangEqual, BinaryOp::NotEqual),
            (TokenType::EqualEqual, BinaryOp::Equal),
        ]) {
            let right = self.comparison()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult {
        let mut expr = self.term()?;
        while let Some(op) = self.match_binary(&[
            (TokenType::Greater, BinaryOp::Greater),
            (TokenType::GreaterEqual, BinaryOp::GreaterEqual),
            (TokenType::Less, BinaryOp::Less),
            (TokenType::LessEqual, BinaryOp::LessEqual),
        ]) {
            let right = self.term()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> ParseResult {
        let mut expr = self.factor()?;
        while let Some(op) = self.match_binary(&[
            (TokenType::Plus, BinaryOp::Add),
            (TokenType::Minus, BinaryOp::Subtract),
        ]) {
            let right = self.factor()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult {
        let mut expr = self.unary()?;
        while let Some(op) = self.match_binary(&[
            (TokenType::Star, BinaryOp::Multiply),
            (TokenType::Slash, BinaryOp::Divide),
        ]) {
            let right = self.unary()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult {
        let op = match self.peek_kind() {
            TokenType::Minus => UnaryOp::Negate,
            TokenType::Bang => UnaryOp::Not,
            _ => return self.primary(),
        };
        self.pos += 1;
        self.enter()?;
        let right = self.unary();
        self.depth -= 1;
        Ok(Expr::unary(op, right?))
    }

    fn primary(&mut self) -> ParseResult {
        let Some(token) = self.peek().filter(|t| t.kind != TokenType::Eof) else {
            return Err(self.error_here(ParseErrorKind::ExpectedExpression));
        };

        match (token.kind, &token.literal) {
            (TokenType::Number, Some(literal)) => {
                let value = literal.as_number().unwrap_or_default();
                self.pos += 1;
                Ok(Expr::Number(value))
            }
            (TokenType::String, Some(literal)) => {
                let text = literal.to_string();
                self.pos += 1;
                Ok(Expr::Str(text))
            }
            (TokenType::LeftParen, _) => {
                self.pos += 1;
                self.enter()?;
                let inner = self.expression();
                self.depth -= 1;
                let inner = inner?;
                // the group is kept even when its `)` is missing
                if let Err(err) =
                    self.expect(TokenType::RightParen, "Expect ')' after expression.")
                {
                    self.errors.push(err);
                }
                Ok(Expr::grouping(inner))
            }
            _ => Err(self.error_here(ParseErrorKind::ExpectedExpression)),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here(ParseErrorKind::TooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn match_binary(&mut self, ops: &[(TokenType, BinaryOp)]) -> Option<BinaryOp> {
        let kind = self.peek_kind();
        let op = ops
            .iter()
            .find_map(|&(candidate, op)| (candidate == kind).then_some(op))?;
        self.pos += 1;
        Some(op)
    }

    fn match_kind(&mut self, kind: TokenType) -> bool {
        if !self.is_at_end() && self.peek_kind() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenType, message: &str) -> Result<(), ParseError> {
        if self.match_kind(kind) {
            return Ok(());
        }
        let found = match self.peek() {
            Some(t) if t.kind != TokenType::Eof => t.lexeme.clone(),
            _ => "end".to_string(),
        };
        Err(self.error_here(ParseErrorKind::ExpectedToken {
            expected: kind,
            found,
            message: message.to_string(),
        }))
    }

    /// Skip tokens up to and including the next `;`, or up to `EOF`.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            let kind = self.peek_kind();
            self.pos += 1;
            if kind == TokenType::Semicolon {
                return;
            }
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token; running off the end reads as `EOF`.
    fn peek_kind(&self) -> TokenType {
        self.peek().map_or(TokenType::Eof, |t| t.kind)
    }

    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenType::Eof
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.current_line(),
        }
    }

    fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }
}
