/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// String literal, quotes stripped.
    Str(String),
    /// Parenthesized sub-expression.
    Grouping(Box<Self>),
    /// Prefix operator application.
    Unary { op: UnaryOp, right: Box<Self> },
    /// Infix operator application.
    Binary {
        left: Box<Self>,
        op: BinaryOp,
        right: Box<Self>,
    },
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Negate,
    /// `!`
    Not,
}

/// Infix operators, grouped by precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // equality
    NotEqual,
    Equal,
    // comparison
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // term
    Add,
    Subtract,
    // factor
    Multiply,
    Divide,
}

impl UnaryOp {
    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

impl BinaryOp {
    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NotEqual => "!=",
            Self::Equal => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl Expr {
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping(Box::new(inner))
    }

    #[must_use]
    pub fn unary(op: UnaryOp, right: Self) -> Self {
        Self::Unary {
            op,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}
