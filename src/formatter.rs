//! Printer that renders an expression tree as fully-parenthesized
//! prefix notation.
//!
//! Every operator application becomes `(op operand...)`, groupings
//! become `(group inner)`, numbers always carry exactly one fractional
//! digit and strings are written without quotes.

use std::fmt;

use crate::ast::Expr;

/// Render an expression, e.g. `1 + 2 * 3` as `(+ 1.0 (* 2.0 3.0))`.
#[must_use]
pub fn format(expr: &Expr) -> String {
    let mut out = String::new();
    format_expr(&mut out, expr);
    out
}

fn format_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Number(n) => format_number(out, *n),
        Expr::Str(s) => out.push_str(s),
        Expr::Grouping(inner) => {
            out.push_str("(group ");
            format_expr(out, inner);
            out.push(')');
        }
        Expr::Unary { op, right } => {
            out.push('(');
            out.push_str(op.symbol());
            out.push(' ');
            format_expr(out, right);
            out.push(')');
        }
        Expr::Binary { left, op, right } => {
            out.push('(');
            out.push_str(op.symbol());
            out.push(' ');
            format_expr(out, left);
            out.push(' ');
            format_expr(out, right);
            out.push(')');
        }
    }
}

fn format_number(out: &mut String, n: f64) {
    use std::fmt::Write;
    // writing into a String cannot fail
    let _ = write!(out, "{n:.1}");
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
