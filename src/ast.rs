//! The XPath expression tree and its operator combinators.

use crate::operator::Operator;
use crate::path::Path;
use crate::syntax::{Mode, Syntax, parenthesize};
use std::ops;

/// An XPath 1.0 expression.
///
/// Values are immutable once built; combinators consume their operands and
/// allocate a fresh node, so subtrees may be cloned and shared freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A number literal, rendered in `f64`'s canonical decimal form.
    ///
    /// Non-finite values have no XPath literal form; supplying one is a
    /// caller error and produces invalid syntax.
    Number(f64),
    /// A string literal, wrapped in single quotes verbatim.
    ///
    /// No escaping is performed; content containing a single quote is a
    /// caller error and produces invalid syntax.
    String(String),
    /// Unary minus applied to an operand.
    UnaryMinus(Box<Expression>),
    /// A binary operation. No evaluation is implied; this describes query
    /// syntax, not a computed value.
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A call to a named function with ordered arguments.
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    /// A location path used as an expression.
    Path(Path),
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Expression::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn negate(self) -> Self {
        Expression::UnaryMinus(Box::new(self))
    }

    pub fn equal(self, other: Expression) -> Self {
        Self::binary(Operator::Equal, self, other)
    }

    pub fn not_equal(self, other: Expression) -> Self {
        Self::binary(Operator::NotEqual, self, other)
    }

    pub fn less_than(self, other: Expression) -> Self {
        Self::binary(Operator::LessThan, self, other)
    }

    pub fn less_than_or_equal(self, other: Expression) -> Self {
        Self::binary(Operator::LessThanOrEqual, self, other)
    }

    pub fn greater_than(self, other: Expression) -> Self {
        Self::binary(Operator::GreaterThan, self, other)
    }

    pub fn greater_than_or_equal(self, other: Expression) -> Self {
        Self::binary(Operator::GreaterThanOrEqual, self, other)
    }

    pub fn and(self, other: Expression) -> Self {
        Self::binary(Operator::And, self, other)
    }

    pub fn or(self, other: Expression) -> Self {
        Self::binary(Operator::Or, self, other)
    }

    pub fn plus(self, other: Expression) -> Self {
        Self::binary(Operator::Plus, self, other)
    }

    pub fn minus(self, other: Expression) -> Self {
        Self::binary(Operator::Minus, self, other)
    }

    pub fn times(self, other: Expression) -> Self {
        Self::binary(Operator::Times, self, other)
    }

    pub fn div(self, other: Expression) -> Self {
        Self::binary(Operator::Divide, self, other)
    }

    pub fn modulo(self, other: Expression) -> Self {
        Self::binary(Operator::Modulo, self, other)
    }

    pub fn union(self, other: Expression) -> Self {
        Self::binary(Operator::Union, self, other)
    }

    pub(crate) fn render(&self, mode: Mode) -> String {
        match self {
            Expression::Number(n) => n.to_string(),
            Expression::String(s) => format!("'{}'", s),
            Expression::UnaryMinus(operand) => {
                let mut out = format!("{} ", Operator::Minus);
                // application binds tighter than any binary operator, so
                // only binary operands need parentheses
                if matches!(operand.as_ref(), Expression::Binary { .. }) {
                    parenthesize(&mut out, &operand.render(mode));
                } else {
                    out.push_str(&operand.render(mode));
                }
                out
            }
            Expression::Binary { op, left, right } => {
                let mut out = String::new();
                // All binary operators are left-associative: an equal-rank
                // left operand stays flat, an equal-rank right operand must
                // keep its parentheses to preserve grouping.
                match left.as_ref() {
                    Expression::Binary { op: left_op, .. } if left_op < op => {
                        parenthesize(&mut out, &left.render(mode));
                    }
                    _ => out.push_str(&left.render(mode)),
                }
                out.push(' ');
                out.push_str(&op.to_string());
                out.push(' ');
                match right.as_ref() {
                    Expression::Binary { op: right_op, .. } if right_op <= op => {
                        parenthesize(&mut out, &right.render(mode));
                    }
                    _ => out.push_str(&right.render(mode)),
                }
                out
            }
            Expression::FunctionCall { name, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.render(mode)).collect();
                format!("{}({})", name, args.join(","))
            }
            Expression::Path(path) => path.render(mode),
        }
    }
}

impl Syntax for Expression {
    fn unabbreviated(&self) -> String {
        self.render(Mode::Unabbreviated)
    }

    fn abbreviated(&self) -> String {
        self.render(Mode::Abbreviated)
    }
}

impl From<Path> for Expression {
    fn from(path: Path) -> Self {
        Expression::Path(path)
    }
}

impl ops::Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        self.plus(rhs)
    }
}

impl ops::Sub for Expression {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        self.minus(rhs)
    }
}

impl ops::Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        self.times(rhs)
    }
}

impl ops::Div for Expression {
    type Output = Expression;

    fn div(self, rhs: Expression) -> Expression {
        Expression::div(self, rhs)
    }
}

impl ops::Rem for Expression {
    type Output = Expression;

    fn rem(self, rhs: Expression) -> Expression {
        self.modulo(rhs)
    }
}

impl ops::Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        self.negate()
    }
}
