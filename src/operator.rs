//! Operator tokens of the XPath expression grammar.

use std::fmt;

/// A binary operator (also covering the symbol of the unary minus).
///
/// Declaration order runs from lowest to highest binary precedence, and the
/// derived `Ord` is a linear extension of that precedence. All binary
/// operators in the grammar are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operator {
    Or,
    And,
    Equal,
    NotEqual,
    LessThanOrEqual,
    LessThan,
    GreaterThanOrEqual,
    GreaterThan,
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    Union,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::LessThanOrEqual => "<=",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::GreaterThan => ">",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "div",
            Operator::Modulo => "mod",
            Operator::Union => "|",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Operator::Or < Operator::And);
        assert!(Operator::And < Operator::Equal);
        assert!(Operator::Equal < Operator::LessThan);
        assert!(Operator::LessThan < Operator::Plus);
        assert!(Operator::Plus < Operator::Times);
        assert!(Operator::Times < Operator::Divide);
        assert!(Operator::Modulo < Operator::Union);
        // the derived order is a linear extension of binary precedence, so
        // same-level operators still compare by declaration position
        assert!(Operator::Plus < Operator::Minus);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Or.to_string(), "or");
        assert_eq!(Operator::NotEqual.to_string(), "!=");
        assert_eq!(Operator::LessThanOrEqual.to_string(), "<=");
        assert_eq!(Operator::Divide.to_string(), "div");
        assert_eq!(Operator::Modulo.to_string(), "mod");
        assert_eq!(Operator::Union.to_string(), "|");
    }
}
