//! Constructors for calls to functions in the XPath core library.
//!
//! Any function can be called by name through [`call`]; the named
//! constructors cover commonly used core-library functions. Functions whose
//! argument is optional in the core library take an `Option` and render an
//! empty argument list for `None`.

use crate::ast::Expression;

/// Call an arbitrary function by name with the given arguments.
pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Expression {
    Expression::FunctionCall {
        name: name.into(),
        args,
    }
}

/// The `last` function.
pub fn last() -> Expression {
    call("last", Vec::new())
}

/// The `position` function.
pub fn position() -> Expression {
    call("position", Vec::new())
}

/// The `count` function.
pub fn count(argument: Expression) -> Expression {
    call("count", vec![argument])
}

/// The `local-name` function.
pub fn local_name(argument: Option<Expression>) -> Expression {
    call("local-name", argument.into_iter().collect())
}

/// The `namespace-uri` function.
pub fn namespace_uri(argument: Option<Expression>) -> Expression {
    call("namespace-uri", argument.into_iter().collect())
}

/// The `name` function.
pub fn name(argument: Option<Expression>) -> Expression {
    call("name", argument.into_iter().collect())
}

/// The `string` function.
pub fn string(argument: Option<Expression>) -> Expression {
    call("string", argument.into_iter().collect())
}

/// The `boolean` function.
pub fn boolean(argument: Option<Expression>) -> Expression {
    call("boolean", argument.into_iter().collect())
}

/// The `not` function.
pub fn not(argument: Expression) -> Expression {
    call("not", vec![argument])
}

/// The `true` function. Named `true_` because `true` is a keyword.
pub fn true_() -> Expression {
    call("true", Vec::new())
}

/// The `false` function. Named `false_` because `false` is a keyword.
pub fn false_() -> Expression {
    call("false", Vec::new())
}

/// The `number` function.
pub fn number(argument: Option<Expression>) -> Expression {
    call("number", argument.into_iter().collect())
}
