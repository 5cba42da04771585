//! Typed construction and rendering of XPath 1.0 expressions.
//!
//! Expressions are built declaratively through constructors, operator
//! combinators, and [`PathBuilder`], then rendered on demand into either of
//! the two concrete syntaxes defined by the XPath grammar (see [`Syntax`]).
//! No evaluation happens here; the rendered string is handed to an external
//! XPath engine unmodified.

pub mod ast;
pub mod axis;
pub mod error;
pub mod functions;
pub mod operator;
pub mod path;
pub mod step;
pub mod syntax;

pub use ast::Expression;
pub use axis::Axis;
pub use error::SyntaxError;
pub use node_test::NodeTest;
pub use operator::Operator;
pub use path::{Path, PathBuilder};
pub use step::{Step, StepBuilder};
pub use syntax::Syntax;
