//! Location steps and the per-step predicate builder.

use crate::ast::Expression;
use crate::axis::Axis;
use crate::node_test::NodeTest;
use crate::syntax::{Syntax, brackets};

/// A single location step: axis, node test, and ordered predicate list.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub axis: Axis,
    pub node: NodeTest,
    pub predicates: Vec<Expression>,
}

impl Step {
    pub fn new(axis: Axis, node: impl Into<NodeTest>) -> Self {
        Step {
            axis,
            node: node.into(),
            predicates: Vec::new(),
        }
    }

    pub fn with_predicates(
        axis: Axis,
        node: impl Into<NodeTest>,
        predicates: Vec<Expression>,
    ) -> Self {
        Step {
            axis,
            node: node.into(),
            predicates,
        }
    }

    /// True if this step is `descendant-or-self::node()` with no predicates,
    /// the only step the `//` shorthand can absorb.
    pub(crate) fn elides_in_abbreviation(&self) -> bool {
        self.axis == Axis::DescendantOrSelf
            && self.node == NodeTest::Node
            && self.predicates.is_empty()
    }
}

impl Default for Step {
    /// The step `child::node()` with no predicates.
    fn default() -> Self {
        Step::new(Axis::Child, NodeTest::Node)
    }
}

impl Syntax for Step {
    fn unabbreviated(&self) -> String {
        let mut out = format!("{}::{}", self.axis, self.node);
        for predicate in &self.predicates {
            brackets(&mut out, &predicate.unabbreviated());
        }
        out
    }

    fn abbreviated(&self) -> String {
        let mut out = String::new();
        match self.axis {
            // abbreviated syntax for child::
            Axis::Child => out.push_str(&self.node.to_string()),
            // abbreviated syntax for attribute::
            Axis::Attribute => {
                out.push('@');
                out.push_str(&self.node.to_string());
            }
            // abbreviated syntax for self::node()
            Axis::SelfAxis if self.node == NodeTest::Node && self.predicates.is_empty() => {
                out.push('.');
            }
            // abbreviated syntax for parent::node()
            Axis::Parent if self.node == NodeTest::Node && self.predicates.is_empty() => {
                out.push_str("..");
            }
            // no shorthand applies
            _ => out.push_str(&format!("{}::{}", self.axis, self.node)),
        }
        for predicate in &self.predicates {
            brackets(&mut out, &predicate.abbreviated());
        }
        out
    }
}

/// Configures the step being appended by a
/// [`PathBuilder`](crate::path::PathBuilder): the axis and node test are
/// fixed, predicates are added one by one.
#[derive(Debug)]
pub struct StepBuilder {
    axis: Axis,
    node: NodeTest,
    predicates: Vec<Expression>,
}

impl StepBuilder {
    pub fn new(axis: Axis, node: impl Into<NodeTest>) -> Self {
        StepBuilder {
            axis,
            node: node.into(),
            predicates: Vec::new(),
        }
    }

    /// Append a predicate to the step under construction.
    pub fn predicate(&mut self, predicate: impl Into<Expression>) -> &mut Self {
        self.predicates.push(predicate.into());
        self
    }

    pub fn build(self) -> Step {
        Step::with_predicates(self.axis, self.node, self.predicates)
    }
}
