//! Location paths and the step-accumulating path builder.

use crate::axis::Axis;
use crate::error::SyntaxError;
use crate::node_test::NodeTest;
use crate::step::{Step, StepBuilder};
use crate::syntax::{Mode, Syntax};

/// A location path.
///
/// An absolute path may be empty (the document root, rendered as `/`); a
/// relative path always contains at least one step. The fields are private
/// so the constructors are the only way to build one, which is what keeps
/// the non-empty invariant intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    is_absolute: bool,
    steps: Vec<Step>,
}

impl Path {
    /// An absolute location path over the given steps.
    pub fn absolute(steps: Vec<Step>) -> Self {
        Path {
            is_absolute: true,
            steps,
        }
    }

    /// A relative location path over the given steps.
    ///
    /// Fails with [`SyntaxError::EmptyRelativePath`] if `steps` is empty.
    pub fn relative(steps: Vec<Step>) -> Result<Self, SyntaxError> {
        if steps.is_empty() {
            return Err(SyntaxError::EmptyRelativePath);
        }
        Ok(Path {
            is_absolute: false,
            steps,
        })
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(crate) fn render(&self, mode: Mode) -> String {
        match mode {
            Mode::Unabbreviated => {
                let steps: Vec<String> = self.steps.iter().map(Step::unabbreviated).collect();
                let joined = steps.join("/");
                if self.is_absolute {
                    format!("/{}", joined)
                } else {
                    joined
                }
            }
            Mode::Abbreviated => self.render_abbreviated(),
        }
    }

    /// Interior steps equal to `descendant-or-self::node()` with no
    /// predicates render as the empty string, so the surrounding separators
    /// collapse into the `//` shorthand. First and last steps are never
    /// elided.
    fn render_abbreviated(&self) -> String {
        let mut out = String::new();
        if self.is_absolute {
            out.push('/');
            if let Some((last, interior)) = self.steps.split_last() {
                for step in interior {
                    push_interior(&mut out, step);
                    out.push('/');
                }
                out.push_str(&last.abbreviated());
            }
        } else {
            let mut steps = self.steps.iter();
            if let Some(first) = steps.next() {
                out.push_str(&first.abbreviated());
            }
            let mut rest: Vec<&Step> = steps.collect();
            if let Some(last) = rest.pop() {
                for step in rest {
                    out.push('/');
                    push_interior(&mut out, step);
                }
                out.push('/');
                out.push_str(&last.abbreviated());
            }
        }
        out
    }
}

fn push_interior(out: &mut String, step: &Step) {
    if !step.elides_in_abbreviation() {
        out.push_str(&step.abbreviated());
    }
}

impl Syntax for Path {
    fn unabbreviated(&self) -> String {
        self.render(Mode::Unabbreviated)
    }

    fn abbreviated(&self) -> String {
        self.render(Mode::Abbreviated)
    }
}

/// Accumulates steps for a location path.
///
/// Each axis method appends exactly one step, in call order. The `*_with`
/// variants expose a [`StepBuilder`] for attaching predicates to the step
/// being appended. [`absolute`](PathBuilder::absolute) and
/// [`relative`](PathBuilder::relative) snapshot the accumulated sequence
/// without consuming the builder; steps already added are never removed.
///
/// The builder holds mutable state and is meant for single-threaded use
/// during assembly; the paths it produces are immutable and freely
/// shareable.
#[derive(Debug, Default)]
pub struct PathBuilder {
    steps: Vec<Step>,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder { steps: Vec::new() }
    }

    /// Snapshot the accumulated steps into an absolute path.
    pub fn absolute(&self) -> Path {
        Path::absolute(self.steps.clone())
    }

    /// Snapshot the accumulated steps into a relative path.
    pub fn relative(&self) -> Result<Path, SyntaxError> {
        Path::relative(self.steps.clone())
    }

    /// Append an already-built step.
    pub fn step(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    fn append(&mut self, axis: Axis, node: NodeTest) -> &mut Self {
        self.steps.push(Step::new(axis, node));
        self
    }

    fn append_with(
        &mut self,
        axis: Axis,
        node: NodeTest,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        let mut step = StepBuilder::new(axis, node);
        configure(&mut step);
        self.steps.push(step.build());
        self
    }

    /// Append a `self` axis step. Named `self_` because `self` is a keyword.
    pub fn self_(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::SelfAxis, node.into())
    }

    pub fn self_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::SelfAxis, node.into(), configure)
    }

    /// Append a `child` axis step.
    pub fn child(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Child, node.into())
    }

    pub fn child_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Child, node.into(), configure)
    }

    /// Append a `parent` axis step.
    pub fn parent(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Parent, node.into())
    }

    pub fn parent_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Parent, node.into(), configure)
    }

    /// Append a `descendant` axis step.
    pub fn descendant(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Descendant, node.into())
    }

    pub fn descendant_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Descendant, node.into(), configure)
    }

    /// Append an `ancestor` axis step.
    pub fn ancestor(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Ancestor, node.into())
    }

    pub fn ancestor_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Ancestor, node.into(), configure)
    }

    /// Append a `descendant-or-self` axis step.
    pub fn descendant_or_self(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::DescendantOrSelf, node.into())
    }

    pub fn descendant_or_self_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::DescendantOrSelf, node.into(), configure)
    }

    /// Append an `ancestor-or-self` axis step.
    pub fn ancestor_or_self(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::AncestorOrSelf, node.into())
    }

    pub fn ancestor_or_self_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::AncestorOrSelf, node.into(), configure)
    }

    /// Append a `following` axis step.
    pub fn following(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Following, node.into())
    }

    pub fn following_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Following, node.into(), configure)
    }

    /// Append a `preceding` axis step.
    pub fn preceding(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Preceding, node.into())
    }

    pub fn preceding_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Preceding, node.into(), configure)
    }

    /// Append a `following-sibling` axis step.
    pub fn following_sibling(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::FollowingSibling, node.into())
    }

    pub fn following_sibling_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::FollowingSibling, node.into(), configure)
    }

    /// Append a `preceding-sibling` axis step.
    pub fn preceding_sibling(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::PrecedingSibling, node.into())
    }

    pub fn preceding_sibling_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::PrecedingSibling, node.into(), configure)
    }

    /// Append an `attribute` axis step.
    pub fn attribute(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Attribute, node.into())
    }

    pub fn attribute_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Attribute, node.into(), configure)
    }

    /// Append a `namespace` axis step.
    pub fn namespace(&mut self, node: impl Into<NodeTest>) -> &mut Self {
        self.append(Axis::Namespace, node.into())
    }

    pub fn namespace_with(
        &mut self,
        node: impl Into<NodeTest>,
        configure: impl FnOnce(&mut StepBuilder),
    ) -> &mut Self {
        self.append_with(Axis::Namespace, node.into(), configure)
    }
}
