//! The two concrete syntaxes of the XPath grammar.

/// A term in a syntactic category of the XPath grammar.
///
/// Both renderings are pure functions of the term's structure: repeated
/// calls yield identical strings, and neither touches any external state.
pub trait Syntax {
    /// Linear representation of this term in unabbreviated syntax.
    fn unabbreviated(&self) -> String;

    /// Linear representation of this term in abbreviated syntax.
    ///
    /// Defaults to the unabbreviated form for terms the grammar gives no
    /// shorthand.
    fn abbreviated(&self) -> String {
        self.unabbreviated()
    }
}

/// Target syntax threaded through the shared rendering routines, so the
/// parenthesization and elision decisions live in one place per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Unabbreviated,
    Abbreviated,
}

pub(crate) fn parenthesize(out: &mut String, inner: &str) {
    out.push('(');
    out.push_str(inner);
    out.push(')');
}

pub(crate) fn brackets(out: &mut String, inner: &str) {
    out.push('[');
    out.push_str(inner);
    out.push(']');
}
