use thiserror::Error;

/// Errors raised while constructing syntax values.
///
/// Every contract violation surfaces at construction time; rendering is
/// infallible over values built through the public constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("relative path must contain at least one step")]
    EmptyRelativePath,
}
