//! Registration-time error taxonomy.
//!
//! Request-time misses and method mismatches are not errors at this level;
//! they are turned into HTTP responses by the dispatcher.

use thiserror::Error;

/// Errors returned synchronously to the caller of the registration API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Method outside the GET/POST/PUT/DELETE enumeration.
    #[error("Method {method} on {path} not allowed")]
    UnsupportedMethod { method: String, path: String },

    /// The same placeholder name appears twice in one template.
    #[error("Placeholder {{{name}}} appears more than once in {path}")]
    DuplicateParam { name: String, path: String },

    /// `{}` with no identifier.
    #[error("Empty placeholder in {0}")]
    EmptyPlaceholder(String),

    /// A segment holding more than a single `{name}` token.
    #[error("Segment {segment:?} in {path} must be a literal or exactly one placeholder")]
    MalformedSegment { segment: String, path: String },

    /// Literal segment after the first placeholder; positional binding could never match it.
    #[error("Literal segment {segment:?} follows a placeholder in {path}")]
    LiteralAfterPlaceholder { segment: String, path: String },

    /// Exact path already registered as a static route.
    #[error("Static route {0} is already registered")]
    DuplicateStaticRoute(String),

    /// Static registration of a templated path.
    #[error("Static route {0} contains placeholders")]
    UnexpectedPlaceholder(String),
}
