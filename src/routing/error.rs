//! Routing errors.

use thiserror::Error;

/// Errors raised while building a route table. Always fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("path `{path}` is declared by route #{first} and again by route #{second}")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },

    #[error("route name `{name}` is declared by route #{first} and again by route #{second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route `{path}`: {reason}")]
    InvalidTarget { path: String, reason: &'static str },

    #[error("route `{path}` references unknown component `{component}`")]
    UnknownComponent { path: String, component: String },

    #[error("max_redirects must be at least 1")]
    ZeroRedirectBound,
}

/// Errors raised while resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// More redirects were followed than the table allows.
    #[error("redirect loop resolving `{start}`: gave up after {hops} hops ({})", .chain.join(" -> "))]
    RedirectLoop {
        start: String,
        hops: usize,
        chain: Vec<String>,
    },
}
