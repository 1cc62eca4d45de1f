//! Resolution results.

use std::sync::Arc;

use crate::routing::{Location, RouteMeta};
use crate::view::ViewFactory;

/// Final outcome of resolving a path.
///
/// Redirects have already been followed; a `NotFound` is an expected outcome
/// that the caller maps to its fallback view.
#[derive(Debug, Clone)]
pub enum Resolution {
    Matched(MatchedRoute),
    NotFound(NotFound),
}

/// Outcome of a single matching step, before redirects are followed.
#[derive(Debug, Clone)]
pub enum Step {
    Matched(MatchedRoute),
    Redirect(Redirect),
    NotFound(NotFound),
}

/// A route with a view, reached by the requested path.
#[derive(Debug, Clone)]
pub struct MatchedRoute {
    pub name: Option<String>,

    /// Path as declared in the table.
    pub pattern: String,

    /// Location actually matched (after any redirects).
    pub location: Location,

    pub meta: RouteMeta,

    pub view: Arc<dyn ViewFactory>,

    /// Paths redirected through on the way here, in order.
    pub redirected_from: Vec<String>,
}

impl MatchedRoute {
    pub fn full_path(&self) -> String {
        self.location.full_path()
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title()
    }

    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth()
    }

    pub fn component(&self) -> &str {
        self.view.component()
    }
}

/// A redirect route matched in a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub name: Option<String>,
    pub from: Location,
    pub to: Location,
}

/// No route matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub location: Location,
    pub redirected_from: Vec<String>,
}
