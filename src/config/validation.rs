//! Manifest validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route has exactly one target
//! - Check paths and redirect targets are absolute
//! - Detect duplicate paths and names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteManifest → Result<(), Vec<ValidationError>>
//! - Duplicate paths are compared with the same normalization used for matching

use std::collections::HashMap;
use thiserror::Error;

use crate::config::schema::RouteManifest;
use crate::routing::PathPattern;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: path `{path}` must start with '/'")]
    RelativePath { index: usize, path: String },

    #[error("route #{index}: path `{path}` must not contain a query or hash")]
    QueryInPath { index: usize, path: String },

    #[error("route #{index} (`{path}`): redirect target `{target}` must start with '/'")]
    RelativeRedirect {
        index: usize,
        path: String,
        target: String,
    },

    #[error("route #{index} (`{path}`): set either `component` or `redirect`, not both")]
    ConflictingTarget { index: usize, path: String },

    #[error("route #{index} (`{path}`): missing `component` or `redirect`")]
    MissingTarget { index: usize, path: String },

    #[error("route #{index}: path `{path}` duplicates route #{first}")]
    DuplicatePath {
        index: usize,
        first: usize,
        path: String,
    },

    #[error("route #{index}: name `{name}` duplicates route #{first}")]
    DuplicateName {
        index: usize,
        first: usize,
        name: String,
    },

    #[error("router.max_redirects must be at least 1")]
    ZeroRedirectBound,

    #[error("loading.max_attempts must be at least 1")]
    ZeroLoadAttempts,
}

/// Check a parsed manifest, collecting every problem found.
pub fn validate_manifest(manifest: &RouteManifest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if manifest.router.max_redirects == 0 {
        errors.push(ValidationError::ZeroRedirectBound);
    }
    if manifest.loading.max_attempts == 0 {
        errors.push(ValidationError::ZeroLoadAttempts);
    }

    let mut paths: HashMap<String, usize> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();

    for (index, route) in manifest.routes.iter().enumerate() {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                index,
                path: route.path.clone(),
            });
        } else if route.path.contains(['?', '#']) {
            errors.push(ValidationError::QueryInPath {
                index,
                path: route.path.clone(),
            });
        }

        match (&route.component, &route.redirect) {
            (Some(_), Some(_)) => errors.push(ValidationError::ConflictingTarget {
                index,
                path: route.path.clone(),
            }),
            (None, None) => errors.push(ValidationError::MissingTarget {
                index,
                path: route.path.clone(),
            }),
            (None, Some(target)) if !target.starts_with('/') => {
                errors.push(ValidationError::RelativeRedirect {
                    index,
                    path: route.path.clone(),
                    target: target.clone(),
                })
            }
            _ => {}
        }

        let key = PathPattern::new(route.path.as_str(), &manifest.router).key();
        match paths.get(&key) {
            Some(&first) => errors.push(ValidationError::DuplicatePath {
                index,
                first,
                path: route.path.clone(),
            }),
            None => {
                paths.insert(key, index);
            }
        }

        if let Some(name) = route.name.as_deref() {
            match names.get(name) {
                Some(&first) => errors.push(ValidationError::DuplicateName {
                    index,
                    first,
                    name: name.to_string(),
                }),
                None => {
                    names.insert(name, index);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
