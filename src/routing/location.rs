//! Requested locations.
//!
//! # Responsibilities
//! - Split a requested string into path, query and hash
//! - Rebuild the full path for history acknowledgements
//! - Carry query and hash across redirects
//!
//! # Design Decisions
//! - Only the path takes part in matching
//! - An empty path is the root (`/`)
//! - A redirect target's own query/hash win over the requested ones

use std::fmt;

/// A requested location split into its matchable path and passthrough parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component, always starting with `/` when requested that way.
    pub path: String,

    /// Query string without the leading `?`.
    pub query: Option<String>,

    /// Fragment without the leading `#`.
    pub hash: Option<String>,
}

impl Location {
    /// Parse a requested string such as `/git?tab=log#top`.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            hash,
        }
    }

    /// Location reached by following a redirect to `target`.
    pub fn redirect_to(&self, target: &str) -> Self {
        let mut next = Self::parse(target);
        if next.query.is_none() {
            next.query = self.query.clone();
        }
        if next.hash.is_none() {
            next.hash = self.hash.clone();
        }
        next
    }

    /// Path plus query and hash, as shown in the address bar.
    pub fn full_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}
