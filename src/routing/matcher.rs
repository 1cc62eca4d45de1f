//! Path pattern matching.
//!
//! # Responsibilities
//! - Compile a declared route path into literal segments
//! - Match a requested path against those segments
//! - Produce a normalized key for duplicate detection
//!
//! # Design Decisions
//! - Literal segments only, no parameters or wildcards
//! - Case-insensitive unless `sensitive` (matches the browser router default)
//! - Trailing and repeated slashes ignored unless `strict`
//! - No regex: matching is a segment-by-segment comparison

use crate::config::RouterConfig;

/// A compiled route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<String>,
    strict: bool,
    sensitive: bool,
}

impl PathPattern {
    /// Compile a declared path under the router's matching options.
    pub fn new(path: impl Into<String>, config: &RouterConfig) -> Self {
        let source = path.into();
        let segments = split_segments(&source, config.strict)
            .map(|segment| fold_case(segment, config.sensitive))
            .collect();

        Self {
            source,
            segments,
            strict: config.strict,
            sensitive: config.sensitive,
        }
    }

    /// The path as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Normalized form; two patterns with the same key match the same paths.
    pub fn key(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Returns true if `path` (without query or hash) matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut requested = split_segments(path, self.strict);
        for expected in &self.segments {
            match requested.next() {
                Some(segment) if self.segment_eq(expected, segment) => {}
                _ => return false,
            }
        }
        requested.next().is_none()
    }

    fn segment_eq(&self, expected: &str, segment: &str) -> bool {
        if self.sensitive {
            expected == segment
        } else {
            *expected == segment.to_lowercase()
        }
    }
}

fn split_segments(path: &str, strict: bool) -> impl Iterator<Item = &str> {
    // Leading slash always yields an empty first piece.
    path.split('/')
        .skip(usize::from(path.starts_with('/')))
        .filter(move |segment| strict || !segment.is_empty())
}

fn fold_case(segment: &str, sensitive: bool) -> String {
    if sensitive {
        segment.to_string()
    } else {
        segment.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> RouterConfig {
        RouterConfig::default()
    }

    fn exact() -> RouterConfig {
        RouterConfig {
            strict: true,
            sensitive: true,
            ..RouterConfig::default()
        }
    }

    #[test]
    fn test_root_pattern() {
        let root = PathPattern::new("/", &lenient());
        assert!(root.matches("/"));
        assert!(root.matches("//"));
        assert!(!root.matches("/git"));
    }

    #[test]
    fn test_literal_segments() {
        let git = PathPattern::new("/git", &lenient());
        assert!(git.matches("/git"));
        assert!(!git.matches("/git/log"));
        assert!(!git.matches("/gi"));
        assert!(!git.matches("/"));
    }

    #[test]
    fn test_trailing_slash_ignored_by_default() {
        let git = PathPattern::new("/git", &lenient());
        assert!(git.matches("/git/"));
        assert_eq!(git.key(), PathPattern::new("/git/", &lenient()).key());
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let git = PathPattern::new("/Git", &lenient());
        assert!(git.matches("/GIT"));
        assert_eq!(git.key(), "/git");
    }

    #[test]
    fn test_strict_and_sensitive() {
        let git = PathPattern::new("/git", &exact());
        assert!(git.matches("/git"));
        assert!(!git.matches("/git/"));
        assert!(!git.matches("/Git"));
        assert_ne!(git.key(), PathPattern::new("/git/", &exact()).key());
    }
}
