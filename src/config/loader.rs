//! Manifest loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::RouteManifest;
use crate::config::validation::{validate_manifest, ValidationError};
use crate::routing::{RouteTable, RouteTableError};
use crate::view::ViewRegistry;

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Table(#[from] RouteTableError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a manifest from TOML text.
pub fn parse_manifest(content: &str) -> Result<RouteManifest, ConfigError> {
    let manifest: RouteManifest = toml::from_str(content)?;
    validate_manifest(&manifest).map_err(ConfigError::Validation)?;
    Ok(manifest)
}

/// Load and validate a manifest from a TOML file.
pub fn load_manifest(path: &Path) -> Result<RouteManifest, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}

/// Load a manifest and build its route table in one step.
pub fn load_route_table(path: &Path, registry: &ViewRegistry) -> Result<RouteTable, ConfigError> {
    let manifest = load_manifest(path)?;
    Ok(RouteTable::from_manifest(&manifest, registry)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINUX_ARCHIVE: &str = r#"
        [[routes]]
        path = "/"
        name = "home"
        component = "HomeView"
        meta = { title = "Bienvenido a LinuxArchive", requiresAuth = false }

        [[routes]]
        path = "/git"
        name = "git"
        component = "GitView"

        [routes.meta]
        title = "Git Commands"
        requiresAuth = false
    "#;

    #[test]
    fn test_parse_with_defaults() {
        let manifest = parse_manifest(LINUX_ARCHIVE).unwrap();
        assert_eq!(manifest.routes.len(), 2);
        assert_eq!(manifest.router.max_redirects, 10);
        assert_eq!(manifest.loading.max_attempts, 3);
        assert_eq!(manifest.routes[1].meta.title(), Some("Git Commands"));
        assert_eq!(manifest.components(), vec!["HomeView", "GitView"]);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_manifest("[[routes]]\npath = 42").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_manifest("[[routes]]\npath = \"/\"").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/routes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/routes.toml"));
    }
}
