//! Route manifest schema definitions.
//!
//! This module defines the complete structure of a route manifest.
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::RouteMeta;

/// Root of a route manifest.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteManifest {
    /// Matching options.
    pub router: RouterConfig,

    /// View loading deadline and retries.
    pub loading: LoadingConfig,

    /// Log output settings.
    pub logging: LoggingConfig,

    /// Route list, in match priority order.
    pub routes: Vec<RouteConfig>,
}

impl RouteManifest {
    /// Distinct component names referenced by the routes, in declaration order.
    pub fn components(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for component in self.routes.iter().filter_map(|r| r.component.as_deref()) {
            if !seen.contains(&component) {
                seen.push(component);
            }
        }
        seen
    }
}

/// Path matching options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Trailing slashes are significant.
    pub strict: bool,

    /// Segments compare case-sensitively.
    pub sensitive: bool,

    /// Maximum redirects followed for a single resolution.
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            strict: false,
            sensitive: false,
            max_redirects: 10,
        }
    }
}

/// View loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Per-attempt deadline in milliseconds (0 disables it).
    pub timeout_ms: u64,

    /// Total attempts for a retryable failure.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`info`, `view_router=debug`, ...). `RUST_LOG` wins.
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A route as written in the manifest.
///
/// Exactly one of `component` and `redirect` must be set; validation
/// enforces this.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Absolute path (`/git`).
    pub path: String,

    /// Unique route name.
    #[serde(default)]
    pub name: Option<String>,

    /// Registered component rendered by this route.
    #[serde(default)]
    pub component: Option<String>,

    /// Path to send navigation on to.
    #[serde(default)]
    pub redirect: Option<String>,

    #[serde(default)]
    pub meta: RouteMeta,
}

impl RouteConfig {
    pub fn view(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: Some(component.into()),
            redirect: None,
            meta: RouteMeta::default(),
        }
    }

    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: None,
            redirect: Some(target.into()),
            meta: RouteMeta::default(),
        }
    }
}
