//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteManifest (validated, immutable)
//!     → RouteTable::from_manifest + ViewRegistry
//!
//! On change (development):
//!     watcher.rs detects change
//!     → loader.rs loads new manifest
//!     → validation.rs validates
//!     → new manifest sent to the consumer, which builds a new table
//! ```
//!
//! # Design Decisions
//! - Manifests are immutable once loaded; changes produce a new value
//! - All sections have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_manifest, load_route_table, parse_manifest, ConfigError};
pub use schema::{LogFormat, LoadingConfig, LoggingConfig, RouteConfig, RouteManifest, RouterConfig};
pub use validation::{validate_manifest, ValidationError};
pub use watcher::ManifestWatcher;
