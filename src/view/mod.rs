//! View loading subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Component names (manifest) → registry.rs → Arc<dyn ViewFactory>
//!
//! Navigation:
//!     MatchedRoute
//!     → loader.rs (deadline + retry)
//!     → factory.rs (invoke factory, await code)
//!     → Return: ViewHandle or ViewLoadError
//! ```
//!
//! # Design Decisions
//! - Resolution and loading are separate steps (lookup vs. I/O)
//! - Factories are opaque: the router only knows the component name
//! - Load failures are typed results for the caller

pub mod error;
pub mod factory;
pub mod loader;
pub mod registry;

pub use error::ViewLoadError;
pub use factory::{LazyView, StaticView, ViewFactory, ViewFuture, ViewHandle};
pub use loader::{load_view, load_view_with, LoadPolicy};
pub use registry::ViewRegistry;
