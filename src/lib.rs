//! Client-side route tables for single-page applications.
//!
//! # Architecture Overview
//!
//! ```text
//!   route manifest (TOML)        typed RouteDescriptors
//!           │                            │
//!           ▼                            │
//!   ┌───────────────┐   ViewRegistry     │
//!   │    config     │──────────┐         │
//!   │ load/validate │          ▼         ▼
//!   └───────────────┘   ┌────────────────────────┐
//!                       │   routing::RouteTable   │  immutable, Arc-shared
//!                       │  resolve(path) → match  │
//!                       └───────────┬────────────┘
//!                                   │ MatchedRoute
//!   navigation event               ▼
//!   ───────────────▶  ┌────────────────────────┐      ┌──────────────┐
//!                     │  navigation::Navigator  │─────▶│ view loader  │ async
//!                     │  generation / history   │◀─────│ deadline +   │
//!                     └────────────────────────┘      │ retry        │
//!                                                     └──────────────┘
//! ```
//!
//! Resolution is synchronous and pure; loading a view is the only
//! suspending step.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod view;

pub use config::schema::RouteManifest;
pub use navigation::{NavigationOutcome, Navigator};
pub use routing::{MatchedRoute, Resolution, RouteDescriptor, RouteMeta, RouteTable};
pub use view::{load_view, ViewFactory, ViewHandle, ViewLoadError};
