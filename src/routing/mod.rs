//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (requested path)
//!     → location.rs (split path / query / hash)
//!     → table.rs (scan routes in declaration order)
//!     → matcher.rs (compare literal segments)
//!     → Redirect? re-resolve target (bounded hops)
//!     → Return: Matched route or NotFound
//!
//! Table construction (at startup):
//!     RouteDescriptor[] or RouteManifest + ViewRegistry
//!     → Compile path patterns
//!     → Reject duplicate paths / names
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables are built once and never mutated
//! - Resolution is synchronous and side-effect free
//! - First match wins (declaration order)
//! - NotFound is a normal outcome, not an error

pub mod error;
pub mod location;
pub mod matcher;
pub mod meta;
pub mod resolution;
pub mod table;

pub use error::{ResolveError, RouteTableError};
pub use location::Location;
pub use matcher::PathPattern;
pub use meta::RouteMeta;
pub use resolution::{MatchedRoute, NotFound, Redirect, Resolution, Step};
pub use table::{RouteDescriptor, RouteRecord, RouteTable, RouteTarget};
