//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (user action / history change)
//!     → controller.rs (bump generation)
//!     → RouteTable::resolve
//!     → load_view_with (may suspend)
//!     → generation still current? acknowledge to history.rs, publish
//!     → otherwise: Superseded, result dropped
//! ```
//!
//! # Design Decisions
//! - The route table is passed in explicitly, never a global
//! - At most one load per navigation event
//! - Staleness is detected by generation comparison, not cancellation

pub mod controller;
pub mod history;

pub use controller::{Navigation, NavigationOutcome, Navigator};
pub use history::{History, MemoryHistory};
