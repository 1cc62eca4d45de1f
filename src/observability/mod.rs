//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing, view loading and navigation produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (outcome counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Navigation generation flows through log spans
//! - Metrics are cheap (counter increments, no-op without a recorder)

pub mod logging;
pub mod metrics;
