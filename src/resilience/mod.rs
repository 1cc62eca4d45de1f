//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! View load attempt:
//!     → timeouts.rs (enforce per-attempt deadline)
//!     → On retryable failure: LoadPolicy::retry_delay (jittered backoff), try again
//!     → After max_attempts: give up, report Exhausted
//! ```
//!
//! # Design Decisions
//! - Every load has a deadline unless explicitly disabled
//! - Only errors marked retryable are retried
//! - Jittered backoff avoids hammering the asset server

pub mod timeouts;
