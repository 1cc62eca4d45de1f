//! Metrics collection.
//!
//! # Metrics
//! - `view_router_resolutions_total` (counter): by outcome (matched, not_found, redirect_loop)
//! - `view_router_view_loads_total` (counter): by outcome (loaded, retried, failed)
//! - `view_router_navigations_total` (counter): by outcome (mounted, not_found, load_failed, superseded)
//!
//! # Design Decisions
//! - Uses the `metrics` facade; the host application installs a recorder
//! - Without a recorder every call is a no-op

pub const RESOLUTIONS_TOTAL: &str = "view_router_resolutions_total";
pub const VIEW_LOADS_TOTAL: &str = "view_router_view_loads_total";
pub const NAVIGATIONS_TOTAL: &str = "view_router_navigations_total";

pub fn record_resolution(outcome: &'static str) {
    ::metrics::counter!(RESOLUTIONS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_view_load(outcome: &'static str) {
    ::metrics::counter!(VIEW_LOADS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_navigation(outcome: &'static str) {
    ::metrics::counter!(NAVIGATIONS_TOTAL, "outcome" => outcome).increment(1);
}
