//! View loading.
//!
//! # Responsibilities
//! - Invoke a matched route's view factory
//! - Apply the per-attempt deadline
//! - Retry transient failures with backoff
//!
//! # Design Decisions
//! - The only suspending operation in the router
//! - Superseded loads are not cancelled here; the navigator discards them
//! - Failures are returned to the caller, never swallowed

use std::time::Duration;

use rand::Rng;

use crate::config::LoadingConfig;
use crate::observability::metrics;
use crate::resilience::timeouts::with_deadline;
use crate::routing::MatchedRoute;
use crate::view::{ViewHandle, ViewLoadError};

/// Deadline and retry settings for view loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPolicy {
    pub timeout: Duration,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl LoadPolicy {
    /// One attempt, no deadline.
    pub fn single_attempt() -> Self {
        Self {
            timeout: Duration::ZERO,
            max_attempts: 1,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Wait after failed attempt number `attempt` (1-based): `base_delay_ms`
    /// doubled per attempt, capped at `max_delay_ms`, plus up to 10% jitter.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 || self.base_delay_ms == 0 {
            return Duration::ZERO;
        }

        let doublings = attempt.saturating_sub(1).min(63);
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(1u64 << doublings)
            .min(self.max_delay_ms);
        let jitter_ms = rand::thread_rng().gen_range(0..=delay_ms / 10);

        Duration::from_millis(delay_ms.saturating_add(jitter_ms))
    }
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self::from(&LoadingConfig::default())
    }
}

impl From<&LoadingConfig> for LoadPolicy {
    fn from(config: &LoadingConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }
}

/// Invoke the view factory of `matched` once.
pub async fn load_view(matched: &MatchedRoute) -> Result<ViewHandle, ViewLoadError> {
    load_view_with(matched, &LoadPolicy::single_attempt()).await
}

/// Invoke the view factory of `matched` under `policy`.
pub async fn load_view_with(
    matched: &MatchedRoute,
    policy: &LoadPolicy,
) -> Result<ViewHandle, ViewLoadError> {
    let component = matched.component();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let result = with_deadline(component, policy.timeout, matched.view.load()).await;

        let err = match result {
            Ok(handle) => {
                tracing::debug!(component, attempt, "View loaded");
                metrics::record_view_load("loaded");
                return Ok(handle);
            }
            Err(err) => err,
        };

        if !err.is_retryable() || attempt >= policy.max_attempts.max(1) {
            tracing::warn!(component, attempt, error = %err, "View load failed");
            metrics::record_view_load("failed");
            if attempt == 1 {
                return Err(err);
            }
            return Err(ViewLoadError::Exhausted {
                component: component.to_string(),
                attempts: attempt,
                last: Box::new(err),
            });
        }

        let delay = policy.retry_delay(attempt);
        tracing::warn!(
            component,
            attempt,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "View load failed, retrying"
        );
        metrics::record_view_load("retried");
        tokio::time::sleep(delay).await;
    }
}
