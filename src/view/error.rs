//! View loading errors.

use std::time::Duration;
use thiserror::Error;

/// Failure to obtain a renderable view.
///
/// Never fatal to the router: the caller shows an error view or retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewLoadError {
    #[error("view `{component}` could not be loaded: {reason}")]
    Unavailable {
        component: String,
        reason: String,
        retryable: bool,
    },

    #[error("view `{component}` did not load within {after:?}")]
    TimedOut { component: String, after: Duration },

    #[error("view `{component}` failed after {attempts} attempts: {last}")]
    Exhausted {
        component: String,
        attempts: u32,
        last: Box<ViewLoadError>,
    },
}

impl ViewLoadError {
    /// A transient failure (e.g. the chunk could not be fetched).
    pub fn unavailable(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            component: component.into(),
            reason: reason.into(),
            retryable: true,
        }
    }

    /// A failure that retrying will not fix.
    pub fn fatal(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            component: component.into(),
            reason: reason.into(),
            retryable: false,
        }
    }

    pub fn component(&self) -> &str {
        match self {
            Self::Unavailable { component, .. }
            | Self::TimedOut { component, .. }
            | Self::Exhausted { component, .. } => component,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable { retryable, .. } => *retryable,
            Self::TimedOut { .. } => true,
            Self::Exhausted { .. } => false,
        }
    }
}
