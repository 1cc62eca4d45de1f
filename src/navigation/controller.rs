//! Navigation controller.
//!
//! # Responsibilities
//! - Number navigation events (generation counter)
//! - Resolve the requested path and load its view
//! - Discard results of navigations superseded while loading
//! - Acknowledge completed navigations to history
//! - Publish the current route for readers
//!
//! # Design Decisions
//! - Superseded loads run to completion; only their result is dropped
//! - Redirect loops are logged and reported as not-found
//! - History is only updated for mounted views
//! - Current route is an `ArcSwap` snapshot, readable without locks

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::Instrument;

use crate::observability::metrics;
use crate::routing::{Location, MatchedRoute, NotFound, Resolution, ResolveError, RouteTable};
use crate::view::{load_view_with, LoadPolicy, ViewHandle, ViewLoadError};
use crate::navigation::History;

/// A completed navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub generation: u64,
    pub route: MatchedRoute,
    pub view: ViewHandle,
}

/// What a navigation event ended in.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    /// View loaded and now current.
    Mounted(Arc<Navigation>),

    /// No route; the host shows its fallback view.
    NotFound(NotFound),

    /// Route matched but its view failed to load; the host shows an error view.
    LoadFailed {
        route: MatchedRoute,
        error: ViewLoadError,
    },

    /// A newer navigation started before this one finished.
    Superseded { generation: u64, latest: u64 },
}

#[derive(Debug, Clone, Copy)]
enum Acknowledge {
    Push,
    Replace,
}

/// Drives navigation events against an immutable route table.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    history: Arc<dyn History>,
    policy: LoadPolicy,
    generation: AtomicU64,
    current: ArcSwapOption<Navigation>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, history: Arc<dyn History>, policy: LoadPolicy) -> Self {
        Self {
            table,
            history,
            policy,
            generation: AtomicU64::new(0),
            current: ArcSwapOption::empty(),
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Most recently mounted navigation.
    pub fn current(&self) -> Option<Arc<Navigation>> {
        self.current.load_full()
    }

    /// Generation of the latest navigation event.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Initial navigation to the location history reports.
    pub async fn start(&self) -> NavigationOutcome {
        let location = self.history.location();
        self.run(&location, Acknowledge::Replace).await
    }

    /// Navigate to `path`.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        self.run(path, Acknowledge::Push).await
    }

    async fn run(&self, requested: &str, ack: Acknowledge) -> NavigationOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let span = tracing::info_span!("navigation", generation, path = %requested);
        self.navigate_inner(requested, generation, ack)
            .instrument(span)
            .await
    }

    async fn navigate_inner(&self, requested: &str, generation: u64, ack: Acknowledge) -> NavigationOutcome {
        let route = match self.table.resolve(requested) {
            Ok(Resolution::Matched(route)) => route,
            Ok(Resolution::NotFound(not_found)) => {
                tracing::info!("No route for requested path");
                metrics::record_navigation("not_found");
                return NavigationOutcome::NotFound(not_found);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Redirect loop, treating as not found");
                metrics::record_navigation("not_found");
                let ResolveError::RedirectLoop { chain, .. } = err;
                return NavigationOutcome::NotFound(NotFound {
                    location: Location::parse(requested),
                    redirected_from: chain,
                });
            }
        };

        let loaded = load_view_with(&route, &self.policy).await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(latest, "Navigation superseded, discarding result");
            metrics::record_navigation("superseded");
            return NavigationOutcome::Superseded { generation, latest };
        }

        match loaded {
            Ok(view) => {
                let full_path = route.full_path();
                match ack {
                    Acknowledge::Push => self.history.push(&full_path),
                    Acknowledge::Replace => self.history.replace(&full_path),
                }
                tracing::info!(
                    path = %full_path,
                    component = view.component(),
                    title = route.title().unwrap_or_default(),
                    "Navigation complete"
                );
                metrics::record_navigation("mounted");

                let navigation = Arc::new(Navigation {
                    generation,
                    route,
                    view,
                });
                self.current.store(Some(Arc::clone(&navigation)));
                NavigationOutcome::Mounted(navigation)
            }
            Err(error) => {
                tracing::warn!(error = %error, "Navigation failed to load view");
                metrics::record_navigation("load_failed");
                NavigationOutcome::LoadFailed { route, error }
            }
        }
    }
}
