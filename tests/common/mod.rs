//! Shared fixtures for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use view_router::routing::{RouteDescriptor, RouteMeta, RouteTable};
use view_router::view::{LazyView, StaticView, ViewFactory, ViewHandle, ViewLoadError};

/// Path to a manifest under `demos/`.
#[allow(dead_code)]
pub fn demo_manifest(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[allow(dead_code)]
pub fn static_view(component: &str) -> Arc<dyn ViewFactory> {
    Arc::new(StaticView::new(component))
}

/// The LinuxArchive table built from typed descriptors.
#[allow(dead_code)]
pub fn linux_archive_table() -> RouteTable {
    RouteTable::new(vec![
        RouteDescriptor::view("/", static_view("HomeView"))
            .named("home")
            .with_meta(RouteMeta::page("Bienvenido a LinuxArchive", false)),
        RouteDescriptor::view("/git", static_view("GitView"))
            .named("git")
            .with_meta(RouteMeta::page("Git Commands", false)),
    ])
    .unwrap()
}

/// A view that sleeps for `delay` before loading.
#[allow(dead_code)]
pub fn slow_view(component: &'static str, delay: Duration) -> Arc<dyn ViewFactory> {
    LazyView::shared(component, move || async move {
        tokio::time::sleep(delay).await;
        Ok::<_, ViewLoadError>(ViewHandle::new(component, ()))
    })
}

/// A view that always fails with a retryable error, counting attempts.
#[allow(dead_code)]
pub fn broken_view(component: &'static str) -> (Arc<dyn ViewFactory>, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let view = LazyView::shared(component, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async move { Err::<ViewHandle, _>(ViewLoadError::unavailable(component, "network down")) }
    });
    (view, calls)
}
