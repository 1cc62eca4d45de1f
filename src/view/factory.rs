//! View factories and handles.
//!
//! # Responsibilities
//! - Define the seam between the router and on-demand view code
//! - Wrap async loader closures as factories
//! - Carry loaded views as type-erased handles
//!
//! # Design Decisions
//! - Factories are shared (`Arc<dyn ViewFactory>`) and may be invoked many times
//! - Loading returns a boxed `'static` future so it can outlive the table borrow
//! - The router never inspects the view payload

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};

use crate::view::ViewLoadError;

/// Future returned by [`ViewFactory::load`].
pub type ViewFuture = BoxFuture<'static, Result<ViewHandle, ViewLoadError>>;

/// Deferred producer of a renderable view.
pub trait ViewFactory: Send + Sync + fmt::Debug {
    /// Component identifier (e.g. `HomeView`).
    fn component(&self) -> &str;

    /// Produce the view. May suspend while code is fetched.
    fn load(&self) -> ViewFuture;
}

/// A loaded view, ready for mounting.
#[derive(Clone)]
pub struct ViewHandle {
    component: Arc<str>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl ViewHandle {
    pub fn new<T>(component: impl Into<Arc<str>>, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            component: component.into(),
            payload: Arc::new(payload),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Borrow the payload as `T`, if that is what the factory produced.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().downcast_ref::<T>()
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle")
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

/// Factory backed by an async closure; the usual way to register lazily
/// loaded views.
pub struct LazyView<F> {
    component: String,
    loader: F,
}

impl<F, Fut> LazyView<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ViewHandle, ViewLoadError>> + Send + 'static,
{
    pub fn new(component: impl Into<String>, loader: F) -> Self {
        Self {
            component: component.into(),
            loader,
        }
    }

    /// Same as `new`, already shared.
    pub fn shared(component: impl Into<String>, loader: F) -> Arc<dyn ViewFactory> {
        Arc::new(Self::new(component, loader))
    }
}

impl<F, Fut> ViewFactory for LazyView<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ViewHandle, ViewLoadError>> + Send + 'static,
{
    fn component(&self) -> &str {
        &self.component
    }

    fn load(&self) -> ViewFuture {
        (self.loader)().boxed()
    }
}

impl<F> fmt::Debug for LazyView<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

/// Factory that resolves immediately to a handle with no payload.
///
/// Used where only the component name matters (inspection tooling, tests).
#[derive(Debug, Clone)]
pub struct StaticView {
    component: String,
}

impl StaticView {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

impl ViewFactory for StaticView {
    fn component(&self) -> &str {
        &self.component
    }

    fn load(&self) -> ViewFuture {
        future::ready(Ok(ViewHandle::new(self.component.as_str(), ()))).boxed()
    }
}
