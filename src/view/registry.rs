//! Component registry.
//!
//! Binds the component names used in a route manifest to view factories.

use std::collections::HashMap;
use std::sync::Arc;

use crate::view::{StaticView, ViewFactory};

/// Component name → factory.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    factories: HashMap<String, Arc<dyn ViewFactory>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of payload-free views for the given names.
    pub fn placeholders<'a>(components: impl IntoIterator<Item = &'a str>) -> Self {
        components
            .into_iter()
            .fold(Self::new(), |registry, name| registry.with(Arc::new(StaticView::new(name))))
    }

    /// Register `factory` under its component name, replacing any previous one.
    pub fn register(&mut self, factory: Arc<dyn ViewFactory>) -> &mut Self {
        let name = factory.component().to_string();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::debug!(component = %name, "Replaced registered view factory");
        }
        self
    }

    /// Builder-style `register`.
    pub fn with(mut self, factory: Arc<dyn ViewFactory>) -> Self {
        self.register(factory);
        self
    }

    pub fn get(&self, component: &str) -> Option<Arc<dyn ViewFactory>> {
        self.factories.get(component).cloned()
    }

    pub fn contains(&self, component: &str) -> bool {
        self.factories.contains_key(component)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
