//! Per-route metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form metadata attached to a route (`title`, `requiresAuth`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RouteMeta(Map<String, Value>);

impl RouteMeta {
    pub const TITLE: &'static str = "title";
    pub const REQUIRES_AUTH: &'static str = "requiresAuth";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Shorthand for the two keys every page route carries.
    pub fn page(title: impl Into<String>, requires_auth: bool) -> Self {
        let title: String = title.into();
        Self::new()
            .with(Self::TITLE, title)
            .with(Self::REQUIRES_AUTH, requires_auth)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Page title, if set and a string.
    pub fn title(&self) -> Option<&str> {
        self.get(Self::TITLE).and_then(Value::as_str)
    }

    /// Authentication flag; absent or non-boolean means `false`.
    pub fn requires_auth(&self) -> bool {
        self.get(Self::REQUIRES_AUTH)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}
