//! History collaborator.
//!
//! The host supplies the current location and records acknowledged
//! navigations. `MemoryHistory` is an in-process implementation for
//! non-browser hosts and tests.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Host-provided history / URL tracking.
pub trait History: Send + Sync + fmt::Debug {
    /// Location the application is currently at.
    fn location(&self) -> String;

    /// Record a new entry.
    fn push(&self, full_path: &str);

    /// Overwrite the current entry.
    fn replace(&self, full_path: &str);
}

/// History kept in memory.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![initial.into()]),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, full_path: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(full_path.to_string());
    }

    fn replace(&self, full_path: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.last_mut() {
            Some(last) => *last = full_path.to_string(),
            None => entries.push(full_path.to_string()),
        }
    }
}
