//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use crate::persist::Backend;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// The persistence backend picked at startup
    pub backend: Backend,
}

impl AppContext {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}
