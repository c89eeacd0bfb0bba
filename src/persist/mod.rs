//! Persistence Backend
//!
//! Durably mirrors the in-memory list to one of two backends: a REST
//! endpoint or browser localStorage. The variant is picked once at app
//! construction; everything above this module talks to `Backend`.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use crate::models::Item;

/// Common result type for backend operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Backend-level errors, carried as values into UI state.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistError {
    /// HTTP failure: non-2xx status or the request never completed.
    Fetch(String),
    /// localStorage failure: unavailable storage or a corrupted blob.
    Storage(String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Fetch(msg) => write!(f, "fetch failed: {}", msg),
            PersistError::Storage(msg) => write!(f, "storage failed: {}", msg),
        }
    }
}

impl std::error::Error for PersistError {}

/// One store mutation, as the backend needs to see it.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Added(Item),
    Toggled { id: u32, checked: bool },
    Removed(u32),
}

/// Persistence backend, one variant per storage flavor.
#[derive(Clone)]
pub enum Backend {
    Remote(RemoteBackend),
    Local(LocalBackend),
}

impl Backend {
    pub fn remote(base_url: &str) -> Self {
        Backend::Remote(RemoteBackend::new(base_url))
    }

    pub fn local(key: &str) -> Self {
        Backend::Local(LocalBackend::new(key))
    }

    /// Fetch the persisted list. An absent localStorage key hydrates
    /// to an empty list rather than an error.
    pub async fn load(&self) -> PersistResult<Vec<Item>> {
        match self {
            Backend::Remote(remote) => remote.fetch_items().await,
            Backend::Local(local) => local.load(),
        }
    }

    /// Mirror one store mutation. The remote variant translates the
    /// change into POST/PATCH/DELETE; the local variant ignores the
    /// change and overwrites its key with the full `snapshot`.
    pub async fn sync(&self, change: &Change, snapshot: &[Item]) -> PersistResult<()> {
        match self {
            Backend::Remote(remote) => match change {
                Change::Added(item) => remote.post_item(item).await,
                Change::Toggled { id, checked } => remote.patch_checked(*id, *checked).await,
                Change::Removed(id) => remote.delete_item(*id).await,
            },
            Backend::Local(local) => local.save(snapshot),
        }
    }
}
