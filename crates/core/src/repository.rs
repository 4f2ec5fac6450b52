//! Repository port for comic persistence.
//!
//! Storage adapters implement [`ComicRepository`]; handlers and the
//! validation layer only ever see the trait object.

use async_trait::async_trait;

use crate::comic::{Comic, ComicFields};

/// Failures reported by a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A row with this ISBN already exists.
    #[error("Duplicate ISBN: {0}")]
    Duplicate(String),

    /// The backing store could not complete the operation.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// CRUD operations for the `comic` table, keyed by ISBN.
#[async_trait]
pub trait ComicRepository: Send + Sync {
    /// All comics, oldest first.
    async fn find_all(&self) -> Result<Vec<Comic>, RepositoryError>;

    /// The comic with this ISBN, if any.
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Comic>, RepositoryError>;

    /// Insert a new comic. The store assigns `id` and both timestamps.
    async fn create(&self, fields: &ComicFields) -> Result<Comic, RepositoryError>;

    /// Overwrite the editable fields of every row matching `isbn`.
    ///
    /// Returns the number of affected rows. `updated_at` is left untouched.
    async fn update_by_isbn(&self, isbn: &str, fields: &ComicFields)
        -> Result<u64, RepositoryError>;

    /// Hard-delete every row matching `isbn`, returning the affected count.
    async fn delete_by_isbn(&self, isbn: &str) -> Result<u64, RepositoryError>;

    /// Cheap liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
