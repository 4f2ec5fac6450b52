//! [`ComicRepository`] backed by PostgreSQL.

use async_trait::async_trait;
use comicstore_core::comic::{Comic, ComicFields};
use comicstore_core::repository::{ComicRepository, RepositoryError};

use crate::repositories::ComicRepo;
use crate::DbPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Comic repository over a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgComicRepository {
    pool: DbPool,
}

impl PgComicRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ComicRepository for PgComicRepository {
    async fn find_all(&self) -> Result<Vec<Comic>, RepositoryError> {
        let rows = ComicRepo::list(&self.pool).await.map_err(storage)?;
        Ok(rows.into_iter().map(Comic::from).collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Comic>, RepositoryError> {
        let row = ComicRepo::find_by_isbn(&self.pool, isbn)
            .await
            .map_err(storage)?;
        Ok(row.map(Comic::from))
    }

    async fn create(&self, fields: &ComicFields) -> Result<Comic, RepositoryError> {
        ComicRepo::create(&self.pool, fields)
            .await
            .map(Comic::from)
            .map_err(|e| classify(e, &fields.isbn))
    }

    async fn update_by_isbn(
        &self,
        isbn: &str,
        fields: &ComicFields,
    ) -> Result<u64, RepositoryError> {
        ComicRepo::update_by_isbn(&self.pool, isbn, fields)
            .await
            .map_err(|e| classify(e, &fields.isbn))
    }

    async fn delete_by_isbn(&self, isbn: &str) -> Result<u64, RepositoryError> {
        ComicRepo::delete_by_isbn(&self.pool, isbn)
            .await
            .map_err(storage)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await.map_err(storage)
    }
}

/// Map a write error, recognising `uq_` unique constraint violations.
fn classify(err: sqlx::Error, isbn: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("");
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) && constraint.starts_with("uq_") {
            tracing::warn!(%isbn, constraint, "Unique constraint rejected comic write");
            return RepositoryError::Duplicate(isbn.to_string());
        }
    }
    storage(err)
}

fn storage(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "Database error");
    RepositoryError::Storage(err.to_string())
}
