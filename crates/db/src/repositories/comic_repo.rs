//! Repository for the `comic` table.

use comicstore_core::comic::ComicFields;
use sqlx::PgPool;

use crate::models::comic::ComicRow;

/// Column list for `comic` queries.
const COLUMNS: &str = "\
    id, isbn, name, year, author, description, image, created_at, updated_at";

/// Provides CRUD operations for comics, keyed by ISBN.
pub struct ComicRepo;

impl ComicRepo {
    /// List every comic ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<ComicRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comic ORDER BY id");
        sqlx::query_as::<_, ComicRow>(&query).fetch_all(pool).await
    }

    /// Find a comic by ISBN.
    pub async fn find_by_isbn(pool: &PgPool, isbn: &str) -> Result<Option<ComicRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comic WHERE isbn = $1");
        sqlx::query_as::<_, ComicRow>(&query)
            .bind(isbn)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new comic, returning the created row.
    pub async fn create(pool: &PgPool, input: &ComicFields) -> Result<ComicRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO comic (isbn, name, year, author, description, image) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ComicRow>(&query)
            .bind(&input.isbn)
            .bind(&input.name)
            .bind(&input.year)
            .bind(&input.author)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every editable column of the rows matching `isbn`.
    ///
    /// `updated_at` keeps its creation value. Returns the affected row count.
    pub async fn update_by_isbn(
        pool: &PgPool,
        isbn: &str,
        input: &ComicFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE comic SET \
                 isbn = $2, name = $3, year = $4, author = $5, \
                 description = $6, image = $7 \
             WHERE isbn = $1",
        )
        .bind(isbn)
        .bind(&input.isbn)
        .bind(&input.name)
        .bind(&input.year)
        .bind(&input.author)
        .bind(&input.description)
        .bind(&input.image)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete the rows matching `isbn`. Returns the affected row count.
    pub async fn delete_by_isbn(pool: &PgPool, isbn: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comic WHERE isbn = $1")
            .bind(isbn)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
