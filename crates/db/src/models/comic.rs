//! Row struct for the `comic` table.

use comicstore_core::comic::Comic;
use comicstore_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `comic` table.
#[derive(Debug, Clone, FromRow)]
pub struct ComicRow {
    pub id: DbId,
    pub isbn: String,
    pub name: String,
    pub year: String,
    pub author: String,
    pub description: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ComicRow> for Comic {
    fn from(row: ComicRow) -> Self {
        Comic {
            id: row.id,
            isbn: row.isbn,
            name: row.name,
            year: row.year,
            author: row.author,
            description: row.description,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
