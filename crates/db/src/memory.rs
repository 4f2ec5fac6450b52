//! [`ComicRepository`] held entirely in memory.
//!
//! Enforces the same ISBN uniqueness as the `uq_comic_isbn` constraint.

use async_trait::async_trait;
use comicstore_core::comic::{Comic, ComicFields};
use comicstore_core::repository::{ComicRepository, RepositoryError};
use comicstore_core::types::DbId;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Comic>,
    last_id: DbId,
}

/// Volatile comic store.
#[derive(Debug, Default)]
pub struct InMemoryComicRepository {
    table: RwLock<Table>,
}

impl InMemoryComicRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComicRepository for InMemoryComicRepository {
    async fn find_all(&self) -> Result<Vec<Comic>, RepositoryError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Comic>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.isbn == isbn).cloned())
    }

    async fn create(&self, fields: &ComicFields) -> Result<Comic, RepositoryError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|c| c.isbn == fields.isbn) {
            return Err(RepositoryError::Duplicate(fields.isbn.clone()));
        }

        table.last_id += 1;
        let now = chrono::Utc::now();
        let comic = Comic {
            id: table.last_id,
            isbn: fields.isbn.clone(),
            name: fields.name.clone(),
            year: fields.year.clone(),
            author: fields.author.clone(),
            description: fields.description.clone(),
            image: fields.image.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(comic.clone());
        Ok(comic)
    }

    async fn update_by_isbn(
        &self,
        isbn: &str,
        fields: &ComicFields,
    ) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        if fields.isbn != isbn && table.rows.iter().any(|c| c.isbn == fields.isbn) {
            return Err(RepositoryError::Duplicate(fields.isbn.clone()));
        }

        let mut affected = 0;
        for comic in table.rows.iter_mut().filter(|c| c.isbn == isbn) {
            comic.isbn = fields.isbn.clone();
            comic.name = fields.name.clone();
            comic.year = fields.year.clone();
            comic.author = fields.author.clone();
            comic.description = fields.description.clone();
            comic.image = fields.image.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_by_isbn(&self, isbn: &str) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.isbn != isbn);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn fields(isbn: &str, name: &str) -> ComicFields {
        ComicFields {
            isbn: isbn.into(),
            name: name.into(),
            year: "1999".into(),
            author: "CD".into(),
            description: "0123456789".into(),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryComicRepository::new();
        let a = repo.create(&fields("11111", "A")).await.unwrap();
        let b = repo.create(&fields("22222", "B")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_isbn() {
        let repo = InMemoryComicRepository::new();
        repo.create(&fields("11111", "A")).await.unwrap();

        let err = repo.create(&fields("11111", "B")).await.unwrap_err();
        assert_matches!(err, RepositoryError::Duplicate(isbn) if isbn == "11111");
    }

    #[tokio::test]
    async fn update_keeps_id_and_timestamps() {
        let repo = InMemoryComicRepository::new();
        let created = repo.create(&fields("11111", "A")).await.unwrap();

        let affected = repo
            .update_by_isbn("11111", &fields("11111", "Renamed"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let updated = repo.find_by_isbn("11111").await.unwrap().unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_for_unknown_isbn() {
        let repo = InMemoryComicRepository::new();
        assert_eq!(repo.update_by_isbn("99999", &fields("99999", "X")).await.unwrap(), 0);
        assert_eq!(repo.delete_by_isbn("99999").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let repo = InMemoryComicRepository::new();
        repo.create(&fields("11111", "A")).await.unwrap();

        assert_eq!(repo.delete_by_isbn("11111").await.unwrap(), 1);
        assert!(repo.find_by_isbn("11111").await.unwrap().is_none());
    }
}
