//! The `Comic` entity and its write-side payload.

use crate::types::{DbId, Timestamp};

/// A persisted comic record.
///
/// `image` is the bare stored filename (possibly empty). The public path is
/// derived at read time with [`Comic::image_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
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

impl Comic {
    /// Public path of the cover image under `upload_dir`.
    ///
    /// An empty filename still yields `upload_dir` itself.
    pub fn image_path(&self, upload_dir: &str) -> String {
        format!("{upload_dir}{}", self.image)
    }
}

/// Editable fields written on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComicFields {
    pub isbn: String,
    pub name: String,
    pub year: String,
    pub author: String,
    pub description: String,
    /// Stored filename, empty when no image was uploaded.
    pub image: String,
}
