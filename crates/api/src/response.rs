//! Response body types for the comic endpoints.

use comicstore_core::comic::Comic;
use comicstore_core::types::{DbId, Timestamp};
use serde::Serialize;

/// Client view of a comic.
///
/// `image` is the public path (`<upload_dir><filename>`), never the bare
/// stored filename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicResponse {
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

impl ComicResponse {
    pub fn new(comic: Comic, upload_dir: &str) -> Self {
        let image = comic.image_path(upload_dir);
        Self {
            id: comic.id,
            isbn: comic.isbn,
            name: comic.name,
            year: comic.year,
            author: comic.author,
            description: comic.description,
            image,
            created_at: comic.created_at,
            updated_at: comic.updated_at,
        }
    }
}

/// `{ "status", "message", "data" }` envelope returned by mutations.
#[derive(Debug, Serialize)]
pub struct StatusResponse<T: Serialize> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> StatusResponse<T> {
    pub fn success(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message,
            data,
        }
    }

    pub fn error(message: &'static str, data: T) -> Self {
        Self {
            status: "error",
            message,
            data,
        }
    }
}
