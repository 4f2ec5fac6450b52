use std::sync::Arc;

use comicstore_core::images::ImageStore;
use comicstore_core::repository::ComicRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Comic persistence.
    pub comics: Arc<dyn ComicRepository>,
    /// Writes uploaded cover images.
    pub images: Arc<ImageStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
