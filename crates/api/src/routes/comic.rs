//! Route definitions for the `/comic` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::comic;
use crate::state::AppState;

/// Comic routes.
///
/// ```text
/// GET    /comic/          -> list
/// POST   /comic/          -> create
/// PUT    /comic/          -> update (isbn in body)
/// GET    /comic/{isbn}    -> get_by_isbn
/// DELETE /comic/{isbn}    -> delete
/// ```
///
/// The collection routes answer with and without the trailing slash.
pub fn router() -> Router<AppState> {
    let collection = get(comic::list).post(comic::create).put(comic::update);

    Router::new()
        .route("/comic", collection.clone())
        .route("/comic/", collection)
        .route(
            "/comic/{isbn}",
            get(comic::get_by_isbn).delete(comic::delete),
        )
}
