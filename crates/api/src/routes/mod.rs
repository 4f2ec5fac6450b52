pub mod comic;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                 service + store health
///
/// /comic, /comic/         list (GET), create (POST), update (PUT)
/// /comic/{isbn}           get (GET), delete (DELETE)
/// ```
///
/// Anything else falls through to the static file service.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(comic::router())
}
