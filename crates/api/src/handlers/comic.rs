//! Handlers for the `/comic` resource.
//!
//! Mutations run as extract → validate → store image → persist → respond.
//! A validation failure stops the request before anything is written.

use axum::extract::{Path, State};
use axum::Json;
use comicstore_core::validation::{self, IsbnRule};

use crate::error::AppResult;
use crate::extract::{ComicSubmission, UploadedImage};
use crate::response::{ComicResponse, StatusResponse};
use crate::state::AppState;

/// GET /comic/
///
/// List every comic. An empty store yields an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ComicResponse>>> {
    let comics = state.comics.find_all().await?;
    let upload_dir = &state.config.upload_dir;
    Ok(Json(
        comics
            .into_iter()
            .map(|c| ComicResponse::new(c, upload_dir))
            .collect(),
    ))
}

/// GET /comic/{isbn}
///
/// Responds `null` rather than 404 when no comic has this ISBN.
pub async fn get_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Option<ComicResponse>>> {
    let comic = state.comics.find_by_isbn(&isbn).await?;
    Ok(Json(
        comic.map(|c| ComicResponse::new(c, &state.config.upload_dir)),
    ))
}

/// POST /comic/
pub async fn create(
    State(state): State<AppState>,
    submission: ComicSubmission,
) -> AppResult<Json<StatusResponse<ComicResponse>>> {
    let ComicSubmission { form, image } = submission;
    validation::validate_comic_form(&form, IsbnRule::MustBeUnused, state.comics.as_ref()).await?;

    let image = store_image(&state, image).await?;
    let comic = state.comics.create(&form.into_fields(image)).await?;
    tracing::info!(id = comic.id, isbn = %comic.isbn, "Comic created");

    Ok(Json(StatusResponse::success(
        "comic added",
        ComicResponse::new(comic, &state.config.upload_dir),
    )))
}

/// PUT /comic/
///
/// The target ISBN comes from the body. Every editable field is replaced;
/// without an uploaded file the stored image name becomes empty. The
/// previous image file is left on disk.
pub async fn update(
    State(state): State<AppState>,
    submission: ComicSubmission,
) -> AppResult<Json<StatusResponse<Option<ComicResponse>>>> {
    let ComicSubmission { form, image } = submission;
    validation::validate_comic_form(&form, IsbnRule::MustExist, state.comics.as_ref()).await?;

    let image = store_image(&state, image).await?;
    let isbn = form.isbn.clone();
    let affected = state
        .comics
        .update_by_isbn(&isbn, &form.into_fields(image))
        .await?;
    tracing::info!(%isbn, affected, "Comic updated");

    let comic = state.comics.find_by_isbn(&isbn).await?;
    Ok(Json(StatusResponse::success(
        "comic updated",
        comic.map(|c| ComicResponse::new(c, &state.config.upload_dir)),
    )))
}

/// DELETE /comic/{isbn}
///
/// Always 200 once the ISBN validates; `status` tells whether a row went away.
pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<StatusResponse<Option<ComicResponse>>>> {
    validation::validate_isbn_param(&isbn, state.comics.as_ref()).await?;

    let affected = state.comics.delete_by_isbn(&isbn).await?;
    tracing::info!(%isbn, affected, "Comic deleted");

    let body = if affected > 0 {
        StatusResponse::success("comic deleted", None)
    } else {
        StatusResponse::error("Failed", None)
    };
    Ok(Json(body))
}

/// Write the uploaded image, if any, returning the stored filename.
async fn store_image(state: &AppState, image: Option<UploadedImage>) -> AppResult<String> {
    match image {
        Some(upload) => Ok(state.images.save(&upload.file_name, &upload.data).await?),
        None => Ok(String::new()),
    }
}
