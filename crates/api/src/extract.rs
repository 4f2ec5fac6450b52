//! Extraction of comic submissions from request bodies.
//!
//! POST and PUT accept `multipart/form-data` (with an optional `image` file
//! part), JSON objects, and urlencoded forms. Bodies of any other type
//! contribute no fields, so the request fails field validation instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use comicstore_core::validation::ComicForm;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Name of the multipart part carrying the cover image.
const IMAGE_FIELD: &str = "image";

/// An uploaded file held in memory until validation passes.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub data: Bytes,
}

/// Comic fields plus the optional uploaded image.
#[derive(Debug, Clone, Default)]
pub struct ComicSubmission {
    pub form: ComicForm,
    pub image: Option<UploadedImage>,
}

impl<S> FromRequest<S> for ComicSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(from_json(object))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(from_pairs(pairs))
        } else {
            Ok(Self::default())
        }
    }
}

async fn from_multipart(mut multipart: Multipart) -> Result<ComicSubmission, AppError> {
    let mut submission = ComicSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) if name == IMAGE_FIELD => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Browsers send an empty, unnamed part when no file is chosen.
                if !file_name.is_empty() {
                    submission.image = Some(UploadedImage { file_name, data });
                }
            }
            Some(_) => {} // ignore other file parts
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                submission.form.set(&name, text);
            }
        }
    }

    Ok(submission)
}

fn from_json(object: Map<String, Value>) -> ComicSubmission {
    let mut form = ComicForm::default();
    for (key, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        form.set(&key, text);
    }
    ComicSubmission { form, image: None }
}

fn from_pairs(pairs: Vec<(String, String)>) -> ComicSubmission {
    let mut form = ComicForm::default();
    for (key, value) in pairs {
        form.set(&key, value);
    }
    ComicSubmission { form, image: None }
}
