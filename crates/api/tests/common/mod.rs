#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use comicstore_core::images::ImageStore;
use comicstore_db::InMemoryComicRepository;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use comicstore_api::config::ServerConfig;
use comicstore_api::router::build_app_router;
use comicstore_api::state::AppState;

const BOUNDARY: &str = "comicstore-test-boundary";

/// A router over an in-memory store plus the temp public root it serves.
///
/// The `TempDir` must outlive the router.
pub struct TestApp {
    pub router: Router,
    pub public_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let public_dir = tempfile::tempdir().expect("temp public dir");
        let config = test_config(&public_dir);
        let state = AppState {
            comics: Arc::new(InMemoryComicRepository::new()),
            images: Arc::new(ImageStore::new(config.upload_path())),
            config: Arc::new(config),
        };
        Self {
            router: build_app_router(state),
            public_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn multipart(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, file)))
            .unwrap();
        self.send(request).await
    }

    pub async fn json(&self, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}

/// Configuration rooted at `public_dir`, uploads under `/img/`.
pub fn test_config(public_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".parse().unwrap()],
        request_timeout_secs: 30,
        public_dir: public_dir.path().to_path_buf(),
        upload_dir: "/img/".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// The five comic fields, all valid, for `isbn`.
pub fn valid_fields(isbn: &str) -> Vec<(&str, &str)> {
    vec![
        ("isbn", isbn),
        ("name", "AB"),
        ("year", "1999"),
        ("author", "CD"),
        ("description", "0123456789"),
    ]
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
