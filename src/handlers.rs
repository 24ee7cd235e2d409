use axum::{http::Uri, Json};
use percent_encoding::percent_decode_str;

use crate::models::{GenericResponse, HealthResponse};

pub async fn index() -> Json<GenericResponse> {
    Json(
        GenericResponse::message("Welcome to Go API starter!")
            .with_endpoint("health", "/health")
            .with_endpoint("hello", "/hello/{name}"),
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// Read from the raw URI: `Path` rejects segments that do not decode to
// UTF-8. Invalid bytes become U+FFFD instead.
pub async fn hello(uri: Uri) -> Json<GenericResponse> {
    let segment = uri.path().strip_prefix("/hello/").unwrap_or_default();
    let name = percent_decode_str(segment).decode_utf8_lossy();
    Json(GenericResponse::message(format!("Hello, {}!", name)))
}
