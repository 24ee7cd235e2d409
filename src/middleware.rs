use axum::{
    http::{header, HeaderValue},
    response::Response,
};

/// Forces `Content-Type: application/json` on every outbound response,
/// replacing whatever the handler set.
pub async fn json_content_type(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
