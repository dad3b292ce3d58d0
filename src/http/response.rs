//! Fixed JSON responses emitted by the routing layer.
//!
//! # Design Decisions
//! - Bodies are byte-exact constants; clients match on them
//! - A method mismatch answers 404, not 405

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;

/// Content type set on every routed response.
pub const APPLICATION_JSON: &str = "application/json";

/// Body for a request whose method is not allowed on the matched route.
pub const METHOD_NOT_ALLOWED_BODY: &str = r#"{"error": "The method for this route doesnt exist"}"#;

/// Body for a path no route matches.
pub const NOT_FOUND_BODY: &str = r#"{"error": "Route not found"}"#;

/// Body for a path whose percent-escapes do not decode to UTF-8.
pub const INVALID_PATH_BODY: &str = r#"{"error": "Invalid request path"}"#;

/// Build a response with a static JSON body.
pub fn json(status: StatusCode, body: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_JSON),
    );
    response
}

pub fn method_not_allowed() -> Response {
    json(StatusCode::NOT_FOUND, METHOD_NOT_ALLOWED_BODY)
}

pub fn not_found() -> Response {
    json(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

pub fn invalid_path() -> Response {
    json(StatusCode::BAD_REQUEST, INVALID_PATH_BODY)
}
