//! Liveness endpoint.
//!
//! # Responsibilities
//! - Answer `GET /health` with a fixed JSON body
//!
//! # Design Decisions
//! - Registered as an ordinary static route; the router has no built-in paths
//! - No dependency checks: 200 means the process is serving

use axum::http::StatusCode;
use axum::response::Response;

use crate::http::response;
use crate::http::Handler;
use crate::routing::{Method, RouteError, Router};

/// Path the binary registers the health handler under.
pub const HEALTH_PATH: &str = "/health";

/// Body returned while the server is alive.
pub const HEALTH_BODY: &str = r#"{"alive": "Server running"}"#;

pub fn health_response() -> Response {
    response::json(StatusCode::OK, HEALTH_BODY)
}

pub fn health_handler() -> Handler {
    Handler::new(|_req| async { health_response() })
}

/// Register `GET /health` on `router`.
pub fn register(router: &mut Router) -> Result<(), RouteError> {
    router.handle_static(HEALTH_PATH, health_handler(), [Method::Get])
}
