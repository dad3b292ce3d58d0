//! Pathgate demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum::serve ──▶ tower-http layers ──▶ RouterService
//!                                     (request id, trace,    │
//!                                      timeout)              ▼
//!                                                     Router::resolve
//!                                                  ┌─────────┼──────────┐
//!                                                  ▼         ▼          ▼
//!                                               Static    Template    NotFound
//!                                                  │     + params       │
//!                                                  ▼         ▼          ▼
//!                                        JSON header → method gate    404
//!                                                  → middlewares → handler
//! ```
//!
//! Registers `/health` plus a small `/api` group, then serves until SIGINT or
//! SIGTERM.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use pathgate::config::{load_config, ServerConfig};
use pathgate::http::{compose, from_fn, Handler, HttpServer, Next, RequestIdExt};
use pathgate::lifecycle::{signals, Shutdown};
use pathgate::observability::logging;
use pathgate::routing::{route_params, Router, SubRoute};

#[derive(Parser)]
#[command(name = "pathgate")]
#[command(about = "Demo server for the pathgate router", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    logging::init(&config.observability)?;

    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.server.bind_address,
        match_policy = ?config.routing.match_policy,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let router = build_router(&config)?;

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::trigger_on_signal(&shutdown).await;
    });

    let server = HttpServer::new(config, router);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(config: &ServerConfig) -> Result<Router, pathgate::RouteError> {
    let mut router = Router::with_policy(config.routing.match_policy);
    pathgate::health::register(&mut router)?;

    let access_log = from_fn(|req, next: Next| async move {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let request_id = req.request_id().unwrap_or("-").to_string();
        let res = next.call(req).await;
        tracing::info!(%request_id, %method, %path, status = %res.status(), "api request");
        res
    });

    router.group(
        "/api",
        [
            SubRoute::new("/users", compose(list_users(), &[access_log.clone()]), ["GET"]),
            SubRoute::new(
                "/user/{id}",
                compose(get_user(), &[access_log.clone()]),
                ["GET", "PUT", "DELETE"],
            ),
        ],
    )?;

    Ok(router)
}

fn list_users() -> Handler {
    Handler::new(|_req| async { Json(json!({ "users": ["1", "2", "3"] })) })
}

fn get_user() -> Handler {
    Handler::new(|req| async move {
        match route_params(&req).and_then(|params| params.get("id")) {
            Some(id) => Json(json!({ "id": id, "method": req.method().as_str() })).into_response(),
            None => StatusCode::BAD_REQUEST.into_response(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    async fn call(router: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-request-id", "demo-1")
            .body(Body::empty())
            .unwrap();
        let res = router.dispatch(req).await;
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_demo_user_route_echoes_bound_id() {
        let router = build_router(&ServerConfig::default()).unwrap();

        let (status, body) = call(&router, "PUT", "/api/user/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "42", "method": "PUT" }));

        let (status, body) = call(&router, "GET", "/api/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["users"], json!(["1", "2", "3"]));
    }
}
