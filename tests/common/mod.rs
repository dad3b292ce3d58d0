//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Response;
use axum::Json;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use pathgate::config::ServerConfig;
use pathgate::http::{compose, from_fn, Handler, HttpServer, Next};
use pathgate::lifecycle::Shutdown;
use pathgate::routing::{route_params, MatchPolicy, Router, SubRoute};

/// Echoes the bound parameters as `{"route": tag, "params": {...}}`.
pub fn echo(tag: &'static str) -> Handler {
    Handler::new(move |req: Request<Body>| async move {
        let params: Map<String, Value> = route_params(&req)
            .map(|p| {
                p.iter()
                    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Json(json!({ "route": tag, "params": params }))
    })
}

/// Appends `name` to the request's `x-chain` header on the way in and to
/// the response's `x-chain` header on the way out.
pub fn tracer(name: &'static str) -> pathgate::http::BoxMiddleware {
    from_fn(move |mut req: Request<Body>, next: Next| async move {
        req.headers_mut()
            .append("x-chain", HeaderValue::from_static(name));
        let mut res: Response = next.call(req).await;
        res.headers_mut()
            .append("x-chain", HeaderValue::from_static(name));
        res
    })
}

/// Route table used across the integration tests.
pub fn fixture_router(policy: MatchPolicy) -> Router {
    let mut router = Router::with_policy(policy);
    pathgate::health::register(&mut router).unwrap();

    router.handle("/widgets", echo("widgets"), ["GET"]).unwrap();
    router.handle("/users/{id}", echo("user"), ["GET", "PUT"]).unwrap();
    router
        .handle("/files/{dir}/{name}", echo("file"), ["GET"])
        .unwrap();

    // Two templates matching the same paths
    router.handle("/shop/{item}", echo("shop-first"), ["GET"]).unwrap();
    router.handle("/shop/{sku}", echo("shop-second"), ["GET"]).unwrap();

    router
        .group("/api", [SubRoute::new("/user/{id}", echo("api-user"), ["GET"])])
        .unwrap();

    let chained = Handler::new(|req: Request<Body>| async move {
        let seen: Vec<String> = req
            .headers()
            .get_all("x-chain")
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();
        Json(json!({ "seen": seen }))
    });
    router
        .handle(
            "/chain",
            compose(chained, &[tracer("m1"), tracer("m2")]),
            ["GET"],
        )
        .unwrap();

    router
}

pub fn fixture_server(policy: MatchPolicy) -> HttpServer {
    HttpServer::new(ServerConfig::default(), fixture_router(policy))
}

/// Serve the fixture router on an ephemeral loopback port.
pub async fn spawn_server(
    policy: MatchPolicy,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = fixture_server(policy);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown, handle)
}
