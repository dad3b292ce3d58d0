//! Per-route decorators applied at registration.
//!
//! # Responsibilities
//! - Method gate: reject requests whose method is not in the route's set
//! - JSON content type: default `Content-Type: application/json`
//!
//! # Data Flow
//! ```text
//! JsonContentType → MethodGate → [user middleware] → handler
//! ```

use axum::http::{header, HeaderValue};

use crate::http::handler::Handler;
use crate::http::middleware::{BoxMiddleware, Middleware};
use crate::http::response::{self, APPLICATION_JSON};
use crate::routing::MethodSet;

/// Only lets allowed methods through to the wrapped handler.
///
/// A rejected request never reaches the handler; it gets the fixed
/// 404 JSON error instead.
#[derive(Debug, Clone, Copy)]
pub struct MethodGate {
    methods: MethodSet,
}

impl MethodGate {
    pub fn new(methods: MethodSet) -> Self {
        Self { methods }
    }
}

impl Middleware for MethodGate {
    fn wrap(&self, next: Handler) -> Handler {
        let methods = self.methods;
        Handler::new(move |req| {
            let next = next.clone();
            async move {
                if methods.allows(req.method()) {
                    return next.call(req).await;
                }
                tracing::debug!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    allowed = %methods,
                    "Method not allowed"
                );
                response::method_not_allowed()
            }
        })
    }
}

/// Sets `Content-Type: application/json` unless the handler chose its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentType;

impl Middleware for JsonContentType {
    fn wrap(&self, next: Handler) -> Handler {
        Handler::new(move |req| {
            let next = next.clone();
            async move {
                let mut res = next.call(req).await;
                res.headers_mut()
                    .entry(header::CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static(APPLICATION_JSON));
                res
            }
        })
    }
}

/// The fixed decorators every registered route is served through.
pub(crate) fn route_decorators(methods: MethodSet) -> [BoxMiddleware; 2] {
    [
        std::sync::Arc::new(JsonContentType),
        std::sync::Arc::new(MethodGate::new(methods)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::middleware::compose;
    use crate::routing::Method;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn request(method: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/widgets")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_gate_blocks_other_methods() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handler = Handler::new(move |_req| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { "widgets" }
        });
        let gated = MethodGate::new([Method::Get].into_iter().collect()).wrap(handler);

        let res = gated.call(request("POST")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], response::METHOD_NOT_ALLOWED_BODY.as_bytes());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let res = gated.call(request("GET")).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gate_rejects_methods_outside_enumeration() {
        let gated = MethodGate::new(Method::ALL.into_iter().collect())
            .wrap(Handler::new(|_req| async { "x" }));
        let res = gated.call(request("PATCH")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_json_content_type_is_default_only() {
        let plain = JsonContentType.wrap(Handler::new(|_req| async { StatusCode::OK }));
        let res = plain.call(request("GET")).await;
        assert_eq!(res.headers()[header::CONTENT_TYPE], APPLICATION_JSON);

        // &str responses carry text/plain already
        let text = JsonContentType.wrap(Handler::new(|_req| async { "hello" }));
        let res = text.call(request("GET")).await;
        assert_eq!(res.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_decorators_put_json_header_on_gate_errors() {
        let methods: MethodSet = [Method::Put].into_iter().collect();
        let endpoint = compose(
            Handler::new(|_req| async { StatusCode::OK }),
            &route_decorators(methods),
        );
        let res = endpoint.call(request("DELETE")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
    }
}
