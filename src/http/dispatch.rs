//! Request dispatch.
//!
//! # Data Flow
//! ```text
//! Request (path)
//!     → percent-decode (invalid UTF-8 → 400)
//!     → Router::resolve
//!         Static   → endpoint (JSON header → method gate → handler)
//!         Template → insert RouteParams → endpoint
//!         NotFound → 404 {"error": "Route not found"}
//! ```
//!
//! # Design Decisions
//! - A miss is a response, never a panic
//! - Routing sees the decoded path, so `%2F` acts as a segment separator
//! - `RouterService` is a plain tower `Service` so it can sit behind any
//!   axum/tower stack as a fallback

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use percent_encoding::percent_decode_str;
use tower::Service;

use crate::http::response;
use crate::routing::{Resolution, Router};

impl Router {
    /// Route one request to its endpoint and run it.
    pub async fn dispatch(&self, mut request: Request<Body>) -> Response {
        let path = match percent_decode_str(request.uri().path()).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => {
                tracing::debug!(raw_path = %request.uri().path(), "Path is not valid UTF-8");
                return response::invalid_path();
            }
        };

        let endpoint = match self.resolve(&path) {
            Resolution::Static(route) => route.endpoint().clone(),
            Resolution::Template { route, params } => {
                tracing::debug!(
                    path = %path,
                    template = %route.path(),
                    params = params.len(),
                    "Resolved templated route"
                );
                request.extensions_mut().insert(params);
                route.endpoint().clone()
            }
            Resolution::NotFound => {
                tracing::debug!(path = %path, method = %request.method(), "No route matched");
                return response::not_found();
            }
        };

        endpoint.call(request).await
    }

    /// Wrap the router into a tower service.
    pub fn into_service(self) -> RouterService {
        RouterService::new(Arc::new(self))
    }
}

/// Tower service over a shared, read-only router.
#[derive(Debug, Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl RouterService {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let router = Arc::clone(&self.router);
        Box::pin(async move { Ok(router.dispatch(request).await) })
    }
}
