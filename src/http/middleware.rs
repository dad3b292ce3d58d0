//! Middleware composition.
//!
//! # Responsibilities
//! - Define middleware as handler transformers (`Handler -> Handler`)
//! - Compose an ordered list around a handler, first entry outermost
//! - Adapt `(Request, Next)` async functions into middleware
//!
//! # Design Decisions
//! - Composition is pure wrapping; nothing runs until the result is called
//! - `compose(h, [m1, m2])` == `m1(m2(h))`: m1 sees the request first and the
//!   response last

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::IntoResponse;

use crate::http::handler::Handler;

/// The rest of the chain, as seen from inside a middleware.
pub type Next = Handler;

/// Shared, type-erased middleware.
pub type BoxMiddleware = Arc<dyn Middleware>;

/// Transforms a handler into a wrapped handler.
pub trait Middleware: Send + Sync {
    fn wrap(&self, next: Handler) -> Handler;
}

/// Wrap `handler` with `middleware`, first entry outermost.
pub fn compose(handler: Handler, middleware: &[BoxMiddleware]) -> Handler {
    middleware
        .iter()
        .rev()
        .fold(handler, |next, layer| layer.wrap(next))
}

/// Middleware from an async `(request, next)` function.
///
/// ```rust,ignore
/// let log = from_fn(|req, next: Next| async move {
///     tracing::info!(path = %req.uri().path(), "before");
///     let res = next.call(req).await;
///     tracing::info!(status = %res.status(), "after");
///     res
/// });
/// ```
pub fn from_fn<F, Fut, R>(f: F) -> BoxMiddleware
where
    F: Fn(Request<Body>, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(FromFn { f: Arc::new(f) })
}

/// Middleware from a plain handler transformer.
pub fn transform<F>(f: F) -> BoxMiddleware
where
    F: Fn(Handler) -> Handler + Send + Sync + 'static,
{
    Arc::new(Transform { f })
}

struct FromFn<F> {
    f: Arc<F>,
}

impl<F, Fut, R> Middleware for FromFn<F>
where
    F: Fn(Request<Body>, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn wrap(&self, next: Handler) -> Handler {
        let f = Arc::clone(&self.f);
        Handler::new(move |req| (*f)(req, next.clone()))
    }
}

struct Transform<F> {
    f: F,
}

impl<F> Middleware for Transform<F>
where
    F: Fn(Handler) -> Handler + Send + Sync,
{
    fn wrap(&self, next: Handler) -> Handler {
        (self.f)(next)
    }
}
