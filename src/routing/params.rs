//! Request-scoped parameter context.
//!
//! # Responsibilities
//! - Carry the placeholder bindings produced by the resolver
//! - Travel with the request (extensions), never with the route
//! - Provide by-name lookup from inside handlers and middleware

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Request;

/// Ordered placeholder bindings for one request.
///
/// Names are shared with the registered template; values are owned by the
/// request and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(Arc<str>, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    /// Value bound to `name`, if the matched template declares it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Bindings in placeholder order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read the bindings attached to a request by the dispatcher.
///
/// Returns `None` for requests that did not go through a templated route.
pub fn route_params<B>(request: &Request<B>) -> Option<&RouteParams> {
    request.extensions().get::<RouteParams>()
}

/// Lets axum-style handlers take `RouteParams` as an argument.
///
/// Static routes yield an empty set.
impl<S> FromRequestParts<S> for RouteParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<RouteParams>().cloned().unwrap_or_default())
    }
}
