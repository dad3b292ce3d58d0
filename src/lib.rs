//! Pathgate: an in-process HTTP router.
//!
//! Routes are registered on an explicit [`Router`] value at startup, then the
//! table is frozen behind an `Arc` and shared with the serving layer.

pub mod config;
pub mod docs;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::{compose, from_fn, transform, BoxMiddleware, Handler, HttpServer, Middleware, Next};
pub use lifecycle::Shutdown;
pub use routing::{route_params, MatchPolicy, Method, RouteError, RouteParams, Router, SubRoute};
