//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tower-http layers, request ID)
//!     → dispatch.rs (RouterService → Router::resolve)
//!     → gate.rs (JSON content type, method gate)
//!     → middleware.rs (user middleware, outermost first)
//!     → handler.rs (user handler)
//!     → response.rs (fixed JSON bodies for misses and mismatches)
//! ```

pub mod dispatch;
pub mod gate;
pub mod handler;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use dispatch::RouterService;
pub use handler::Handler;
pub use middleware::{compose, from_fn, transform, BoxMiddleware, Middleware, Next};
pub use request::{MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
