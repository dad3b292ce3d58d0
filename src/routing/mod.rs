//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     path + handler + methods
//!     → method.rs (validate against GET/POST/PUT/DELETE)
//!     → template.rs (literal key + ordered placeholder names)
//!     → registry.rs (StaticRoute or RouteTemplate, in registration order)
//!
//! Incoming Request (path):
//!     → registry.rs (exact static lookup)
//!     → resolver.rs (linear scan over templates, fresh RouteParams)
//!     → Return: Static, Template + params, or NotFound
//! ```
//!
//! # Design Decisions
//! - Router is an explicit value, never a process-wide singleton
//! - Registry is immutable once serving starts (shared via Arc, no locks)
//! - Resolution never writes into a registered template
//! - Registration failures are returned, never fatal
//! - Match order is registration order; the winner is chosen by `MatchPolicy`

pub mod error;
pub mod method;
pub mod params;
pub mod registry;
pub mod resolver;
pub mod template;

pub use error::RouteError;
pub use method::{Method, MethodSet};
pub use params::{route_params, RouteParams};
pub use registry::{RouteTemplate, Router, StaticRoute, SubRoute};
pub use resolver::{MatchPolicy, Resolution};
pub use template::CompiledTemplate;
