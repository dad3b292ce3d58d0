//! Route documentation generation.
//!
//! # Data Flow
//! ```text
//! manifest (TOML)
//!     → manifest.rs (deserialize)
//!     → generate.rs (compile every route path, check middleware references)
//!     → Markdown document (routes / middlewares / static files sections)
//! ```
//!
//! # Design Decisions
//! - Route paths go through the same template compiler as registration, so a
//!   manifest that documents cleanly also registers cleanly
//! - Output is plain Markdown, one table per section

pub mod generate;
pub mod manifest;

use std::path::PathBuf;

use thiserror::Error;

use crate::routing::RouteError;

pub use generate::{generate, output_path, write_docs, DocKind};
pub use manifest::{Manifest, MiddlewareDoc, RouteDoc, StaticFilesDoc};

/// Errors produced while generating documentation.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("route {path}: {source}")]
    Route {
        path: String,
        #[source]
        source: RouteError,
    },

    #[error("route {route} references undeclared middleware {name:?}")]
    UnknownMiddleware { route: String, name: String },
}
