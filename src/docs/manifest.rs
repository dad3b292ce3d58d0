//! Documentation manifest schema.
//!
//! ```toml
//! [[routes]]
//! path = "/api/user/{id}"
//! methods = ["GET", "PUT"]
//! description = "Fetch or replace a user"
//! middlewares = ["auth"]
//!
//! [[middlewares]]
//! name = "auth"
//! description = "Bearer token check"
//!
//! [[static_files]]
//! mount = "/assets"
//! directory = "./public"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::docs::DocsError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    pub routes: Vec<RouteDoc>,
    pub middlewares: Vec<MiddlewareDoc>,
    pub static_files: Vec<StaticFilesDoc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDoc {
    pub path: String,
    pub methods: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Names of middlewares wrapping the handler, outermost first.
    #[serde(default)]
    pub middlewares: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MiddlewareDoc {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticFilesDoc {
    pub mount: String,
    pub directory: String,
    #[serde(default)]
    pub description: String,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, DocsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DocsError> {
        let content = fs::read_to_string(path).map_err(|source| DocsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}
