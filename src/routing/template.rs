//! Template compiler.
//!
//! Turns a registered path such as `/api/user/{id}` into the literal key the
//! resolver narrows on (`api/user`) and the ordered placeholder names
//! (`["id"]`). Runs once per route, at registration time.
//!
//! # Template Syntax
//! ```text
//!  /user/{id}            literal key "user", params [id]
//!  /org/{org}/{team}     literal key "org",  params [org, team]
//!  /{tenant}             literal key "",     params [tenant]
//!  /status               no placeholders → static route
//! ```
//!
//! A placeholder occupies a whole segment. Partial segments (`/v{n}`),
//! several tokens in one segment and literals after the first placeholder
//! are rejected.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::routing::error::RouteError;

/// Any `{name}` token anywhere in the path.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w*)\}").expect("placeholder regex should be valid"));

/// A segment made of exactly one token.
static PLACEHOLDER_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(\w*)\}$").expect("placeholder segment regex should be valid"));

/// Immutable result of compiling a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    /// Path prefix before the first placeholder, without leading/trailing `/`.
    pub literal_key: String,
    /// Placeholder names, left to right.
    pub param_names: Vec<Arc<str>>,
}

impl CompiledTemplate {
    /// True when the path has no placeholders and should be registered as static.
    pub fn is_static(&self) -> bool {
        self.param_names.is_empty()
    }
}

/// Compile a path into its literal key and placeholder names.
pub fn compile(path: &str) -> Result<CompiledTemplate, RouteError> {
    let mut param_names: Vec<Arc<str>> = Vec::new();
    let mut seen_placeholder = false;

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if let Some(caps) = PLACEHOLDER_SEGMENT.captures(segment) {
            let name = &caps[1];
            if name.is_empty() {
                return Err(RouteError::EmptyPlaceholder(path.to_string()));
            }
            if param_names.iter().any(|n| n.as_ref() == name) {
                return Err(RouteError::DuplicateParam {
                    name: name.to_string(),
                    path: path.to_string(),
                });
            }
            param_names.push(Arc::from(name));
            seen_placeholder = true;
        } else if segment.contains(['{', '}']) {
            return Err(RouteError::MalformedSegment {
                segment: segment.to_string(),
                path: path.to_string(),
            });
        } else if seen_placeholder {
            return Err(RouteError::LiteralAfterPlaceholder {
                segment: segment.to_string(),
                path: path.to_string(),
            });
        }
    }

    let prefix = match PLACEHOLDER.find(path) {
        Some(token) => &path[..token.start()],
        None => path,
    };

    Ok(CompiledTemplate {
        literal_key: prefix.trim_matches('/').to_string(),
        param_names,
    })
}
