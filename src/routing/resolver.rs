//! Request resolver.
//!
//! # Algorithm
//! ```text
//! for each template, in registration order:
//!     1. strip leading '/' from the request path
//!     2. the path must start with the literal key, ending on a segment boundary
//!     3. split the remainder on '/', drop empty segments
//!     4. segment count must equal placeholder count
//!     5. bind segment i → param_names[i]
//! winner chosen by MatchPolicy among all candidates
//! ```
//!
//! # Design Decisions
//! - Read-only over the registry: every call allocates its own `RouteParams`
//! - No specificity ranking unless `LongestLiteralKey` is configured
//! - A miss is an explicit outcome, never a default route

use serde::{Deserialize, Serialize};

use crate::routing::params::RouteParams;
use crate::routing::registry::{RouteTemplate, StaticRoute};
use crate::routing::template::CompiledTemplate;

/// Which candidate wins when several templates match one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Last registered template wins (legacy linear-scan behavior).
    #[default]
    LastRegistered,
    /// First registered template wins.
    FirstRegistered,
    /// Longest literal key wins; ties go to the last registered.
    LongestLiteralKey,
}

/// Outcome of resolving a request path.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Exact match on a static route. No parameters.
    Static(&'a StaticRoute),
    /// Templated match with a request-local binding.
    Template {
        route: &'a RouteTemplate,
        params: RouteParams,
    },
    /// Nothing matched.
    NotFound,
}

/// Try to bind `path` against a single compiled template.
///
/// Returns `None` when the literal key does not match or the number of
/// trailing segments differs from the number of placeholders.
pub fn bind(template: &CompiledTemplate, path: &str) -> Option<RouteParams> {
    let trimmed = path.trim_start_matches('/');

    let rest = if template.literal_key.is_empty() {
        trimmed
    } else {
        let rest = trimmed.strip_prefix(template.literal_key.as_str())?;
        // "users/1" must not match key "user"
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        rest
    };

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let mut params = RouteParams::with_capacity(template.param_names.len());
    for name in &template.param_names {
        params.push(name.clone(), segments.next()?);
    }
    if segments.next().is_some() {
        return None;
    }

    Some(params)
}

/// Scan `templates` for `path` and pick a winner according to `policy`.
pub fn resolve_template<'a>(
    templates: &'a [RouteTemplate],
    path: &str,
    policy: MatchPolicy,
) -> Option<(&'a RouteTemplate, RouteParams)> {
    let mut candidates = templates
        .iter()
        .filter_map(|route| bind(route.compiled(), path).map(|params| (route, params)));

    match policy {
        MatchPolicy::FirstRegistered => candidates.next(),
        MatchPolicy::LastRegistered => candidates.last(),
        MatchPolicy::LongestLiteralKey => {
            candidates.max_by_key(|(route, _)| route.literal_key().len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::template::compile;

    fn bound(template: &str, path: &str) -> Option<Vec<(String, String)>> {
        let compiled = compile(template).unwrap();
        bind(&compiled, path).map(|p| {
            p.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_bind_positional() {
        assert_eq!(bound("/user/{id}", "/user/42"), Some(vec![pair("id", "42")]));
        assert_eq!(
            bound("/org/{org}/{team}", "/org/acme/core"),
            Some(vec![pair("org", "acme"), pair("team", "core")])
        );
    }

    #[test]
    fn test_bind_rejects_wrong_segment_count() {
        assert_eq!(bound("/user/{id}", "/user"), None);
        assert_eq!(bound("/user/{id}", "/user/"), None);
        assert_eq!(bound("/user/{id}", "/user/42/extra"), None);
        assert_eq!(bound("/org/{org}/{team}", "/org/acme"), None);
    }

    #[test]
    fn test_bind_ignores_empty_segments() {
        assert_eq!(bound("/user/{id}", "/user/42/"), Some(vec![pair("id", "42")]));
        assert_eq!(bound("/user/{id}", "//user//42"), Some(vec![pair("id", "42")]));
    }

    #[test]
    fn test_bind_requires_segment_boundary_after_key() {
        assert_eq!(bound("/user/{id}", "/users/42"), None);
        assert_eq!(bound("/user/{id}", "/admin/user/42"), None);
    }

    #[test]
    fn test_bind_empty_literal_key() {
        assert_eq!(bound("/{tenant}", "/acme"), Some(vec![pair("tenant", "acme")]));
        assert_eq!(bound("/{tenant}", "/acme/extra"), None);
        assert_eq!(bound("/{tenant}", "/"), None);
    }

    #[test]
    fn test_bind_multi_segment_key() {
        assert_eq!(
            bound("/api/v1/user/{id}", "/api/v1/user/7"),
            Some(vec![pair("id", "7")])
        );
        assert_eq!(bound("/api/v1/user/{id}", "/api/v2/user/7"), None);
    }

    #[test]
    fn test_bind_does_not_touch_template() {
        let compiled = compile("/user/{id}").unwrap();
        let before = compiled.clone();
        let _ = bind(&compiled, "/user/1");
        let _ = bind(&compiled, "/user/2");
        assert_eq!(compiled, before);
    }

    #[test]
    fn test_match_policy_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MatchPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"longest_literal_key\"").unwrap();
        assert_eq!(w.policy, MatchPolicy::LongestLiteralKey);
        assert_eq!(MatchPolicy::default(), MatchPolicy::LastRegistered);
    }
}
