//! Route registry.
//!
//! # Responsibilities
//! - Validate methods and compile templates at registration
//! - Keep static and templated routes in registration order
//! - Build each route's serving chain once (JSON header, method gate)
//! - Answer path lookups for the dispatcher
//!
//! # Design Decisions
//! - Setup is single-threaded (`&mut self`); serving only needs `&self`
//! - Group registration is plain string concatenation, no `/` normalization
//! - Duplicate templates are allowed; `MatchPolicy` decides between them

use std::collections::HashMap;

use crate::http::gate::route_decorators;
use crate::http::handler::Handler;
use crate::http::middleware::compose;
use crate::routing::error::RouteError;
use crate::routing::method::MethodSet;
use crate::routing::resolver::{resolve_template, MatchPolicy, Resolution};
use crate::routing::template::{compile, CompiledTemplate};

/// A route matched by exact path equality.
#[derive(Debug)]
pub struct StaticRoute {
    path: String,
    methods: MethodSet,
    endpoint: Handler,
}

impl StaticRoute {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> MethodSet {
        self.methods
    }

    /// Handler wrapped with the route decorators.
    pub fn endpoint(&self) -> &Handler {
        &self.endpoint
    }
}

/// A route with one or more `{name}` placeholders.
///
/// Holds only the compiled pattern; per-request values live in `RouteParams`.
#[derive(Debug)]
pub struct RouteTemplate {
    path: String,
    compiled: CompiledTemplate,
    methods: MethodSet,
    endpoint: Handler,
}

impl RouteTemplate {
    /// The path as registered, e.g. `/user/{id}`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn literal_key(&self) -> &str {
        &self.compiled.literal_key
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.compiled.param_names.iter().map(|n| n.as_ref())
    }

    pub fn compiled(&self) -> &CompiledTemplate {
        &self.compiled
    }

    pub fn methods(&self) -> MethodSet {
        self.methods
    }

    pub fn endpoint(&self) -> &Handler {
        &self.endpoint
    }
}

/// One entry of a route group: suffix appended to the group prefix.
#[derive(Debug, Clone)]
pub struct SubRoute {
    path: String,
    handler: Handler,
    methods: Vec<String>,
}

impl SubRoute {
    pub fn new<I, M>(path: impl Into<String>, handler: Handler, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        Self {
            path: path.into(),
            handler,
            methods: methods.into_iter().map(|m| m.as_ref().to_string()).collect(),
        }
    }
}

/// The route table.
///
/// Constructed explicitly, populated at startup, then shared read-only
/// (usually behind an `Arc`) with whatever serves requests.
#[derive(Debug, Default)]
pub struct Router {
    statics: Vec<StaticRoute>,
    static_index: HashMap<String, usize>,
    templates: Vec<RouteTemplate>,
    policy: MatchPolicy,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Register a route, templated or static.
    ///
    /// Paths without placeholders are registered as static routes.
    pub fn handle<I, M>(&mut self, path: &str, handler: Handler, methods: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let methods = MethodSet::parse(path, methods)?;
        let compiled = compile(path)?;

        if compiled.is_static() {
            return self.insert_static(path, handler, methods);
        }

        tracing::debug!(
            path = %path,
            literal_key = %compiled.literal_key,
            params = ?compiled.param_names,
            methods = %methods,
            "Registered templated route"
        );

        self.templates.push(RouteTemplate {
            path: path.to_string(),
            compiled,
            methods,
            endpoint: compose(handler, &route_decorators(methods)),
        });
        Ok(())
    }

    /// Register a route matched by exact path only.
    pub fn handle_static<I, M>(
        &mut self,
        path: &str,
        handler: Handler,
        methods: I,
    ) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let methods = MethodSet::parse(path, methods)?;
        if !compile(path)?.is_static() {
            return Err(RouteError::UnexpectedPlaceholder(path.to_string()));
        }
        self.insert_static(path, handler, methods)
    }

    /// Register every sub-route under `prefix`.
    ///
    /// The full path is `prefix + suffix`, verbatim: `"/api" + "user/{id}"`
    /// yields `/apiuser/{id}`. Stops at the first failing sub-route.
    pub fn group<I>(&mut self, prefix: &str, routes: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = SubRoute>,
    {
        for route in routes {
            let path = format!("{prefix}{}", route.path);
            self.handle(&path, route.handler, &route.methods)?;
        }
        Ok(())
    }

    /// Find the route for a request path.
    ///
    /// Exact static matches win outright; otherwise every template is
    /// considered and the configured policy picks among the matches.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        if let Some(&idx) = self.static_index.get(path) {
            return Resolution::Static(&self.statics[idx]);
        }

        match resolve_template(&self.templates, path, self.policy) {
            Some((route, params)) => Resolution::Template { route, params },
            None => Resolution::NotFound,
        }
    }

    pub fn static_routes(&self) -> &[StaticRoute] {
        &self.statics
    }

    pub fn templates(&self) -> &[RouteTemplate] {
        &self.templates
    }

    /// Total number of registered routes.
    pub fn len(&self) -> usize {
        self.statics.len() + self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_static(
        &mut self,
        path: &str,
        handler: Handler,
        methods: MethodSet,
    ) -> Result<(), RouteError> {
        if self.static_index.contains_key(path) {
            return Err(RouteError::DuplicateStaticRoute(path.to_string()));
        }

        tracing::debug!(path = %path, methods = %methods, "Registered static route");

        self.static_index.insert(path.to_string(), self.statics.len());
        self.statics.push(StaticRoute {
            path: path.to_string(),
            methods,
            endpoint: compose(handler, &route_decorators(methods)),
        });
        Ok(())
    }
}
